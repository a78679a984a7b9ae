//! Developer task runner: `cargo run --bin xtask -- <task> [--locked]`.

use std::env;
use std::process::{Command, ExitCode};

const USAGE: &str = "Usage:
  cargo run --bin xtask -- precommit [--locked]
  cargo run --bin xtask -- ci [--locked] [--with-docker]
  cargo run --bin xtask -- docker-tests [--locked]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Precommit,
    Ci,
    DockerTests,
}

impl Task {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "precommit" => Some(Self::Precommit),
            "ci" => Some(Self::Ci),
            "docker-tests" => Some(Self::DockerTests),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Precommit => "precommit",
            Self::Ci => "ci",
            Self::DockerTests => "docker-tests",
        }
    }

    fn allowed_flags(self) -> &'static [&'static str] {
        match self {
            Self::Precommit | Self::DockerTests => &["--locked"],
            Self::Ci => &["--locked", "--with-docker"],
        }
    }
}

#[derive(Debug, Default)]
struct Flags {
    locked: bool,
    with_docker: bool,
}

fn parse_flags(task: Task, rest: &[String]) -> Result<Flags, String> {
    let mut flags = Flags::default();
    for flag in rest {
        if !task.allowed_flags().contains(&flag.as_str()) {
            return Err(format!("Unknown option for {}: {flag}", task.name()));
        }
        match flag.as_str() {
            "--locked" => flags.locked = true,
            "--with-docker" => flags.with_docker = true,
            _ => {}
        }
    }
    Ok(flags)
}

fn run(program: &str, args: &[&str]) -> Result<(), String> {
    eprintln!("+ {program} {}", args.join(" "));
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|error| format!("Failed to run `{program}`: {error}"))?;

    if status.success() {
        Ok(())
    } else {
        Err(format!(
            "`{program} {}` exited with status {status}",
            args.join(" ")
        ))
    }
}

/// Cargo arguments with `--locked` placed before any `--` separator.
fn cargo_args<'a>(args: &[&'a str], locked: bool) -> Vec<&'a str> {
    let mut full: Vec<&str> = Vec::with_capacity(args.len() + 1);
    let split = args.iter().position(|a| *a == "--").unwrap_or(args.len());
    full.extend_from_slice(&args[..split]);
    if locked {
        full.push("--locked");
    }
    full.extend_from_slice(&args[split..]);
    full
}

fn cargo(args: &[&str], locked: bool) -> Result<(), String> {
    run("cargo", &cargo_args(args, locked))
}

fn precommit(locked: bool) -> Result<(), String> {
    run("cargo", &["fmt", "--all", "--", "--check"])?;
    cargo(
        &["clippy", "--all-targets", "--", "-D", "warnings"],
        locked,
    )?;
    cargo(&["test", "--lib", "--tests"], locked)
}

fn docker_tests(locked: bool) -> Result<(), String> {
    cargo(
        &["test", "--features", "db", "--tests", "--", "--ignored"],
        locked,
    )
}

fn ci(flags: &Flags) -> Result<(), String> {
    precommit(flags.locked)?;
    cargo(&["test", "--doc"], flags.locked)?;
    if flags.with_docker {
        docker_tests(flags.locked)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(name) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let Some(task) = Task::parse(name) else {
        eprintln!("Unknown command: {name}\n{USAGE}");
        return ExitCode::from(2);
    };

    let flags = match parse_flags(task, &args[1..]) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("{error}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let result = match task {
        Task::Precommit => precommit(flags.locked),
        Task::Ci => ci(&flags),
        Task::DockerTests => docker_tests(flags.locked),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}
