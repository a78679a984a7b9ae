//! CLI entry point for `mysql-to-openapi`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use mysql_to_openapi::config::DatabaseConfig;
use mysql_to_openapi::error::SourceError;
use mysql_to_openapi::output::formatter::{FileSink, OutputFormat};
use mysql_to_openapi::pipeline;
use mysql_to_openapi::schema::ddl::DdlSource;
use mysql_to_openapi::schema::source::SchemaSource;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mysql-to-openapi",
    about = "Generate an OpenAPI 2.0 document with CRUD paths for every table of a MySQL schema"
)]
struct Cli {
    #[command(flatten)]
    database: DatabaseConfig,

    /// Read CREATE TABLE statements from these files instead of a live database
    #[arg(long, num_args = 1..)]
    ddl: Vec<PathBuf>,

    /// Output directory
    #[arg(long, default_value = "swagger")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    format: OutputFormat,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut source = match open_source(&cli) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let sink = FileSink::new(&cli.output_dir, cli.format);
    match pipeline::generate(source.as_mut(), &sink) {
        Ok(path) => {
            tracing::info!(path = %path.display(), "wrote document");
            tracing::info!(
                "OpenAPI {} for {} has been generated.",
                sink.format().label(),
                cli.database.name
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}

fn open_source(cli: &Cli) -> Result<Box<dyn SchemaSource>, SourceError> {
    if !cli.ddl.is_empty() {
        tracing::debug!(files = cli.ddl.len(), "reading DDL");
        let source = DdlSource::from_files(cli.database.name.clone(), &cli.ddl)?;
        return Ok(Box::new(source));
    }
    live_source(cli.database.clone())
}

#[cfg(feature = "db")]
fn live_source(config: DatabaseConfig) -> Result<Box<dyn SchemaSource>, SourceError> {
    Ok(Box::new(mysql_to_openapi::schema::mysql::MysqlSource::new(
        config,
    )))
}

#[cfg(not(feature = "db"))]
fn live_source(_config: DatabaseConfig) -> Result<Box<dyn SchemaSource>, SourceError> {
    Err(SourceError::Unavailable(
        "live introspection needs the `db` feature; pass --ddl <FILE> to read CREATE TABLE statements instead"
            .to_string(),
    ))
}
