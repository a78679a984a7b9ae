use std::path::{Component, Path, PathBuf};

use clap::ValueEnum;

use crate::error::SinkError;
use crate::generator::document::OpenApiDocument;

/// Text format of the written document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML, the default.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }

    /// Upper-case name for messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// Persists an assembled document.
pub trait DocumentSink {
    /// Write `document` under a location derived from `name`, returning where it went.
    fn persist(&self, document: &OpenApiDocument, name: &str) -> Result<PathBuf, SinkError>;
}

/// Writes `<output_dir>/<name>.<ext>`.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl FileSink {
    /// Sink writing into `output_dir` in `format`.
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Configured format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl DocumentSink for FileSink {
    fn persist(&self, document: &OpenApiDocument, name: &str) -> Result<PathBuf, SinkError> {
        write_output(&self.output_dir, name, document, self.format)
    }
}

/// Render the document as text. Map key order is preserved.
pub fn render(document: &OpenApiDocument, format: OutputFormat) -> Result<String, SinkError> {
    match format {
        OutputFormat::Yaml => {
            serde_yaml::to_string(document).map_err(|e| SinkError::Render(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(document)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| SinkError::Render(e.to_string())),
    }
}

/// Render and write the document to `<output_dir>/<name>.<ext>`.
///
/// The document is fully rendered before anything touches the disk, and the
/// file is written to a temporary sibling then renamed, so a failure never
/// leaves a partial document at the target path.
pub fn write_output(
    output_dir: &Path,
    name: &str,
    document: &OpenApiDocument,
    format: OutputFormat,
) -> Result<PathBuf, SinkError> {
    validate_output_name(name)?;
    let content = render(document, format)?;

    std::fs::create_dir_all(output_dir).map_err(|source| SinkError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let target = output_dir.join(format!("{name}.{}", format.extension()));
    let staging = output_dir.join(format!(".{name}.{}.tmp", format.extension()));

    let written =
        std::fs::write(&staging, content).and_then(|()| std::fs::rename(&staging, &target));
    if let Err(source) = written {
        let _ = std::fs::remove_file(&staging);
        return Err(SinkError::Write {
            path: target,
            source,
        });
    }

    tracing::debug!(path = %target.display(), "document written");
    Ok(target)
}

fn validate_output_name(name: &str) -> Result<(), SinkError> {
    if name.trim().is_empty() {
        return Err(SinkError::InvalidName(name.to_string()));
    }
    let candidate = Path::new(name);
    if candidate.is_absolute()
        || candidate.components().any(|component| {
            matches!(
                component,
                Component::ParentDir
                    | Component::CurDir
                    | Component::RootDir
                    | Component::Prefix(_)
            )
        })
        || name.contains('/')
        || name.contains('\\')
    {
        return Err(SinkError::InvalidName(name.to_string()));
    }
    Ok(())
}
