use std::path::PathBuf;

use thiserror::Error;

/// Failure of a whole generation run.
///
/// Both variants are fatal: nothing is written when either occurs.
#[derive(Error, Debug)]
pub enum Error {
    /// Column metadata could not be obtained.
    #[error("schema source error: {0}")]
    Source(#[from] SourceError),

    /// The assembled document could not be persisted.
    #[error("document sink error: {0}")]
    Sink(#[from] SinkError),
}

/// Errors raised while reading column metadata.
#[derive(Error, Debug)]
pub enum SourceError {
    /// A DDL input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// DDL input did not parse as MySQL.
    #[error("SQL parse error: {0}")]
    Parse(String),

    /// The database connection could not be established.
    #[error("failed to connect to database: {0}")]
    Connect(String),

    /// The metadata query failed.
    #[error("metadata query failed: {0}")]
    Query(String),

    /// The requested source is not compiled in or not configured.
    #[error("{0}")]
    Unavailable(String),
}

/// Errors raised while persisting the generated document.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The output name derived from the schema is not a safe file name.
    #[error("invalid output name '{0}'")]
    InvalidName(String),

    /// The output directory could not be created.
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document could not be rendered to text.
    #[error("failed to render document: {0}")]
    Render(String),

    /// The rendered document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// File that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
