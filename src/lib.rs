//! Introspect a MySQL schema and generate a Swagger 2.0 CRUD document for every table.
#![warn(missing_docs)]

/// Database connection settings.
pub mod config;
/// Error types for schema sources and document sinks.
pub mod error;
/// Document assembly: definitions, parameters, responses and paths.
pub mod generator;
/// Pure name and type mappings applied to every column.
pub mod mapping;
/// Document rendering and file output.
pub mod output;
/// End-to-end run from a schema source to a document sink.
pub mod pipeline;
/// Column metadata and the sources that produce it.
pub mod schema;
