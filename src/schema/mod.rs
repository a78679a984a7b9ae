/// Column metadata rows as produced by `INFORMATION_SCHEMA.COLUMNS`.
pub mod column;
/// Offline schema source built from MySQL `CREATE TABLE` statements.
pub mod ddl;
/// Live schema source querying `INFORMATION_SCHEMA` through diesel.
#[cfg(feature = "db")]
pub mod mysql;
/// The `SchemaSource` trait and in-memory sources.
pub mod source;
