use crate::error::SourceError;
use crate::schema::column::ColumnDescriptor;

/// Supplies the column metadata of one schema.
///
/// Implementations must emit rows ordered by table name, then by ordinal
/// position within each table. The generated document's property order
/// follows this order.
pub trait SchemaSource {
    /// Name of the schema (database) being described.
    fn schema_name(&self) -> &str;

    /// Fetch every column of every table in the schema.
    fn fetch_columns(&mut self) -> Result<Vec<ColumnDescriptor>, SourceError>;
}

/// A source over rows that are already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    schema_name: String,
    columns: Vec<ColumnDescriptor>,
}

impl StaticSource {
    /// Wrap pre-ordered rows.
    pub fn new(schema_name: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            schema_name: schema_name.into(),
            columns,
        }
    }
}

impl SchemaSource for StaticSource {
    fn schema_name(&self) -> &str {
        &self.schema_name
    }

    fn fetch_columns(&mut self) -> Result<Vec<ColumnDescriptor>, SourceError> {
        Ok(self.columns.clone())
    }
}

/// Order rows by table name while keeping each table's column order.
pub fn sort_for_emission(columns: &mut [ColumnDescriptor]) {
    columns.sort_by(|a, b| a.table_name.cmp(&b.table_name));
}
