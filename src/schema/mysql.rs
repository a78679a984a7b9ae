use diesel::mysql::MysqlConnection;
use diesel::prelude::*;
use diesel::sql_types::Text;

use crate::config::DatabaseConfig;
use crate::error::SourceError;
use crate::schema::column::{parse_nullable, ColumnDescriptor, ColumnKey};
use crate::schema::source::SchemaSource;

const COLUMNS_QUERY: &str = "
    SELECT CAST(TABLE_NAME AS CHAR) AS table_name,
           CAST(COLUMN_NAME AS CHAR) AS column_name,
           CAST(COLUMN_TYPE AS CHAR) AS column_type,
           CAST(DATA_TYPE AS CHAR) AS data_type,
           CAST(IS_NULLABLE AS CHAR) AS is_nullable,
           CAST(COLUMN_KEY AS CHAR) AS column_key
    FROM INFORMATION_SCHEMA.COLUMNS
    WHERE TABLE_SCHEMA = ?
    ORDER BY TABLE_NAME, ORDINAL_POSITION
";

#[derive(QueryableByName)]
struct ColumnRow {
    #[diesel(sql_type = Text)]
    table_name: String,
    #[diesel(sql_type = Text)]
    column_name: String,
    #[diesel(sql_type = Text)]
    column_type: String,
    #[diesel(sql_type = Text)]
    data_type: String,
    #[diesel(sql_type = Text)]
    is_nullable: String,
    #[diesel(sql_type = Text)]
    column_key: String,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        ColumnDescriptor::new(
            row.table_name,
            row.column_name,
            row.data_type,
            parse_nullable(&row.is_nullable),
        )
        .with_key(ColumnKey::parse(&row.column_key))
        .with_full_type(row.column_type)
    }
}

/// Live schema source reading `INFORMATION_SCHEMA.COLUMNS` for one schema.
pub struct MysqlSource {
    config: DatabaseConfig,
}

impl MysqlSource {
    /// Build a source; the connection is opened on [`SchemaSource::fetch_columns`].
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

impl SchemaSource for MysqlSource {
    fn schema_name(&self) -> &str {
        &self.config.name
    }

    fn fetch_columns(&mut self) -> Result<Vec<ColumnDescriptor>, SourceError> {
        let url = self
            .config
            .connection_url()
            .map_err(|e| SourceError::Connect(e.to_string()))?;

        tracing::info!(database = %self.config, "connecting");
        let mut conn = MysqlConnection::establish(url.as_str())
            .map_err(|e| SourceError::Connect(e.to_string()))?;

        let rows: Vec<ColumnRow> = diesel::sql_query(COLUMNS_QUERY)
            .bind::<Text, _>(self.config.name.as_str())
            .load(&mut conn)
            .map_err(|e| SourceError::Query(e.to_string()))?;

        tracing::debug!(rows = rows.len(), "fetched column metadata");
        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }
}
