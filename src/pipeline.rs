use std::path::PathBuf;

use crate::error::Error;
use crate::generator::assembler::DocumentAssembler;
use crate::output::formatter::DocumentSink;
use crate::schema::source::SchemaSource;

/// Run one generation: fetch every row, assemble the document, persist it.
///
/// All-or-nothing: a source failure aborts before the sink is called, and the
/// sink never leaves a partial document behind.
pub fn generate<S, K>(source: &mut S, sink: &K) -> Result<PathBuf, Error>
where
    S: SchemaSource + ?Sized,
    K: DocumentSink + ?Sized,
{
    let columns = source.fetch_columns()?;
    let schema_name = source.schema_name().to_string();

    let mut assembler = DocumentAssembler::new();
    for column in &columns {
        assembler.push(column);
    }
    tracing::info!(
        schema = %schema_name,
        tables = assembler.table_count(),
        columns = columns.len(),
        "assembled document"
    );

    let document = assembler.finish(&schema_name);
    Ok(sink.persist(&document, &schema_name)?)
}
