/// Single-pass assembly of the document maps from column rows.
pub mod assembler;
/// Serializable Swagger 2.0 document model.
pub mod document;
/// CRUD path items synthesized per table.
pub mod paths;
