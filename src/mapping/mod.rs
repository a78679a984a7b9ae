/// Identifier normalization: snake_case schema names to display-form document keys.
pub mod names;
/// Database column types to abstract JSON-Schema primitive types.
pub mod types;
