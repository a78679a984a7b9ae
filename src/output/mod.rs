/// Renders the assembled document and writes it to disk.
pub mod formatter;
