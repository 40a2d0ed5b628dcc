mod schema;
pub(crate) mod schema_builder;

pub use schema::Schema;
pub use schema::SchemaDocument;
pub use schema_builder::DEFAULT_SCHEMA_FILE_EXTS;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::SchemaLoadError;
pub use schema_builder::SchemaParseError;

#[cfg(test)]
mod tests;
