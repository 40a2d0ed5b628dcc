use crate::file_reader::FileSystemError;
use crate::introspection::IntrospectionError;
use crate::schema::SchemaLoadError;
use crate::schema::SchemaParseError;
use thiserror::Error;

/// Everything that can stop a TypeScript declaration file from being
/// generated.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error(transparent)]
    Introspection(#[from] IntrospectionError),

    #[error(transparent)]
    SchemaParse(#[from] SchemaParseError),
}
impl std::convert::From<SchemaLoadError> for GenerateError {
    fn from(value: SchemaLoadError) -> Self {
        match value {
            SchemaLoadError::FileSystem(err) => Self::FileSystem(err),
            SchemaLoadError::Parse(err) => Self::SchemaParse(err),
        }
    }
}
