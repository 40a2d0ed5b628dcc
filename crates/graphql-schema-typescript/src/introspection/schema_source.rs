use crate::file_reader;
use crate::file_reader::FileSystemError;
use crate::generate::GenerateError;
use crate::introspection::IntrospectionResult;
use crate::introspection::introspect;
use crate::schema::DEFAULT_SCHEMA_FILE_EXTS;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use std::path::PathBuf;

/// Where the schema to generate declarations for comes from.
///
/// Callers say explicitly which kind of input they have; a string is never
/// probed against the filesystem to guess whether it is a path or SDL.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaSource {
    /// An already-introspected schema (e.g. the JSON response of an
    /// introspection query against a live server).
    Introspection(IntrospectionResult),

    /// A schema file or a directory of schema files.
    ///
    /// Directories are searched recursively for `.graphql`, `.graphqls`, and
    /// `.gql` files. A `.json` file is read as a serialized
    /// [`IntrospectionResult`]. Any other file is read as SDL.
    Path(PathBuf),

    /// A parsed [`Schema`].
    Schema(Schema),

    /// Inline SDL text.
    Sdl(String),
}
impl SchemaSource {
    pub fn into_introspection_result(self) -> Result<IntrospectionResult, GenerateError> {
        match self {
            Self::Introspection(result) => Ok(result),

            Self::Path(path) => {
                if !path.exists() {
                    return Err(FileSystemError::PathNotFound(path).into());
                }

                if path.is_dir() {
                    log::debug!("Loading schema files from directory {path:#?}.");
                    let schema = SchemaBuilder::new()
                        .load_dir(&path, DEFAULT_SCHEMA_FILE_EXTS)?
                        .build();
                    return Ok(introspect(&schema)?);
                }

                let is_json = path.extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
                if is_json {
                    log::debug!("Loading introspection JSON from {path:#?}.");
                    let json = file_reader::read_content(&path)?;
                    return Ok(IntrospectionResult::from_json(Some(path), &json)?);
                }

                log::debug!("Loading schema file {path:#?}.");
                let schema = SchemaBuilder::new()
                    .load_file(&path)?
                    .build();
                Ok(introspect(&schema)?)
            },

            Self::Schema(schema) => Ok(introspect(&schema)?),

            Self::Sdl(sdl) => {
                let schema = SchemaBuilder::new()
                    .load_str(None, &sdl)?
                    .build();
                Ok(introspect(&schema)?)
            },
        }
    }
}
impl std::convert::From<IntrospectionResult> for SchemaSource {
    fn from(value: IntrospectionResult) -> Self {
        Self::Introspection(value)
    }
}
impl std::convert::From<Schema> for SchemaSource {
    fn from(value: Schema) -> Self {
        Self::Schema(value)
    }
}
