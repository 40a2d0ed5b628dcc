use crate::ast;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaParseError;
use std::path::Path;
use std::path::PathBuf;

/// One parsed schema document along with the path it was loaded from.
///
/// Documents loaded from strings carry a synthetic `str://N` path.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    pub(crate) document: ast::schema::Document,
    pub(crate) file_path: PathBuf,
}
impl SchemaDocument {
    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn file_path(&self) -> &Path {
        self.file_path.as_path()
    }
}

/// Represents a parsed and immutable GraphQL schema.
///
/// A [`Schema`] holds every loaded document in load order. Merging type
/// extensions, resolving type references, and the rest of the structural
/// checks happen when the schema is introspected (see
/// [`introspect`](crate::introspection::introspect)).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    pub(crate) documents: Vec<SchemaDocument>,
}
impl Schema {
    /// Helper function that just delegates to [`SchemaBuilder::new()`].
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    pub fn documents(&self) -> &[SchemaDocument] {
        self.documents.as_slice()
    }
}
impl std::str::FromStr for Schema {
    type Err = SchemaParseError;

    /// Parses a single SDL string into a [`Schema`].
    fn from_str(sdl: &str) -> Result<Self, Self::Err> {
        Ok(SchemaBuilder::new().load_str(None, sdl)?.build())
    }
}
