use crate::file_reader;
use crate::file_reader::FileSystemError;
use crate::schema::Schema;
use crate::schema::SchemaDocument;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

/// File extensions picked up by [`SchemaBuilder::load_dir`] when the caller
/// doesn't specify any.
pub const DEFAULT_SCHEMA_FILE_EXTS: &[&str] = &["graphql", "graphqls", "gql"];

/// Utility for building a [`Schema`] from SDL strings and files.
#[derive(Debug)]
pub struct SchemaBuilder {
    documents: Vec<SchemaDocument>,
    str_load_counter: u16,
}
impl SchemaBuilder {
    pub fn build(self) -> Schema {
        log::debug!(
            "Built schema from {} document(s).",
            self.documents.len(),
        );
        Schema {
            documents: self.documents,
        }
    }

    pub fn new() -> Self {
        Self {
            documents: vec![],
            str_load_counter: 0,
        }
    }

    /// Recursively loads every file at or under `dir_path` whose extension
    /// is one of `file_exts`.
    ///
    /// Files are loaded in sorted path order so that the resulting type order
    /// does not depend on the order the filesystem happens to list them in.
    pub fn load_dir(
        self,
        dir_path: impl AsRef<Path>,
        file_exts: &[&str],
    ) -> Result<Self, SchemaLoadError> {
        let dir_path = dir_path.as_ref();
        let mut file_paths = vec![];
        for entry in WalkDir::new(dir_path).follow_links(true) {
            let entry = entry.map_err(|err| FileSystemError::DirectoryWalkError {
                dir_path: dir_path.to_path_buf(),
                err,
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {path:#?}.");
                continue;
            }

            let matches_ext = path.extension()
                .map(|ext| ext.to_string_lossy())
                .is_some_and(|ext| file_exts.iter().any(|e| {
                    e.trim_start_matches('.') == ext
                }));
            if matches_ext {
                log::trace!("Found schema file at {path:#?}.");
                file_paths.push(path.to_path_buf());
            } else {
                log::trace!("Skipping file with unrecognized extension: {path:#?}.");
            }
        }
        file_paths.sort();

        log::debug!(
            "Found {} schema files under {dir_path:#?}.",
            file_paths.len(),
        );
        self.load_files(file_paths)
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self, SchemaLoadError> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self, SchemaLoadError> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let file_content = file_reader::read_content(file_path)?;
            self = self.load_str(
                Some(file_path.to_path_buf()),
                file_content.as_str(),
            )?;
        }
        Ok(self)
    }

    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self, SchemaParseError> {
        let file_path =
            if let Some(file_path) = file_path {
                file_path
            } else {
                let ctr = self.str_load_counter;
                self.str_load_counter += 1;
                PathBuf::from(format!("str://{ctr}"))
            };

        let document =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?.into_static();

        log::trace!(
            "Parsed {} definition(s) from {file_path:#?}.",
            document.definitions.len(),
        );
        self.documents.push(SchemaDocument {
            document,
            file_path,
        });

        Ok(self)
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Schema source text could not be parsed as GraphQL SDL.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Error parsing schema source `{}`: {err}", file.display())]
pub struct SchemaParseError {
    pub file: PathBuf,
    pub err: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SchemaLoadError {
    #[error(transparent)]
    FileSystem(#[from] FileSystemError),

    #[error(transparent)]
    Parse(#[from] SchemaParseError),
}
