use graphql_schema_typescript::SchemaSource;
use std::path::PathBuf;

/// Exactly one of a schema path or inline SDL.
#[derive(Debug, clap::Args)]
#[group(multiple = false, required = true)]
pub(crate) struct SchemaSourceArgs {
    #[arg(
        help="Path to a GraphQL schema file, a directory of schema files, or \
             an introspection result `.json` file.",
        name="SCHEMA_PATH",
    )]
    pub schema_path: Option<PathBuf>,

    #[arg(
        help="Inline GraphQL SDL to use instead of a schema path.",
        long,
    )]
    pub sdl: Option<String>,
}
impl SchemaSourceArgs {
    pub(crate) fn into_schema_source(self) -> Option<SchemaSource> {
        match (self.schema_path, self.sdl) {
            (Some(path), _) => Some(SchemaSource::Path(path)),
            (None, Some(sdl)) => Some(SchemaSource::Sdl(sdl)),
            (None, None) => None,
        }
    }
}
