//! Generate TypeScript type declarations and resolver type signatures from a
//! GraphQL schema.
//!
//! The pipeline has five stages:
//!
//!   1. A [`SchemaSource`] is resolved into an [`IntrospectionResult`]
//!      (parsing SDL with [`SchemaBuilder`] when needed).
//!   2. [`TypeScriptGenerator`] emits declarations for every named type.
//!   3. [`ResolverGenerator`] emits resolver signatures plus the imports they
//!      need.
//!   4. The sections are assembled (optionally wrapped in `namespace` and/or
//!      `declare global` blocks) underneath a generated-file banner.
//!   5. [`format_tab_space`] reindents everything.
//!
//! ```no_run
//! use graphql_schema_typescript::GenerateOptionsOverrides;
//! use graphql_schema_typescript::SchemaSource;
//!
//! let ts = graphql_schema_typescript::generate_ts_types_as_string(
//!     SchemaSource::Sdl("type Query { hello: String }".to_string()),
//!     "schema.d.ts",
//!     GenerateOptionsOverrides::default(),
//! ).unwrap();
//! assert!(ts.contains("hello?: string;"));
//! ```

pub mod ast;
pub mod codegen;
mod file_reader;
mod generate;
pub mod introspection;
pub mod loc;
pub mod options;
pub mod schema;

pub use codegen::MAX_TAB_SPACES;
pub use codegen::format_tab_space;
pub use codegen::GenerateResolversResult;
pub use codegen::ResolverGenerator;
pub use codegen::TypeScriptGenerator;
pub use file_reader::FileSystemError;
pub use generate::generate_ts_types_as_string;
pub use generate::generate_typescript_types;
pub use generate::GenerateError;
pub use introspection::IntrospectionError;
pub use introspection::IntrospectionResult;
pub use introspection::SchemaSource;
pub use options::AsyncResult;
pub use options::GenerateOptions;
pub use options::GenerateOptionsOverrides;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaLoadError;
pub use schema::SchemaParseError;
