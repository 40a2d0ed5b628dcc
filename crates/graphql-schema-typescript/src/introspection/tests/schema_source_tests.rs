use crate::FileSystemError;
use crate::GenerateError;
use crate::SchemaParseError;
use crate::introspection::IntrospectionResult;
use crate::introspection::SchemaSource;
use crate::introspection::introspect;
use crate::schema::Schema;
use std::path::PathBuf;

const SDL: &str = "type Query { a: Int }\ntype Mutation { b(x: String): Int }";

fn expected() -> IntrospectionResult {
    let schema: Schema = SDL.parse().unwrap();
    introspect(&schema).unwrap()
}

#[test]
fn sdl_source() {
    let result = SchemaSource::Sdl(SDL.to_string())
        .into_introspection_result()
        .unwrap();
    assert_eq!(result, expected());
}

#[test]
fn introspection_source_is_used_as_is() {
    let mut result = expected();
    result.schema.description = Some("already introspected".to_string());
    assert_eq!(
        SchemaSource::from(result.clone()).into_introspection_result().unwrap(),
        result,
    );
}

#[test]
fn file_and_directory_sources() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("schema.gql");
    std::fs::write(&file_path, SDL).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

    let from_file = SchemaSource::Path(file_path)
        .into_introspection_result()
        .unwrap();
    assert_eq!(from_file, expected());

    let from_dir = SchemaSource::Path(dir.path().to_path_buf())
        .into_introspection_result()
        .unwrap();
    assert_eq!(from_dir, expected());
}

#[test]
fn directory_schemas_split_across_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_query.graphql"), "type Query { a: Int }").unwrap();
    std::fs::write(
        dir.path().join("b_mutation.graphqls"),
        "type Mutation { b(x: String): Int }",
    ).unwrap();

    let result = SchemaSource::Path(dir.path().to_path_buf())
        .into_introspection_result()
        .unwrap();
    assert_eq!(result, expected());
}

#[test]
fn json_file_source() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("introspection.JSON");
    std::fs::write(&json_path, expected().to_json_pretty().unwrap()).unwrap();

    let result = SchemaSource::Path(json_path)
        .into_introspection_result()
        .unwrap();
    assert_eq!(result, expected());
}

#[test]
fn missing_path() {
    let path = PathBuf::from("/no/such/schema.graphql");
    assert_eq!(
        SchemaSource::Path(path.clone()).into_introspection_result(),
        Err(GenerateError::FileSystem(FileSystemError::PathNotFound(path))),
    );
}

#[test]
fn unparseable_schema_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("broken.graphql");
    std::fs::write(&file_path, "type Query {").unwrap();

    let err = SchemaSource::Path(file_path.clone())
        .into_introspection_result()
        .unwrap_err();
    assert!(matches!(
        err,
        GenerateError::SchemaParse(SchemaParseError { file, .. }) if file == file_path,
    ));
}

#[test]
fn sdl_that_looks_like_a_path_is_still_sdl() {
    let err = SchemaSource::Sdl("./schema.graphql".to_string())
        .into_introspection_result()
        .unwrap_err();
    assert!(matches!(err, GenerateError::SchemaParse(_)));
}
