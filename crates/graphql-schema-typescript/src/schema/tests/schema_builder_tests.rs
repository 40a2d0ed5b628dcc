use crate::file_reader::FileSystemError;
use crate::schema::DEFAULT_SCHEMA_FILE_EXTS;
use crate::schema::Schema;
use crate::schema::SchemaBuilder;
use crate::schema::SchemaLoadError;
use crate::schema::SchemaParseError;
use std::path::PathBuf;

#[test]
fn build_without_load() {
    let schema = SchemaBuilder::new().build();
    assert!(schema.documents().is_empty());
}

#[test]
fn load_str_assigns_synthetic_paths() -> Result<(), SchemaParseError> {
    let schema = SchemaBuilder::new()
        .load_str(None, "type Query { a: Int }")?
        .load_str(None, "type Foo { b: Int }")?
        .load_str(Some(PathBuf::from("named.graphql")), "type Bar { c: Int }")?
        .build();

    let paths = schema.documents().iter()
        .map(|doc| doc.file_path().to_path_buf())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec![
        PathBuf::from("str://0"),
        PathBuf::from("str://1"),
        PathBuf::from("named.graphql"),
    ]);
    assert_eq!(schema.documents()[0].document().definitions.len(), 1);

    Ok(())
}

#[test]
fn load_invalid_schema_syntax() {
    let result = SchemaBuilder::new()
        .load_str(None, "this is not valid syntax");

    let err = result.unwrap_err();
    assert_eq!(err.file, PathBuf::from("str://0"));
    assert!(err.err.contains("Unexpected `this[Name]`"), "{}", err.err);
}

#[test]
fn schema_from_str() {
    let schema: Schema = "type Query { hello: String }".parse().unwrap();
    assert_eq!(schema.documents().len(), 1);

    let err = "type Query {".parse::<Schema>().unwrap_err();
    assert_eq!(err.file, PathBuf::from("str://0"));
}

#[test]
fn load_file_that_does_not_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.graphql");

    let err = SchemaBuilder::new().load_file(&missing).unwrap_err();
    assert_eq!(
        err,
        SchemaLoadError::FileSystem(FileSystemError::PathIsNotAFile(missing)),
    );
}

#[test]
fn load_file_with_parse_error_reports_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let file_path = dir.path().join("broken.graphql");
    std::fs::write(&file_path, "type Query {").unwrap();

    let err = SchemaBuilder::new().load_file(&file_path).unwrap_err();
    match err {
        SchemaLoadError::Parse(SchemaParseError { file, .. }) =>
            assert_eq!(file, file_path),
        other => panic!("Unexpected error: {other:#?}"),
    }
}

#[test]
fn load_dir_filters_extensions_and_sorts() -> Result<(), SchemaLoadError> {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested")).unwrap();
    std::fs::write(dir.path().join("b.graphql"), "type B { b: Int }").unwrap();
    std::fs::write(dir.path().join("a.gql"), "type Query { a: Int }").unwrap();
    std::fs::write(dir.path().join("nested/c.graphqls"), "type C { c: Int }").unwrap();
    std::fs::write(dir.path().join("README.md"), "not graphql").unwrap();

    let schema = SchemaBuilder::new()
        .load_dir(dir.path(), DEFAULT_SCHEMA_FILE_EXTS)?
        .build();

    let file_names = schema.documents().iter()
        .map(|doc| doc.file_path()
            .strip_prefix(dir.path())
            .unwrap()
            .to_path_buf())
        .collect::<Vec<_>>();
    assert_eq!(file_names, vec![
        PathBuf::from("a.gql"),
        PathBuf::from("b.graphql"),
        PathBuf::from("nested/c.graphqls"),
    ]);

    Ok(())
}

#[test]
fn load_dir_accepts_dotted_extensions() -> Result<(), SchemaLoadError> {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("schema.sdl"), "type Query { a: Int }").unwrap();

    let schema = SchemaBuilder::new()
        .load_dir(dir.path(), &[".sdl"])?
        .build();
    assert_eq!(schema.documents().len(), 1);

    Ok(())
}
