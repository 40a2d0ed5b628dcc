use crate::Cli;
use crate::commands::CommandEnum;
use crate::commands::GenerateCmd;
use clap::Parser;
use graphql_schema_typescript::GenerateOptionsOverrides;

fn parse_generate(args: &[&str]) -> (Cli, Box<GenerateCmd>) {
    let mut cli = Cli::try_parse_from(
        ["graphql-ts", "generate"].into_iter().chain(args.iter().copied()),
    ).unwrap();
    match cli.cmd.take() {
        Some(CommandEnum::Generate(cmd)) => (cli, cmd),
        other => panic!("Expected the generate command, got {other:#?}"),
    }
}

#[test]
fn unset_flags_do_not_override_anything() {
    let (_, cmd) = parse_generate(&["schema.graphql", "--stdout"]);
    assert_eq!(cmd.overrides().unwrap(), GenerateOptionsOverrides::default());
}

#[test]
fn flags_override_the_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("options.json");
    std::fs::write(&config_path, r#"{
        "namespace": "FromConfig",
        "tabSpaces": 8,
        "strictNulls": true,
        "customScalarTypes": { "Date": "string" }
    }"#).unwrap();

    let (_, cmd) = parse_generate(&[
        "schema.graphql",
        "--stdout",
        "--config", config_path.to_str().unwrap(),
        "--namespace", "FromFlag",
        "--global",
    ]);
    let overrides = cmd.overrides().unwrap();
    assert_eq!(overrides.namespace.as_deref(), Some("FromFlag"));
    assert_eq!(overrides.tab_spaces, Some(8));
    assert_eq!(overrides.strict_nulls, Some(true));
    assert_eq!(overrides.global, Some(true));
    assert_eq!(
        overrides.custom_scalar_types.unwrap().get("Date").map(String::as_str),
        Some("string"),
    );
}

#[test]
fn false_flags_turn_off_config_file_settings() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("options.json");
    std::fs::write(&config_path, r#"{
        "strictNulls": true,
        "resolveRootFields": true
    }"#).unwrap();

    let (_, cmd) = parse_generate(&[
        "schema.graphql",
        "--stdout",
        "--config", config_path.to_str().unwrap(),
        "--strict-nulls=false",
    ]);
    let overrides = cmd.overrides().unwrap();
    assert_eq!(overrides.strict_nulls, Some(false));
    assert_eq!(overrides.resolve_root_fields, Some(true));
}

#[tokio::test]
async fn resolve_root_fields_flag_adds_root_resolvers() {
    let (cli, cmd) = parse_generate(&[
        "--sdl", "type Query { hello: String }",
        "--stdout",
        "--resolve-root-fields",
    ]);
    let result = cmd.run(cli).await;
    assert_eq!(result.stderr, None);
    assert!(result.stdout.unwrap().contains("export interface GQLQueryToHelloResolver<"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("options.json");
    std::fs::write(&config_path, r#"{ "namespaces": "Typo" }"#).unwrap();

    let (_, cmd) = parse_generate(&[
        "schema.graphql",
        "--stdout",
        "--config", config_path.to_str().unwrap(),
    ]);
    let err = cmd.overrides().unwrap_err();
    assert!(err.starts_with("Invalid config file"), "{err}");
}

#[tokio::test]
async fn prints_declarations_to_stdout() {
    let (cli, cmd) = parse_generate(&["--sdl", "type Query { hello: String }", "--stdout"]);
    let result = cmd.run(cli).await;
    assert_eq!(result.stderr, None);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("export interface GQLQuery {\n  hello?: string;\n}"));
}

#[tokio::test]
async fn writes_declarations_to_the_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let schema_path = dir.path().join("schema.graphql");
    let output_path = dir.path().join("schema.d.ts");
    std::fs::write(&schema_path, "type Query { hello: String }").unwrap();

    let (cli, cmd) = parse_generate(&[
        schema_path.to_str().unwrap(),
        "-o", output_path.to_str().unwrap(),
        "--namespace", "Api",
    ]);
    let result = cmd.run(cli).await;
    assert_eq!(result.stderr, None);
    assert!(result.stdout.unwrap().contains("Wrote TypeScript declarations"));

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("declare namespace Api {"));
}

#[tokio::test]
async fn schema_errors_fail_the_command() {
    let (cli, cmd) = parse_generate(&["--sdl", "type Query { a: Missing }", "--stdout"]);
    let result = cmd.run(cli).await;
    assert_eq!(result.stdout, None);
    assert!(result.stderr.unwrap().contains("Missing"));
}
