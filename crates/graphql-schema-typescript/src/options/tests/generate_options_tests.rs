use crate::codegen::MAX_TAB_SPACES;
use crate::options::AsyncResult;
use crate::options::GenerateOptions;
use crate::options::GenerateOptionsOverrides;
use indexmap::IndexMap;

#[test]
fn defaults() {
    let options = GenerateOptions::default();
    assert_eq!(options.tab_spaces, 2);
    assert_eq!(options.type_prefix, "GQL");
    assert_eq!(options.context_type, "any");
    assert_eq!(options.namespace, None);
    assert!(!options.global);
    assert!(!options.resolve_root_fields);
    assert!(!options.resolve_all_fields);
    assert_eq!(options.async_result, AsyncResult::Never);
}

#[test]
fn defaults_are_fresh_per_call() {
    let mut first = GenerateOptions::default();
    first.import_statements.push("import Foo from 'foo';".to_string());
    first.custom_scalar_types.insert("Date".to_string(), "string".to_string());

    let second = GenerateOptions::default();
    assert!(second.import_statements.is_empty());
    assert!(second.custom_scalar_types.is_empty());
}

#[test]
fn empty_overrides_keep_defaults() {
    let merged = GenerateOptionsOverrides::default()
        .merge_over(GenerateOptions::default());
    assert_eq!(merged, GenerateOptions::default());
}

#[test]
fn caller_values_win() {
    let merged = GenerateOptionsOverrides {
        namespace: Some("Api".to_string()),
        strict_nulls: Some(true),
        tab_spaces: Some(4),
        ..Default::default()
    }.merge_over(GenerateOptions::default());

    assert_eq!(merged.namespace.as_deref(), Some("Api"));
    assert!(merged.strict_nulls);
    assert_eq!(merged.tab_spaces, 4);
    assert_eq!(merged.type_prefix, "GQL");
}

#[test]
fn layered_overrides_prefer_upper_layer() {
    let file_layer = GenerateOptionsOverrides {
        namespace: Some("FromFile".to_string()),
        tab_spaces: Some(8),
        ..Default::default()
    };
    let flag_layer = GenerateOptionsOverrides {
        namespace: Some("FromFlags".to_string()),
        ..Default::default()
    };

    let merged = flag_layer
        .layered_over(file_layer)
        .merge_over(GenerateOptions::default());
    assert_eq!(merged.namespace.as_deref(), Some("FromFlags"));
    assert_eq!(merged.tab_spaces, 8);
}

#[test]
fn full_options_round_trip_through_overrides() {
    let options = GenerateOptions {
        global: true,
        namespace: Some("Ns".to_string()),
        ..Default::default()
    };
    let merged = GenerateOptionsOverrides::from(options.clone())
        .merge_over(GenerateOptions::default());
    assert_eq!(merged, options);
}

#[test]
fn overrides_from_json() {
    let overrides = GenerateOptionsOverrides::from_json(r#"{
        "namespace": "Api",
        "tabSpaces": 4,
        "asyncResult": "always",
        "customScalarTypes": { "Date": "string", "JSON": "unknown" }
    }"#).unwrap();

    let mut expected_scalars = IndexMap::new();
    expected_scalars.insert("Date".to_string(), "string".to_string());
    expected_scalars.insert("JSON".to_string(), "unknown".to_string());

    assert_eq!(overrides, GenerateOptionsOverrides {
        async_result: Some(AsyncResult::Always),
        custom_scalar_types: Some(expected_scalars),
        namespace: Some("Api".to_string()),
        tab_spaces: Some(4),
        ..Default::default()
    });
}

#[test]
fn overrides_from_json_rejects_unknown_keys() {
    let result = GenerateOptionsOverrides::from_json(r#"{ "tabSpace": 4 }"#);
    assert!(result.is_err());
}

#[test]
fn custom_resolver_field_coordinates() {
    let options = GenerateOptions {
        custom_resolver_fields: vec!["User.fullName".to_string()],
        ..Default::default()
    };
    assert!(options.is_custom_resolver_field("User", "fullName"));
    assert!(!options.is_custom_resolver_field("User", "id"));
    assert!(!options.is_custom_resolver_field("Post", "fullName"));
}

#[test]
fn async_result_wrapping() {
    assert_eq!(AsyncResult::Never.wrap("TResult"), "TResult");
    assert_eq!(AsyncResult::Allowed.wrap("TResult"), "TResult | Promise<TResult>");
    assert_eq!(AsyncResult::Always.wrap("TResult"), "Promise<TResult>");
    assert_eq!("allowed".parse::<AsyncResult>(), Ok(AsyncResult::Allowed));
    assert!("sometimes".parse::<AsyncResult>().is_err());
}

#[test]
fn oversized_tab_spaces_are_clamped() {
    let merged = GenerateOptionsOverrides::from_json(
        &format!(r#"{{ "tabSpaces": {} }}"#, usize::MAX),
    ).unwrap().merge_over(GenerateOptions::default());
    assert_eq!(merged.tab_spaces, MAX_TAB_SPACES);
}
