mod formatter_tests;

use crate::introspection::IntrospectionResult;
use crate::introspection::introspect;
use crate::schema::Schema;

fn introspect_sdl(sdl: &str) -> IntrospectionResult {
    let schema: Schema = sdl.parse().unwrap();
    introspect(&schema).unwrap()
}

/// Asserts that `needle` appears in `lines` as a contiguous run.
#[track_caller]
fn assert_contains_lines(lines: &[String], needle: &[&str]) {
    let found = lines.windows(needle.len())
        .any(|window| window.iter().map(String::as_str).eq(needle.iter().copied()));
    assert!(found, "Expected {needle:#?} in:\n{}", lines.join("\n"));
}
