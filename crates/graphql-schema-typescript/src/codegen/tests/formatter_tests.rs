use crate::codegen::MAX_TAB_SPACES;
use crate::codegen::format_tab_space;
use proptest::prelude::*;

#[test]
fn indents_by_brace_depth() {
    let lines = [
        "export interface GQLUser {",
        "    id: string;",
        "friends: {",
        "  nested: boolean;",
        "  };",
        "}",
    ];
    assert_eq!(
        format_tab_space(&lines, 2),
        vec![
            "export interface GQLUser {",
            "  id: string;",
            "  friends: {",
            "    nested: boolean;",
            "  };",
            "}",
        ],
    );
}

#[test]
fn huge_tab_spaces_are_capped() {
    let lines = ["a {", "b;", "}"];
    assert_eq!(
        format_tab_space(&lines, usize::MAX),
        vec!["a {".to_string(), format!("{}b;", " ".repeat(MAX_TAB_SPACES)), "}".to_string()],
    );
}

#[test]
fn aligns_jsdoc_continuation_lines() {
    let lines = [
        "declare namespace Api {",
        "/**",
        "* A user",
        "   */",
        "type Id = string;",
        "}",
    ];
    assert_eq!(
        format_tab_space(&lines, 4),
        vec![
            "declare namespace Api {",
            "    /**",
            "     * A user",
            "     */",
            "    type Id = string;",
            "}",
        ],
    );
}

#[test]
fn blank_lines_stay_empty() {
    let lines = ["a {", "   ", "}", ""];
    assert_eq!(format_tab_space(&lines, 2), vec!["a {", "", "}", ""]);
}

#[test]
fn closing_and_reopening_on_one_line() {
    let lines = ["if (a) {", "b;", "} else {", "c;", "}"];
    assert_eq!(
        format_tab_space(&lines, 2),
        vec!["if (a) {", "  b;", "} else {", "  c;", "}"],
    );
}

#[test]
fn unbalanced_closing_braces_do_not_underflow() {
    let lines = ["}", "}", "a;"];
    assert_eq!(format_tab_space(&lines, 2), vec!["}", "}", "a;"]);
}

#[test]
fn embedded_newlines_are_split() {
    let lines = ["/**\n * banner\n */", "a {\nb;\n}"];
    assert_eq!(
        format_tab_space(&lines, 2),
        vec!["/**", " * banner", " */", "a {", "  b;", "}"],
    );
}

fn arbitrary_line() -> impl Strategy<Value = String> {
    (
        "[ \t]{0,4}",
        prop::sample::select(vec![
            "",
            "{",
            "}",
            "};",
            "} else {",
            "/**",
            "* doc",
            "*/",
            "name?: string;",
            "export interface GQLA {",
        ]),
        "[ ]{0,2}",
    ).prop_map(|(leading, content, trailing)| format!("{leading}{content}{trailing}"))
}

proptest! {
    #[test]
    fn formatting_is_idempotent(
        lines in prop::collection::vec(arbitrary_line(), 0..40),
        tab_spaces in 0usize..8,
    ) {
        let once = format_tab_space(&lines, tab_spaces);
        let twice = format_tab_space(&once, tab_spaces);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn formatting_preserves_trimmed_content(
        lines in prop::collection::vec(arbitrary_line(), 0..40),
    ) {
        let formatted = format_tab_space(&lines, 2);
        prop_assert_eq!(formatted.len(), lines.len());
        for (original, formatted) in lines.iter().zip(formatted.iter()) {
            prop_assert_eq!(original.trim(), formatted.trim());
        }
    }
}

#[test]
fn braces_inside_comments_do_not_change_depth() {
    let lines = [
        "a {",
        "/**",
        "* Example: { x {",
        "* }",
        "*/",
        "b;",
        "}",
    ];
    assert_eq!(
        format_tab_space(&lines, 2),
        vec!["a {", "  /**", "   * Example: { x {", "   * }", "   */", "  b;", "}"],
    );
}
