/// Renders a GraphQL description (and deprecation, if any) as JSDoc lines.
///
/// Returns no lines at all when there is nothing to document.
pub(crate) fn jsdoc_lines(
    description: Option<&str>,
    deprecation_reason: Option<&str>,
) -> Vec<String> {
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if description.is_none() && deprecation_reason.is_none() {
        return vec![];
    }

    let mut lines = vec!["/**".to_string()];
    if let Some(description) = description {
        for line in description.lines() {
            lines.push(comment_line(line));
        }
    }
    if let Some(reason) = deprecation_reason {
        lines.push(comment_line(&format!("@deprecated {reason}")));
    }
    lines.push(" */".to_string());
    lines
}

fn comment_line(text: &str) -> String {
    let text = text.trim_end().replace("*/", "*\\/");
    if text.is_empty() {
        " *".to_string()
    } else {
        format!(" * {text}")
    }
}

#[cfg(test)]
mod tests {
    use super::jsdoc_lines;

    #[test]
    fn nothing_to_document() {
        assert!(jsdoc_lines(None, None).is_empty());
        assert!(jsdoc_lines(Some("   "), None).is_empty());
    }

    #[test]
    fn multiline_description_with_deprecation() {
        assert_eq!(
            jsdoc_lines(Some("First line.\n\nThird line."), Some("Use `other`")),
            vec![
                "/**",
                " * First line.",
                " *",
                " * Third line.",
                " * @deprecated Use `other`",
                " */",
            ],
        );
    }

    #[test]
    fn comment_terminators_are_escaped() {
        assert_eq!(
            jsdoc_lines(Some("ends here */ not really"), None),
            vec!["/**", " * ends here *\\/ not really", " */"],
        );
    }
}
