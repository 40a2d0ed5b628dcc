/// Widest indentation level [`format_tab_space`] will produce.
pub const MAX_TAB_SPACES: usize = 16;

/// Reindents generated TypeScript lines by nesting depth.
///
/// Whatever leading whitespace a line already has is discarded. A line that
/// starts with `}` closes one level before it is printed and a line that ends
/// with `{` opens one level after it. Comment lines never change the depth.
/// JSDoc continuation lines (those starting with `*`) get one extra space so
/// the asterisks line up under `/**`. Lines that contain embedded newlines
/// are split first. Blank lines stay empty. `tab_spaces` is capped at
/// [`MAX_TAB_SPACES`].
///
/// The output only depends on the trimmed content of each line, so
/// formatting already-formatted lines with the same `tab_spaces` is a no-op.
pub fn format_tab_space<S: AsRef<str>>(lines: &[S], tab_spaces: usize) -> Vec<String> {
    let tab_spaces = tab_spaces.min(MAX_TAB_SPACES);
    let mut depth: usize = 0;
    let mut formatted = Vec::with_capacity(lines.len());
    for line in lines.iter().flat_map(|line| line.as_ref().split('\n')) {
        let trimmed = line.trim();
        let is_comment = trimmed.starts_with('*')
            || trimmed.starts_with("/*")
            || trimmed.starts_with("//");

        if !is_comment && trimmed.starts_with('}') {
            depth = depth.saturating_sub(1);
        }

        let indent = " ".repeat(depth.saturating_mul(tab_spaces));
        formatted.push(
            if trimmed.is_empty() {
                String::new()
            } else if trimmed.starts_with('*') {
                format!("{indent} {trimmed}")
            } else {
                format!("{indent}{trimmed}")
            }
        );

        if !is_comment && trimmed.ends_with('{') {
            depth += 1;
        }
    }
    formatted
}
