//! Escaping utilities for safe Markdown generation.
//!
//! Catalog files and answer files are user supplied, so question texts,
//! option labels and recommendation titles may contain Markdown syntax that
//! would break table layout or inject links. Escape them before embedding.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Markdown tables use `|` as column separators and can be broken
/// by unescaped pipe characters. This function also handles newlines
/// and backticks that could break formatting.
///
/// # Examples
///
/// ```
/// use compliance_assessment::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content.
///
/// # Examples
///
/// ```
/// use compliance_assessment::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("[link](url)"), "\\[link\\](url)");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
///
/// Lighter than inline escaping; newlines become `"; "` so an item stays on
/// one line.
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Make a URL safe to embed in a Markdown autolink (`<url>`).
///
/// Backslash escapes are not processed inside autolinks, so the characters
/// that would end or split the link are percent-encoded instead.
///
/// # Examples
///
/// ```
/// use compliance_assessment::reports::escape::escape_markdown_url;
///
/// assert_eq!(escape_markdown_url("https://example.com/a b"), "https://example.com/a%20b");
/// assert_eq!(escape_markdown_url("x><script>"), "x%3E%3Cscript%3E");
/// ```
#[must_use]
pub fn escape_markdown_url(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.trim().chars() {
        match c {
            '<' => result.push_str("%3C"),
            '>' => result.push_str("%3E"),
            ' ' => result.push_str("%20"),
            '\n' | '\r' | '\t' => {}
            _ => result.push(c),
        }
    }
    result
}
