//! Utility functions for text node handling.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\n\t]+").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Two-space indentation unit for nested list items
pub const LIST_INDENT: &str = "  ";

/// Check if text data contributes nothing to the output
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Strip newlines and tabs from the start of text data
pub fn strip_leading_breaks(text: &str) -> Cow<'_, str> {
    LEADING_BREAKS.replace(text, "")
}

/// Collapse every whitespace run (newlines included) into a single space
pub fn collapse_whitespace(text: &str) -> Cow<'_, str> {
    WHITESPACE_RUN.replace_all(text, " ")
}

/// Escape angle brackets so text is not mistaken for markup
pub fn escape_angle_brackets(text: &str) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }

    result
}

/// Prepare text data for output.
///
/// Returns `None` when the data is empty or all whitespace. Outside
/// preformatted blocks whitespace runs are collapsed.
pub fn prepare_text(data: &str, preformatted: bool) -> Option<String> {
    if is_blank(data) {
        return None;
    }

    let stripped = strip_leading_breaks(data);
    let text = if preformatted {
        stripped
    } else {
        Cow::Owned(collapse_whitespace(&stripped).into_owned())
    };

    Some(escape_angle_brackets(&text))
}

/// Indentation for a list item at the given nesting depth
pub fn list_indent(depth: usize) -> String {
    LIST_INDENT.repeat(depth.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \n\t "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_strip_leading_breaks() {
        assert_eq!(strip_leading_breaks("\n\t\nabc"), "abc");
        assert_eq!(strip_leading_breaks("  abc"), "  abc");
        assert_eq!(strip_leading_breaks("a\nb"), "a\nb");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("a  b\n\n\tc"), "a b c");
        assert_eq!(collapse_whitespace(" lead"), " lead");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(escape_angle_brackets("a < b > c"), "a &lt; b &gt; c");
        assert_eq!(escape_angle_brackets("<b>"), "&lt;b&gt;");
        assert_eq!(escape_angle_brackets("plain"), "plain");
    }

    #[test]
    fn test_prepare_text() {
        assert_eq!(prepare_text("   \n ", false), None);
        assert_eq!(prepare_text("\n\thello\n  world ", false).as_deref(), Some("hello world "));
        assert_eq!(
            prepare_text("\nfn main() {\n    x\n}", true).as_deref(),
            Some("fn main() {\n    x\n}")
        );
        assert_eq!(prepare_text("if a<b", true).as_deref(), Some("if a&lt;b"));
    }

    #[test]
    fn test_list_indent() {
        assert_eq!(list_indent(0), "");
        assert_eq!(list_indent(1), "");
        assert_eq!(list_indent(3), "    ");
    }
}
