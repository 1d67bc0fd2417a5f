//! Final whitespace normalization of rendered Markdown.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\n+").unwrap());

/// Two or more newlines, together with any whitespace-only lines and the
/// indentation that follow them.
static BLANK_LINE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\n(?:[ \t]*\n)*[ \t]*").unwrap());

/// Normalize blank lines in a rendered fragment.
///
/// Leading newlines are removed, every run of blank lines becomes exactly one
/// blank line, and spaces or tabs right after a blank line are dropped.
/// Whitespace anywhere else is left untouched.
pub fn normalize(raw: &str) -> String {
    let trimmed = LEADING_NEWLINES.replace(raw, "");
    BLANK_LINE_RUN.replace_all(&trimmed, "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_strips_leading_newlines() {
        assert_eq!(normalize("\n\n\nabc"), "abc");
        assert_eq!(normalize("\nabc\n"), "abc\n");
    }

    #[test]
    fn test_collapses_newline_runs() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\nb"), "a\nb");
        assert_eq!(normalize("- John\n- Paul\n\n\n"), "- John\n- Paul\n\n");
    }

    #[test]
    fn test_strips_whitespace_after_blank_line() {
        assert_eq!(normalize("a\n\n   b"), "a\n\nb");
        assert_eq!(normalize("a\n\n \t\n  \n\tb"), "a\n\nb");
    }

    #[test]
    fn test_leaves_other_whitespace() {
        assert_eq!(normalize("a  \n  - b"), "a  \n  - b");
        assert_eq!(normalize("- a\n  - b\n"), "- a\n  - b\n");
        assert_eq!(normalize("> A\n> \n> B"), "> A\n> \n> B");
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("\n\n\n"), "");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(s in "[a> \t\n]{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_normalize_never_leaves_three_newlines(s in "[ab \t\n]{0,40}") {
            let out = normalize(&s);
            prop_assert!(!out.contains("\n\n\n"));
            prop_assert!(!out.starts_with('\n'));
        }

        #[test]
        fn prop_normalize_is_idempotent_on_any_text(s in any::<String>()) {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
