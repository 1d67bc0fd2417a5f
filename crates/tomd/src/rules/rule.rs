//! Rule types for element conversion.

/// Marker style of the innermost active list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarker {
    /// Unordered list, `- ` by default
    #[default]
    Bullet,
    /// Ordered list, always the literal `1. `
    Numbered,
}

/// A rule defines how a matched element is converted to Markdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// `**children**`
    Strong,
    /// `*children*`
    Emphasis,
    /// `~~children~~`
    Strikethrough,
    /// Inline code span, or a fence line pair inside a preformatted block
    Code,
    /// Horizontal rule
    HorizontalRule,
    /// ATX heading of the given level
    Heading(u8),
    /// Quoted block, `> ` prefixed
    Blockquote,
    /// Paragraph or division: children separated by blank lines
    Block,
    /// Preformatted block
    Preformatted,
    /// List container with its marker style
    List(ListMarker),
    /// List item
    ListItem,
    /// Hard line break
    LineBreak,
    /// Keep the element as `<TAG>children</TAG>`
    Verbatim,
    /// Drop the element and its subtree
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_marker() {
        assert_eq!(ListMarker::default(), ListMarker::Bullet);
    }
}
