//! Built-in tag rules.

use super::{ListMarker, Rule};

/// The default tag table, in lookup-table order
pub fn builtin_rules() -> Vec<(&'static str, Rule)> {
    vec![
        ("b", Rule::Strong),
        ("strong", Rule::Strong),
        ("i", Rule::Emphasis),
        ("em", Rule::Emphasis),
        ("del", Rule::Strikethrough),
        ("s", Rule::Strikethrough),
        ("code", Rule::Code),
        ("hr", Rule::HorizontalRule),
        ("h1", Rule::Heading(1)),
        ("h2", Rule::Heading(2)),
        ("h3", Rule::Heading(3)),
        ("h4", Rule::Heading(4)),
        ("h5", Rule::Heading(5)),
        ("h6", Rule::Heading(6)),
        ("h7", Rule::Heading(7)),
        ("blockquote", Rule::Blockquote),
        ("div", Rule::Block),
        ("section", Rule::Block),
        ("p", Rule::Block),
        ("pre", Rule::Preformatted),
        ("ul", Rule::List(ListMarker::Bullet)),
        ("ol", Rule::List(ListMarker::Numbered)),
        ("li", Rule::ListItem),
        ("br", Rule::LineBreak),
    ]
}
