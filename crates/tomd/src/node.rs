//! DOM node structure consumed by the renderer.
//!
//! The renderer only understands two kinds of node: elements and text.
//! Whatever DOM implementation the caller has (CDP, html5ever, a browser
//! binding) is adapted into this shape before conversion; see [`crate::cdp`]
//! for the CDP adapter.

/// A node of the tree being converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element node with a tag name and ordered children
    Element { tag_name: String, children: Vec<Node> },
    /// Text node with raw character data
    Text { data: String },
}

impl Node {
    /// Create a new element node without children
    pub fn element(tag_name: &str) -> Self {
        Node::Element {
            tag_name: tag_name.to_string(),
            children: Vec::new(),
        }
    }

    /// Create a new text node
    pub fn text(data: &str) -> Self {
        Node::Text {
            data: data.to_string(),
        }
    }

    /// Replace the children of an element, builder style.
    ///
    /// Text nodes have no children, so the call leaves them unchanged.
    pub fn with_children(mut self, nodes: Vec<Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            *children = nodes;
        }
        self
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element { .. })
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// Get the tag name (lowercase), `None` for text nodes
    pub fn tag_name(&self) -> Option<String> {
        match self {
            Node::Element { tag_name, .. } => Some(tag_name.to_lowercase()),
            Node::Text { .. } => None,
        }
    }

    /// Get all child nodes
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text { .. } => &[],
        }
    }

    /// Add a child node. Ignored on text nodes.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element { children, .. } = self {
            children.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert!(!node.is_text());
        assert_eq!(node.tag_name().as_deref(), Some("div"));
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().len(), 3);
        assert!(parent.children()[1].is_element());
    }

    #[test]
    fn test_text_has_no_children() {
        let mut text = Node::text("leaf");
        text.add_child(Node::element("b"));
        assert!(text.children().is_empty());

        let text = Node::text("leaf").with_children(vec![Node::element("b")]);
        assert_eq!(text, Node::text("leaf"));
    }
}
