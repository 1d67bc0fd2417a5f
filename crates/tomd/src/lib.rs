//! # tomd
//!
//! Convert DOM node trees to Markdown.
//!
//! ## Design
//!
//! This library never parses HTML. It walks an already-built node tree of
//! elements and text, so any DOM implementation can feed it:
//!
//! - **Typed input**: build a [`Node`] tree from your own DOM adapter
//! - **CDP input**: pass Chrome DevTools Protocol `DOM.Node` JSON directly
//!   (feature `cdp`, enabled by default)
//!
//! Conversion is a recursive render into a raw fragment followed by a
//! whitespace normalization pass. Tags without a Markdown mapping are kept
//! as `<TAG>…</TAG>`.
//!
//! ## Example
//!
//! ```rust
//! use tomd::{Node, TomdService};
//!
//! let service = TomdService::new();
//!
//! let list = Node::element("ul").with_children(vec![
//!     Node::element("li").with_children(vec![Node::text("John")]),
//!     Node::element("li").with_children(vec![Node::text("Paul")]),
//! ]);
//!
//! let markdown = service.convert(&list).unwrap();
//! assert_eq!(markdown, "- John\n- Paul\n\n");
//! ```
//!
//! ## Example (CDP JSON)
//!
//! ```rust
//! # #[cfg(feature = "cdp")]
//! # {
//! use tomd::TomdService;
//!
//! let service = TomdService::new();
//! let json = r##"{"nodeType": 1, "nodeName": "H1",
//!                "children": [{"nodeType": 3, "nodeName": "#text", "nodeValue": "Hello"}]}"##;
//!
//! assert_eq!(service.convert_json(json).unwrap(), "# Hello\n\n");
//! assert!(service.convert_json("null").is_err());
//! # }
//! ```

#[cfg(feature = "cdp")]
pub mod cdp;
pub mod node;
mod normalize;
mod render;
mod rules;
mod service;
mod utilities;

#[cfg(feature = "cdp")]
pub use cdp::{CdpNode, NodeType};
pub use node::Node;
pub use normalize::normalize;
pub use rules::{ListMarker, Rule, Rules};
pub use service::{TomdOptions, TomdService};

/// Error type for tomd operations
#[derive(Debug, thiserror::Error)]
pub enum TomdError {
    #[error("Conversion error: {0}")]
    ConversionError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TomdError>;

/// Convert a node tree to Markdown with default options
pub fn tomd(node: &Node) -> Result<String> {
    TomdService::new().convert(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tomd_uses_defaults() {
        let p = Node::element("p").with_children(vec![Node::text("one line paragraph")]);
        assert_eq!(tomd(&p).unwrap(), "one line paragraph\n\n");
    }

    #[test]
    fn test_error_messages() {
        let err = TomdError::InvalidInput("not a Node object".to_string());
        assert_eq!(err.to_string(), "Invalid input: not a Node object");
    }
}
