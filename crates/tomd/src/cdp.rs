//! Adapter for CDP-style DOM nodes.
//!
//! Chrome DevTools Protocol reports DOM trees as JSON `DOM.Node` objects
//! with a numeric `nodeType` discriminator. This module decodes that shape
//! and maps it onto [`Node`]. Only elements and text survive the mapping;
//! comments, documents and unknown kinds contribute nothing.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::node::Node;
use crate::{Result, TomdError};

/// Node types matching DOM nodeType values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node (nodeType = 1)
    Element = 1,
    /// Text node (nodeType = 3)
    Text = 3,
    /// Comment node (nodeType = 8)
    Comment = 8,
    /// Document node (nodeType = 9)
    Document = 9,
    /// Document fragment node (nodeType = 11)
    DocumentFragment = 11,
}

impl TryFrom<u32> for NodeType {
    type Error = u32;

    fn try_from(value: u32) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(NodeType::Element),
            3 => Ok(NodeType::Text),
            8 => Ok(NodeType::Comment),
            9 => Ok(NodeType::Document),
            11 => Ok(NodeType::DocumentFragment),
            other => Err(other),
        }
    }
}

/// A DOM node following the CDP DOM.Node structure
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdpNode {
    /// Node type discriminator (1 = Element, 3 = Text, ...)
    #[serde(default)]
    pub node_type: Option<u32>,

    /// Node name (uppercase for elements, e.g. "DIV", "#text" for text nodes)
    #[serde(default)]
    pub node_name: String,

    /// Element tag name, used when `nodeName` is absent
    #[serde(default)]
    pub tag_name: Option<String>,

    /// Character data for text nodes
    #[serde(default)]
    pub node_value: Option<String>,

    /// Character data under its DOM name, used when `nodeValue` is absent
    #[serde(default)]
    pub data: Option<String>,

    /// Child nodes, decoded one at a time so a bad child only drops itself
    #[serde(default)]
    pub children: Option<Vec<Value>>,
}

impl CdpNode {
    /// Map this node onto [`Node`].
    ///
    /// Returns `None` for node kinds the renderer does not handle. Children
    /// of such kinds, and children that are not node objects at all, are
    /// skipped the same way.
    pub fn into_node(self) -> Option<Node> {
        let Some(code) = self.node_type else {
            debug!(node_name = %self.node_name, "skipping node without nodeType");
            return None;
        };

        match NodeType::try_from(code) {
            Ok(NodeType::Element) => {
                let tag_name = match self.tag_name {
                    Some(tag_name) if self.node_name.is_empty() => tag_name,
                    _ => self.node_name,
                };
                let children = self
                    .children
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(decode_child)
                    .collect();
                Some(Node::element(&tag_name).with_children(children))
            }
            Ok(NodeType::Text) => Some(Node::Text {
                data: self.node_value.or(self.data).unwrap_or_default(),
            }),
            Ok(kind) => {
                debug!(?kind, "skipping unsupported node kind");
                None
            }
            Err(code) => {
                debug!(code, "skipping unknown node type");
                None
            }
        }
    }
}

fn decode_child(value: Value) -> Option<Node> {
    match serde_json::from_value::<CdpNode>(value) {
        Ok(child) => child.into_node(),
        Err(e) => {
            debug!(error = %e, "skipping undecodable child node");
            None
        }
    }
}

/// Decode a CDP node from a JSON value.
///
/// Fails with [`TomdError::InvalidInput`] when the value is not an object
/// carrying a numeric `nodeType`, and with [`TomdError::ConversionError`]
/// when it nests deeper than `max_depth` nodes allow. A recognized but
/// unsupported root kind yields `Ok(None)`.
pub fn from_value(value: &Value, max_depth: usize) -> Result<Option<Node>> {
    check_nesting(value_nesting(value), max_depth)?;
    decode_root(value)
}

/// Decode a CDP node from a JSON string.
///
/// serde_json's own recursion limit is lifted; nesting is bounded by
/// `max_depth` instead, checked on the raw text before parsing.
pub fn from_json(json: &str, max_depth: usize) -> Result<Option<Node>> {
    check_nesting(text_nesting(json), max_depth)?;

    let mut de = serde_json::Deserializer::from_str(json);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de)
        .and_then(|value| de.end().map(|()| value))
        .map_err(|e| TomdError::InvalidInput(format!("malformed JSON: {}", e)))?;

    decode_root(&value)
}

fn decode_root(value: &Value) -> Result<Option<Node>> {
    let cdp = CdpNode::deserialize(value)
        .map_err(|e| TomdError::InvalidInput(format!("not a Node object: {}", e)))?;

    if cdp.node_type.is_none() {
        return Err(TomdError::InvalidInput(
            "not a Node object: missing nodeType".to_string(),
        ));
    }

    Ok(cdp.into_node())
}

/// Every node level takes two JSON levels: the node object and its
/// `children` array. Two more levels leave room for nested fields such as
/// attribute lists on the deepest node.
fn check_nesting(levels: usize, max_depth: usize) -> Result<()> {
    let limit = max_depth.saturating_add(2).saturating_mul(2);
    if levels > limit {
        debug!(levels, limit, "JSON nesting limit exceeded");
        return Err(TomdError::ConversionError(format!(
            "nesting depth exceeds limit of {}",
            max_depth
        )));
    }
    Ok(())
}

/// Deepest array/object nesting of a parsed value
fn value_nesting(value: &Value) -> usize {
    let mut deepest = 0;
    let mut stack = vec![(value, 1)];

    while let Some((value, level)) = stack.pop() {
        let nested: Box<dyn Iterator<Item = &Value>> = match value {
            Value::Array(items) => Box::new(items.iter()),
            Value::Object(map) => Box::new(map.values()),
            _ => continue,
        };
        deepest = deepest.max(level);
        stack.extend(nested.map(|child| (child, level + 1)));
    }

    deepest
}

/// Deepest array/object nesting of raw JSON text, ignoring brackets in strings
fn text_nesting(json: &str) -> usize {
    let (mut level, mut deepest) = (0usize, 0usize);
    let (mut in_string, mut escaped) = (false, false);

    for byte in json.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => {
                level += 1;
                deepest = deepest.max(level);
            }
            b']' | b'}' => level = level.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
