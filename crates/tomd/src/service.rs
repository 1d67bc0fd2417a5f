//! TomdService - the main entry point for node tree to Markdown conversion.

use tracing::trace;

use crate::node::Node;
use crate::normalize::normalize;
use crate::render::Renderer;
use crate::rules::{Rule, Rules};
use crate::Result;

const BLANK_LINE: &str = "\n\n";

/// Options for TomdService
#[derive(Debug, Clone)]
pub struct TomdOptions {
    /// Horizontal rule string
    pub hr: String,

    /// Bullet list marker
    pub bullet_list_marker: char,

    /// Emphasis delimiter
    pub em_delimiter: char,

    /// Strong delimiter
    pub strong_delimiter: String,

    /// Drop the blank line a trailing block leaves at the end of the output.
    /// A single newline ending the last line, as after a list item, is kept.
    pub trim_trailing_blank_line: bool,

    /// Deepest node nesting accepted before conversion fails
    pub max_depth: usize,
}

impl Default for TomdOptions {
    fn default() -> Self {
        Self {
            hr: "* * *".to_string(),
            bullet_list_marker: '-',
            em_delimiter: '*',
            strong_delimiter: "**".to_string(),
            trim_trailing_blank_line: false,
            max_depth: 512,
        }
    }
}

/// The main service for converting node trees to Markdown.
///
/// A service holds configuration only; every conversion gets its own render
/// state, so one service can be shared between threads.
#[derive(Debug, Clone)]
pub struct TomdService {
    options: TomdOptions,
    rules: Rules,
}

impl TomdService {
    /// Create a new TomdService with default options
    pub fn new() -> Self {
        Self {
            options: TomdOptions::default(),
            rules: Rules::new(),
        }
    }

    /// Create a TomdService with custom options
    pub fn with_options(options: TomdOptions) -> Self {
        Self {
            options,
            rules: Rules::new(),
        }
    }

    /// Convert a node tree to Markdown
    pub fn convert(&self, node: &Node) -> Result<String> {
        let raw = self.render(node)?;
        let mut result = normalize(&raw);

        if self.options.trim_trailing_blank_line && result.ends_with(BLANK_LINE) {
            result.truncate(result.len() - BLANK_LINE.len());
        }

        trace!(raw_len = raw.len(), len = result.len(), "converted node tree");
        Ok(result)
    }

    /// Render a node tree to a raw fragment, without normalization
    pub fn render(&self, node: &Node) -> Result<String> {
        Renderer::new(&self.options, &self.rules).render(node)
    }

    /// Convert a CDP-style JSON node (`DOM.Node`) to Markdown.
    ///
    /// Fails with [`crate::TomdError::InvalidInput`] before rendering when the
    /// value is not a node. Unsupported root kinds produce an empty string.
    #[cfg(feature = "cdp")]
    pub fn convert_value(&self, value: &serde_json::Value) -> Result<String> {
        match crate::cdp::from_value(value, self.options.max_depth)? {
            Some(node) => self.convert(&node),
            None => Ok(String::new()),
        }
    }

    /// Convert a JSON-serialized CDP node to Markdown
    #[cfg(feature = "cdp")]
    pub fn convert_json(&self, json: &str) -> Result<String> {
        match crate::cdp::from_json(json, self.options.max_depth)? {
            Some(node) => self.convert(&node),
            None => Ok(String::new()),
        }
    }

    /// Map a tag to a custom rule
    pub fn add_rule(&mut self, tag: &str, rule: Rule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Keep elements with this tag as `<TAG>…</TAG>`
    pub fn keep(&mut self, tag: &str) -> &mut Self {
        self.rules.keep(tag);
        self
    }

    /// Remove elements with this tag, children included
    pub fn remove(&mut self, tag: &str) -> &mut Self {
        self.rules.remove(tag);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &TomdOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TomdOptions {
        &mut self.options
    }

    /// Get the tag rules
    pub fn rules(&self) -> &Rules {
        &self.rules
    }
}

impl Default for TomdService {
    fn default() -> Self {
        Self::new()
    }
}
