//! Recursive renderer from a [`Node`] tree to a raw Markdown fragment.
//!
//! The renderer appends to a single output buffer. Block spacing is not
//! emitted eagerly: a block that finishes only records that the next
//! sibling with output needs a separator, so trailing spacing never piles
//! up inside nested blocks.

use std::mem;

use tracing::{debug, trace};

use crate::node::Node;
use crate::rules::{ListMarker, Rule, Rules};
use crate::service::TomdOptions;
use crate::utilities::{list_indent, prepare_text};
use crate::{Result, TomdError};

const QUOTE_PREFIX: &str = "> ";
const BLANK_LINE: &str = "\n\n";
const NUMBERED_MARKER: &str = "1. ";

/// Mutable state carried across one top-level render
#[derive(Debug, Default)]
struct RenderState {
    /// Current nesting depth inside `ul`/`ol`
    list_depth: usize,
    /// Marker style of the innermost active list
    list_marker: ListMarker,
    in_preformatted: bool,
    /// Number of enclosing `blockquote` elements
    blockquote_depth: usize,
    /// The last node with output was a block; the next one needs a separator
    block_just_closed: bool,
    /// Inline content was written since the last block boundary
    inline_pending: bool,
}

/// Renderer for a single conversion. Create one per call.
pub(crate) struct Renderer<'a> {
    options: &'a TomdOptions,
    rules: &'a Rules,
    state: RenderState,
}

impl<'a> Renderer<'a> {
    pub(crate) fn new(options: &'a TomdOptions, rules: &'a Rules) -> Self {
        Self {
            options,
            rules,
            state: RenderState::default(),
        }
    }

    /// Render the tree rooted at `root` into a raw, non-normalized fragment
    pub(crate) fn render(mut self, root: &Node) -> Result<String> {
        let mut out = String::new();
        self.render_node(root, &mut out, 0)?;

        if self.state.block_just_closed {
            out.push_str(BLANK_LINE);
        }

        Ok(out)
    }

    fn render_node(&mut self, node: &Node, out: &mut String, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            debug!(limit = self.options.max_depth, "nesting depth limit exceeded");
            return Err(TomdError::ConversionError(format!(
                "nesting depth exceeds limit of {}",
                self.options.max_depth
            )));
        }

        match node {
            Node::Element { tag_name, children } => {
                self.render_element(tag_name, children, out, depth)
            }
            Node::Text { data } => {
                if let Some(text) = prepare_text(data, self.state.in_preformatted) {
                    self.write_inline(out, &text);
                }
                Ok(())
            }
        }
    }

    fn render_children(&mut self, children: &[Node], out: &mut String, depth: usize) -> Result<()> {
        for child in children {
            self.render_node(child, out, depth + 1)?;
        }
        Ok(())
    }

    fn render_element(
        &mut self,
        tag_name: &str,
        children: &[Node],
        out: &mut String,
        depth: usize,
    ) -> Result<()> {
        let options = self.options;

        match self.rules.for_tag(tag_name) {
            Rule::Strong => {
                self.render_wrapped(&options.strong_delimiter, children, out, depth)?;
            }

            Rule::Emphasis => {
                let delimiter = options.em_delimiter.to_string();
                self.render_wrapped(&delimiter, children, out, depth)?;
            }

            Rule::Strikethrough => self.render_wrapped("~~", children, out, depth)?,

            Rule::Code => {
                if self.state.in_preformatted {
                    self.write_inline(out, "`\n");
                    self.render_children(children, out, depth)?;
                    out.push_str("\n`");
                } else {
                    self.render_wrapped("`", children, out, depth)?;
                }
            }

            Rule::HorizontalRule => {
                self.begin_block(out);
                out.push_str(&options.hr);
                self.close_block();
            }

            Rule::Heading(level) => {
                self.begin_block(out);
                out.push_str(&"#".repeat(level as usize));
                out.push(' ');
                self.state.inline_pending = false;
                self.render_children(children, out, depth)?;
                self.close_block();
            }

            Rule::Blockquote => {
                self.begin_block(out);
                out.push_str(QUOTE_PREFIX);
                self.state.inline_pending = false;

                self.state.blockquote_depth += 1;
                self.render_children(children, out, depth)?;
                self.state.blockquote_depth -= 1;

                self.close_block();
            }

            Rule::Block => {
                self.begin_block(out);
                self.render_children(children, out, depth)?;
                self.close_block();
            }

            Rule::Preformatted => self.render_preformatted(children, out, depth)?,

            Rule::List(marker) => self.render_list(marker, children, out, depth)?,

            Rule::ListItem => self.render_list_item(children, out, depth)?,

            Rule::LineBreak => {
                self.separate(out);
                if self.state.blockquote_depth > 0 {
                    let blank = self.quoted_blank_line();
                    if !out.ends_with(&blank) {
                        if !out.ends_with('\n') {
                            out.push('\n');
                        }
                        out.push_str(&blank);
                    }
                    self.state.inline_pending = false;
                } else {
                    out.push('\n');
                    // the broken line still has to be kept apart from a following block
                    self.state.inline_pending = true;
                }
            }

            Rule::Verbatim => {
                let tag = tag_name.to_uppercase();
                self.write_inline(out, &format!("<{}>", tag));
                self.render_children(children, out, depth)?;
                out.push_str(&format!("</{}>", tag));
            }

            Rule::Remove => {
                trace!(tag = tag_name, "removed element");
            }
        }

        Ok(())
    }

    fn render_wrapped(
        &mut self,
        delimiter: &str,
        children: &[Node],
        out: &mut String,
        depth: usize,
    ) -> Result<()> {
        self.write_inline(out, delimiter);
        self.render_children(children, out, depth)?;
        out.push_str(delimiter);
        Ok(())
    }

    fn render_preformatted(&mut self, children: &[Node], out: &mut String, depth: usize) -> Result<()> {
        self.begin_block(out);

        // Children go to their own buffer so the quote prefix can be applied
        // to every line of the finished block.
        let mut inner = String::new();
        let outer_pre = mem::replace(&mut self.state.in_preformatted, true);
        let outer_quote = mem::replace(&mut self.state.blockquote_depth, 0);
        self.render_children(children, &mut inner, depth)?;
        self.state.in_preformatted = outer_pre;
        self.state.blockquote_depth = outer_quote;

        let block = if has_sole_code_child(children) {
            format!("``{}``", inner)
        } else {
            format!("<pre>\n{}\n</pre>", inner)
        };

        if outer_quote > 0 {
            let line_start = format!("\n{}", self.quote_prefix());
            out.push_str(&block.replace('\n', &line_start));
        } else {
            out.push_str(&block);
        }

        self.close_block();
        Ok(())
    }

    fn render_list(
        &mut self,
        marker: ListMarker,
        children: &[Node],
        out: &mut String,
        depth: usize,
    ) -> Result<()> {
        let nested = self.state.list_depth > 0;

        if nested {
            // nested lists stay tight: just start on a fresh line
            self.state.block_just_closed = false;
            self.state.inline_pending = false;
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        } else {
            self.begin_block(out);
        }

        self.state.list_depth += 1;
        let outer_marker = mem::replace(&mut self.state.list_marker, marker);
        self.render_children(children, out, depth)?;
        self.state.list_marker = outer_marker;
        self.state.list_depth -= 1;

        if !nested {
            self.close_block();
        }
        Ok(())
    }

    fn render_list_item(&mut self, children: &[Node], out: &mut String, depth: usize) -> Result<()> {
        self.separate(out);
        if self.state.inline_pending && !out.ends_with('\n') {
            out.push('\n');
        }
        if self.state.blockquote_depth > 0 && out.ends_with('\n') {
            out.push_str(&self.quote_prefix());
        }

        out.push_str(&list_indent(self.state.list_depth));
        match self.state.list_marker {
            ListMarker::Bullet => {
                out.push(self.options.bullet_list_marker);
                out.push(' ');
            }
            ListMarker::Numbered => out.push_str(NUMBERED_MARKER),
        }
        self.state.inline_pending = false;

        self.render_children(children, out, depth)?;

        if !out.ends_with('\n') {
            out.push('\n');
        }
        self.state.block_just_closed = false;
        self.state.inline_pending = false;
        Ok(())
    }

    /// Emit the pending block separator, if any
    fn separate(&mut self, out: &mut String) {
        if !self.state.block_just_closed {
            return;
        }
        self.state.block_just_closed = false;
        self.state.inline_pending = false;

        if self.state.blockquote_depth > 0 {
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.quoted_blank_line());
        } else {
            out.push_str(BLANK_LINE);
        }
    }

    /// Line prefix for the current blockquote nesting, e.g. `"> > "`
    fn quote_prefix(&self) -> String {
        QUOTE_PREFIX.repeat(self.state.blockquote_depth)
    }

    /// A quoted empty line followed by the prefix of the next quoted line
    fn quoted_blank_line(&self) -> String {
        let prefix = self.quote_prefix();
        format!("{}\n{}", prefix, prefix)
    }

    /// Open a block, keeping it apart from whatever precedes it
    fn begin_block(&mut self, out: &mut String) {
        if self.state.inline_pending {
            self.state.block_just_closed = true;
        }
        self.separate(out);
    }

    fn close_block(&mut self) {
        self.state.block_just_closed = true;
        self.state.inline_pending = false;
    }

    fn write_inline(&mut self, out: &mut String, text: &str) {
        self.separate(out);
        out.push_str(text);
        self.state.inline_pending = true;
    }
}

/// Check if the only non-blank child is a `code` element
fn has_sole_code_child(children: &[Node]) -> bool {
    let mut elements = children.iter().filter(|c| match c {
        Node::Element { .. } => true,
        Node::Text { data } => !data.trim().is_empty(),
    });

    matches!(
        (elements.next(), elements.next()),
        (Some(child), None) if child.tag_name().as_deref() == Some("code")
    )
}
