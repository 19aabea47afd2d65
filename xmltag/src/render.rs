//! Markup rendering for document trees.
//!
//! Rendering is split in two:
//!
//! - the tree walk in this module decides what goes *inside* each element
//!   (escaped content or rendered children, with indentation in pretty mode);
//! - a [`TagRenderer`] assembles the final `<tag attrs>body</tag>` string, so
//!   attribute serialization can change without touching the tree logic.

use crate::Document;
use crate::escape::{escape_attribute, escape_unless};
use crate::node::{Attributes, Element, NodeKind};
use crate::tracing_macros::trace;
use indextree::NodeId;
use std::fmt::Write;

/// Options for rendering a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indentation string for pretty-printing. `None` renders without any
    /// inserted whitespace.
    pub indent: Option<String>,
}

impl RenderOptions {
    /// Create new default options (compact output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing with two-space indentation.
    pub fn pretty(self) -> Self {
        self.with_indent("  ")
    }

    /// Pretty-print with a custom indentation string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Disable pretty-printing.
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.indent.is_some()
    }
}

/// Assembles one element from its tag name, rendered body and attributes.
pub trait TagRenderer {
    fn render_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> String;
}

impl<F> TagRenderer for F
where
    F: Fn(&str, &str, &Attributes) -> String,
{
    fn render_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> String {
        self(tag, content, attrs)
    }
}

/// The default tag renderer: `<tag k="v">content</tag>`.
///
/// The closing tag is always emitted, even for empty elements. Attribute
/// values are written as given unless [`escape_attributes`] is enabled; by
/// default they are trusted to be well-formed.
///
/// [`escape_attributes`]: MarkupRenderer::escape_attributes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkupRenderer {
    /// Write attributes sorted by name instead of insertion order.
    pub sort_attributes: bool,
    /// Escape `&`, `<`, `>` and `"` in attribute values.
    pub escape_attributes: bool,
}

impl MarkupRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable sorting attributes alphabetically for deterministic output.
    pub fn sort_attributes(mut self) -> Self {
        self.sort_attributes = true;
        self
    }

    /// Enable escaping of attribute values.
    pub fn escape_attributes(mut self) -> Self {
        self.escape_attributes = true;
        self
    }

    fn write_attr(&self, out: &mut String, name: &str, value: &str) {
        let _ = write!(out, " {name}=\"");
        if self.escape_attributes {
            out.push_str(&escape_attribute(value));
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

impl TagRenderer for MarkupRenderer {
    fn render_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> String {
        let mut out = String::with_capacity(2 * tag.len() + content.len() + 5);
        let _ = write!(out, "<{tag}");

        if self.sort_attributes {
            let mut sorted: Vec<_> = attrs.iter().collect();
            sorted.sort_by_key(|(name, _)| *name);
            for (name, value) in sorted {
                self.write_attr(&mut out, name, value);
            }
        } else {
            for (name, value) in attrs.iter() {
                self.write_attr(&mut out, name, value);
            }
        }

        out.push('>');
        out.push_str(content);
        let _ = write!(out, "</{tag}>");
        out
    }
}

/// Recursive render of one subtree of a document.
pub(crate) struct NodeRenderer<'a> {
    doc: &'a Document,
    indent: Option<&'a str>,
}

impl<'a> NodeRenderer<'a> {
    pub(crate) fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            indent: doc.options().indent.as_deref(),
        }
    }

    pub(crate) fn render(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node);
        out
    }

    /// Newline plus `level` indents; nothing in compact mode.
    fn write_indent(&self, out: &mut String, level: usize) {
        if let Some(indent) = self.indent {
            out.push('\n');
            for _ in 0..level {
                out.push_str(indent);
            }
        }
    }

    fn write_node(&self, out: &mut String, node: NodeId) {
        let data = self.doc.get(node);
        match &data.kind {
            NodeKind::DocumentRoot => {}
            NodeKind::Text(text) => {
                self.write_indent(out, data.level);
                out.push_str(&escape_unless(&text.value, text.safe));
            }
            NodeKind::Element(elem) => {
                self.write_indent(out, data.level);
                let body = self.element_body(node, elem, data.level);
                out.push_str(&self.doc.render_tag(&elem.tag, &body, &elem.attrs));
            }
        }
    }

    /// Inline content wins over children; the two are never merged.
    fn element_body(&self, node: NodeId, elem: &Element, level: usize) -> String {
        if !elem.content.is_empty() {
            if self.doc.children(node).next().is_some() {
                trace!(tag = %elem.tag, "element has content and children, children ignored");
            }
            return escape_unless(&elem.content, elem.safe).into_owned();
        }

        let mut body = String::new();
        for child in self.doc.children(node) {
            self.write_node(&mut body, child);
            if self.doc.is_last(child) {
                self.write_indent(&mut body, level);
            }
        }
        body
    }
}
