//! Node payloads stored in the document arena.
//!
//! Every node of a [`Document`](crate::Document) lives in an indextree arena and
//! carries a [`NodeData`]: its [`NodeKind`] and its nesting level. Structure
//! (parent, children, sibling order) is owned by the arena itself.

use compact_str::CompactString;
use indexmap::IndexMap;
use std::fmt;

/// String type used for tag names, attributes and text.
pub type Stem = CompactString;

/// Ordered attribute map of an element.
///
/// Keeps insertion order, which is the order used by the debug representation
/// and, unless the renderer sorts them, by rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: IndexMap<Stem, Stem>,
}

impl Attributes {
    /// Create a new empty attribute collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(Stem::as_str)
    }

    /// Set an attribute value. An existing attribute keeps its position.
    pub fn set(&mut self, name: impl Into<Stem>, value: impl Into<Stem>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Remove an attribute by name, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Stem> {
        self.entries.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate over all attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<Stem>,
    V: Into<Stem>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// An element: tag name, attributes and optional inline content.
///
/// Inline content takes precedence over child nodes when rendering; an element
/// with non-empty content renders the content and ignores its children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: Stem,
    pub attrs: Attributes,
    /// Inline text content. Empty means unset.
    pub content: Stem,
    /// Render `content` verbatim instead of escaping it.
    pub safe: bool,
}

impl Element {
    /// Create an element with the given tag name and nothing else.
    pub fn new(tag: impl Into<Stem>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Add (or replace) an attribute.
    pub fn attr(mut self, name: impl Into<Stem>, value: impl Into<Stem>) -> Self {
        self.attrs.set(name, value);
        self
    }

    /// Add several attributes at once.
    pub fn attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<Stem>,
        V: Into<Stem>,
    {
        for (name, value) in attrs {
            self.attrs.set(name, value);
        }
        self
    }

    /// Set the inline content.
    pub fn content(mut self, content: impl Into<Stem>) -> Self {
        self.content = content.into();
        self
    }

    /// Mark the inline content as safe: it is rendered without escaping.
    pub fn safe(mut self) -> Self {
        self.safe = true;
        self
    }
}

impl From<&str> for Element {
    fn from(tag: &str) -> Self {
        Element::new(tag)
    }
}

impl From<String> for Element {
    fn from(tag: String) -> Self {
        Element::new(tag)
    }
}

/// A text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    pub value: Stem,
    /// Render `value` verbatim instead of escaping it.
    pub safe: bool,
}

impl Text {
    pub fn new(value: impl Into<Stem>) -> Self {
        Self {
            value: value.into(),
            safe: false,
        }
    }

    /// Mark the text as safe: it is rendered without escaping.
    pub fn safe(mut self) -> Self {
        self.safe = true;
        self
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Text::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Text::new(value)
    }
}

/// What a node is.
#[derive(Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Sentinel at the base of the current-node stack. Never rendered.
    DocumentRoot,
    Element(Element),
    Text(Text),
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text(_))
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            NodeKind::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut Text> {
        match self {
            NodeKind::Text(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::DocumentRoot => write!(f, "DocumentRoot"),
            NodeKind::Element(elem) => {
                write!(f, "ElementNode({}", elem.tag)?;
                for (name, value) in elem.attrs.iter() {
                    write!(f, ", {name}={value}")?;
                }
                write!(f, ")")
            }
            NodeKind::Text(text) => write!(f, "TextNode({})", text.value),
        }
    }
}

/// Data stored in each arena node.
#[derive(Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: NodeKind,
    /// Nesting depth; the root is at level 0 and each child sits one deeper
    /// than its parent.
    pub level: usize,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self { kind, level: 0 }
    }
}

impl fmt::Debug for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.kind, f)
    }
}
