//! Document: an arena of nodes plus the scoped construction point.
//!
//! All nodes of a document live in one indextree arena and are addressed by
//! [`NodeId`]. The document tracks a *current node*: new elements and text are
//! appended to it. [`Document::enter`] makes a node current for the lifetime of
//! the returned [`Scope`] guard, and dropping the guard restores the previous
//! current node, so nested scopes mirror the nesting of the markup:
//!
//! ```rust
//! use xmltag::{Document, Element};
//!
//! let mut doc = Document::html();
//! let body = doc.create_element(Element::new("body").attr("class", "page"));
//! {
//!     let mut body = doc.enter(body);
//!     let p = body.create_element("p");
//!     body.within(p, |doc| {
//!         doc.create_text("fish & chips");
//!     });
//! }
//! assert_eq!(
//!     doc.render(),
//!     "<!DOCTYPE html>\n<html><body class=\"page\"><p>fish &amp; chips</p></body></html>"
//! );
//! ```

use crate::doctype;
use crate::error::Error;
use crate::node::{Attributes, Element, NodeData, NodeKind, Stem, Text};
use crate::render::{MarkupRenderer, NodeRenderer, RenderOptions, TagRenderer};
use crate::tracing_macros::{debug, trace};
use crate::tree_dump::TreeDump;
use indextree::{Arena, NodeId};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A markup document under construction.
pub struct Document {
    /// THE tree - all nodes live here
    arena: Arena<NodeData>,

    /// Sentinel at the base of the current-node stack; never part of the tree.
    document_root: NodeId,

    /// Root of the rendered tree, if any node has been created yet.
    root: Option<NodeId>,

    /// Insertion point for new nodes.
    current: NodeId,

    root_tag: Option<Stem>,
    doctype: Option<&'static str>,
    options: RenderOptions,
    renderer: Box<dyn TagRenderer>,
}

impl Document {
    fn build(root_tag: Option<Stem>, doctype: Option<&'static str>) -> Self {
        let mut arena = Arena::new();
        let document_root = arena.new_node(NodeData::new(NodeKind::DocumentRoot));
        let root = root_tag
            .as_ref()
            .map(|tag| arena.new_node(NodeData::new(NodeKind::Element(Element::new(tag.clone())))));

        Self {
            arena,
            document_root,
            root,
            current: document_root,
            root_tag,
            doctype,
            options: RenderOptions::default(),
            renderer: Box::new(MarkupRenderer::default()),
        }
    }

    /// A plain XML document with the given root element and no preamble.
    pub fn xml(root_tag: impl Into<Stem>) -> Self {
        Self::build(Some(root_tag.into()), None)
    }

    /// An HTML5 document: `<!DOCTYPE html>` and an `html` root element.
    pub fn html() -> Self {
        Self::build(Some("html".into()), Some(doctype::HTML5))
    }

    /// An XHTML 1.0 Strict document with an `html` root element.
    pub fn xhtml() -> Self {
        Self::build(Some("html".into()), Some(doctype::XHTML))
    }

    /// A document without a declared root: the first node created becomes the
    /// root, and rendering an empty fragment yields an empty string.
    pub fn fragment() -> Self {
        Self::build(None, None)
    }

    /// A document whose preamble is looked up by name in the doctype table.
    pub fn with_doctype(root_tag: impl Into<Stem>, name: &str) -> Result<Self, Error> {
        let preamble = doctype::lookup(name).ok_or_else(|| Error::UnknownDoctype {
            name: name.to_string(),
        })?;
        Ok(Self::build(Some(root_tag.into()), Some(preamble)))
    }

    /// Pretty-print with the given indentation string.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.options.indent = Some(indent.into());
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Replace the tag renderer used to assemble elements.
    pub fn with_renderer(mut self, renderer: impl TagRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Set or clear the indentation string.
    pub fn set_indent(&mut self, indent: Option<String>) {
        self.options.indent = indent;
    }

    pub fn set_renderer(&mut self, renderer: impl TagRenderer + 'static) {
        self.renderer = Box::new(renderer);
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn root_tag(&self) -> Option<&str> {
        self.root_tag.as_deref()
    }

    pub fn doctype(&self) -> Option<&'static str> {
        self.doctype
    }

    //
    // Tree queries
    //

    /// Root of the tree, `None` for a fragment nothing was created in yet.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The sentinel that is current when no scope is active.
    pub fn document_root(&self) -> NodeId {
        self.document_root
    }

    /// The node new nodes are currently appended to.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Get immutable reference to node data
    pub fn get(&self, id: NodeId) -> &NodeData {
        self.arena[id].get()
    }

    /// Get mutable reference to node data
    pub fn get_mut(&mut self, id: NodeId) -> &mut NodeData {
        self.arena[id].get_mut()
    }

    /// Element payload of a node, if it is an element.
    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.get_mut(id).kind.as_element_mut()
    }

    pub fn level(&self, id: NodeId) -> usize {
        self.get(id).level
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id].parent()
    }

    /// Iterate children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// True iff the node is the last child of its parent. Parentless nodes are
    /// never last.
    pub fn is_last(&self, id: NodeId) -> bool {
        let node = &self.arena[id];
        node.parent().is_some() && node.next_sibling().is_none()
    }

    //
    // Construction
    //

    /// Create an element and append it at the current construction point.
    pub fn create_element(&mut self, element: impl Into<Element>) -> NodeId {
        self.create(NodeKind::Element(element.into()))
    }

    /// Create a text node and append it at the current construction point.
    pub fn create_text(&mut self, text: impl Into<Text>) -> NodeId {
        self.create(NodeKind::Text(text.into()))
    }

    fn create(&mut self, kind: NodeKind) -> NodeId {
        let node = self.arena.new_node(NodeData::new(kind));

        let parent = if self.current == self.document_root {
            match self.root {
                Some(root) => root,
                None => {
                    debug!(?node, "first node becomes the document root");
                    self.root = Some(node);
                    return node;
                }
            }
        } else {
            self.current
        };

        parent.append(node, &mut self.arena);
        let level = self.level(parent) + 1;
        self.arena[node].get_mut().level = level;
        trace!(?node, ?parent, "created node");
        node
    }

    /// Make `node` the construction point until the returned guard is dropped.
    pub fn enter(&mut self, node: NodeId) -> Scope<'_> {
        let resume = std::mem::replace(&mut self.current, node);
        trace!(?node, ?resume, "enter scope");
        Scope {
            doc: self,
            node,
            resume,
        }
    }

    /// Run `build` with `node` as the construction point.
    ///
    /// The previous construction point is restored afterwards, also when
    /// `build` panics.
    pub fn within<R>(&mut self, node: NodeId, build: impl FnOnce(&mut Document) -> R) -> R {
        let mut scope = self.enter(node);
        build(&mut scope)
    }

    //
    // Mutation
    //

    /// Move `node` to the end of `parent`'s children, detaching it from its
    /// previous parent first. The moved subtree is re-leveled below `parent`.
    pub fn append_to(&mut self, node: NodeId, parent: NodeId) -> Result<(), Error> {
        if node == self.document_root || parent == self.document_root {
            return Err(Error::DocumentRootSentinel);
        }

        parent.checked_append(node, &mut self.arena)?;

        let base = self.level(parent) + 1;
        self.arena[node].get_mut().level = base;
        let descendants: Vec<NodeId> = node.descendants(&self.arena).skip(1).collect();
        for id in descendants {
            if let Some(p) = self.arena[id].parent() {
                let level = self.level(p) + 1;
                self.arena[id].get_mut().level = level;
            }
        }

        trace!(?node, ?parent, level = base, "appended node");
        Ok(())
    }

    /// Detach `node` from its parent. Its own children stay attached to it.
    pub fn remove(&mut self, node: NodeId) {
        if self.arena[node].parent().is_some() {
            trace!(?node, "detached node");
            node.detach(&mut self.arena);
        }
    }

    //
    // Rendering
    //

    /// Assemble one element through the configured tag renderer.
    pub fn render_tag(&self, tag: &str, content: &str, attrs: &Attributes) -> String {
        self.renderer.render_tag(tag, content, attrs)
    }

    /// Render a single node and its subtree.
    pub fn render_node(&self, id: NodeId) -> String {
        NodeRenderer::new(self).render(id)
    }

    /// Render the whole document, preamble first.
    ///
    /// A document without a root renders as the empty string.
    pub fn render(&self) -> String {
        let Some(root) = self.root else {
            return String::new();
        };
        debug!("rendering document\n{}", self.dump());

        let body = self.render_node(root);
        match self.doctype {
            Some(doctype) => {
                let mut out = String::with_capacity(doctype.len() + 1 + body.len());
                out.push_str(doctype);
                out.push('\n');
                out.push_str(&body);
                out
            }
            None => body,
        }
    }

    /// Tree dump for debugging.
    pub fn dump(&self) -> TreeDump<'_> {
        TreeDump::new(&self.arena, self.root)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("root_tag", &self.root_tag)
            .field("doctype", &self.doctype)
            .field("root", &self.root)
            .field("current", &self.current)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Guard holding a node as the document's construction point.
///
/// Derefs to the [`Document`], so nodes created through the scope land inside
/// its node. Dropping the scope restores the construction point captured when
/// it was entered.
pub struct Scope<'doc> {
    doc: &'doc mut Document,
    node: NodeId,
    resume: NodeId,
}

impl Scope<'_> {
    /// The node this scope builds into.
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// End the scope now.
    pub fn exit(self) {}
}

impl Deref for Scope<'_> {
    type Target = Document;

    fn deref(&self) -> &Document {
        self.doc
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Document {
        self.doc
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        trace!(node = ?self.node, resume = ?self.resume, "exit scope");
        self.doc.current = self.resume;
    }
}
