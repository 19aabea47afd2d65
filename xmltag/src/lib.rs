//! Build XML, HTML and XHTML documents with scoped blocks, then render them.
//!
//! xmltag provides:
//! - **Arena tree**: elements and text nodes stored in an indextree arena,
//!   addressed by [`NodeId`]
//! - **Scoped construction**: [`Document::enter`] / [`Document::within`] make a
//!   node the insertion point for everything created inside the block
//! - **Rendering**: escaped text, optional pretty-printing, and a pluggable
//!   [`TagRenderer`] for the final tag assembly
//! - **Preambles**: doctype declarations for HTML and XHTML documents
//!
//! # Example
//!
//! ```rust
//! use xmltag::{Document, Element, Text};
//!
//! let mut doc = Document::xml("feed").with_indent("  ");
//! let entry = doc.create_element(Element::new("entry").attr("id", "1"));
//! doc.within(entry, |doc| {
//!     doc.create_element(Element::new("title").content("Fish & Chips"));
//!     doc.create_text(Text::new("<b>raw</b>").safe());
//! });
//!
//! assert_eq!(
//!     doc.render(),
//!     "\n<feed>\n  <entry id=\"1\">\n    <title>Fish &amp; Chips</title>\n    <b>raw</b>\n  </entry>\n</feed>"
//! );
//! ```

mod tracing_macros;

pub mod doctype;
mod document;
mod error;
pub mod escape;
mod node;
mod render;
pub mod tags;
mod tree_dump;

pub use document::{Document, Scope};
pub use error::Error;
pub use node::{Attributes, Element, NodeData, NodeKind, Stem, Text};
pub use render::{MarkupRenderer, RenderOptions, TagRenderer};
pub use tree_dump::TreeDump;

// Re-export the handle type so callers need no direct indextree dependency
pub use indextree::NodeId;
