//! Constructors for known HTML tag names.
//!
//! Each function returns a bare [`Element`] that can be refined with
//! [`Element::attr`], [`Element::content`] and friends and handed to
//! [`Document::create_element`](crate::Document::create_element):
//!
//! ```rust
//! use xmltag::{Document, tags};
//!
//! let mut doc = Document::html();
//! let body = doc.create_element(tags::body());
//! doc.within(body, |doc| {
//!     doc.create_element(tags::h1().content("Hello"));
//!     doc.create_element(tags::a().attr("href", "/about").content("About"));
//! });
//! assert!(doc.render().ends_with(
//!     "<body><h1>Hello</h1><a href=\"/about\">About</a></body></html>"
//! ));
//! ```
//!
//! Tags outside this list go through [`Element::new`] directly.

use crate::node::Element;

macro_rules! known_tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("A `<", $tag, ">` element.")]
            pub fn $name() -> Element {
                Element::new($tag)
            }
        )*

        /// Every tag name with a constructor in this module.
        pub const KNOWN_TAGS: &[&str] = &[$($tag),*];
    };
}

known_tags! {
    // Document
    html => "html", head => "head", body => "body",
    // Metadata
    title => "title", base => "base", link => "link", meta => "meta", style => "style",
    // Sections
    header => "header", footer => "footer", main => "main", article => "article",
    section => "section", nav => "nav", aside => "aside",
    h1 => "h1", h2 => "h2", h3 => "h3", h4 => "h4", h5 => "h5", h6 => "h6",
    // Grouping
    p => "p", div => "div", span => "span", pre => "pre", blockquote => "blockquote",
    ol => "ol", ul => "ul", li => "li", dl => "dl", dt => "dt", dd => "dd",
    figure => "figure", figcaption => "figcaption", hr => "hr",
    // Text-level
    a => "a", em => "em", strong => "strong", small => "small", code => "code",
    b => "b", i => "i", u => "u", s => "s", sub => "sub", sup => "sup",
    abbr => "abbr", cite => "cite", q => "q", kbd => "kbd", mark => "mark",
    time => "time", br => "br", wbr => "wbr",
    // Embedded
    img => "img", iframe => "iframe", video => "video", audio => "audio",
    source => "source", picture => "picture", canvas => "canvas", svg => "svg",
    // Tables
    table => "table", caption => "caption", thead => "thead", tbody => "tbody",
    tfoot => "tfoot", tr => "tr", th => "th", td => "td",
    // Forms
    form => "form", input => "input", button => "button", select => "select",
    option => "option", textarea => "textarea", label => "label",
    fieldset => "fieldset", legend => "legend",
    // Interactive
    details => "details", summary => "summary", dialog => "dialog",
    // Scripting
    script => "script", noscript => "noscript", template => "template",
}

/// Whether `name` has a constructor in this module.
pub fn is_known(name: &str) -> bool {
    KNOWN_TAGS.contains(&name)
}
