use facet_testhelpers::test;
use xmltag::{Attributes, Document, Element, MarkupRenderer, NodeKind, Text};

fn mock_renderer(tag: &str, content: &str, _attrs: &Attributes) -> String {
    format!("<{tag}>{content}</{tag}>")
}

fn mock_document() -> Document {
    Document::fragment().with_renderer(mock_renderer)
}

#[test]
fn test_element_init() {
    let mut doc = mock_document();
    let node = doc.create_element(Element::new("html").attr("lang", "en"));

    let elem = doc.get(node).kind.as_element().unwrap();
    assert_eq!(elem.tag, "html");
    assert_eq!(elem.attrs.get("lang"), Some("en"));
    assert_eq!(elem.attrs.len(), 1);
}

#[test]
fn test_element_repr() {
    let mut doc = mock_document();
    let node = doc.create_element(Element::new("html").attr("lang", "ru"));
    assert_eq!(format!("{:?}", doc.get(node)), "ElementNode(html, lang=ru)");
}

#[test]
fn test_element_render() {
    let mut doc = mock_document();
    let html = doc.create_element(Element::new("html").attr("lang", "en"));
    doc.within(html, |doc| {
        doc.create_element(Element::new("body").content("hello world"));
    });

    assert_eq!(doc.render_node(html), "<html><body>hello world</body></html>");
}

#[test]
fn test_element_render_pretty() {
    let mut doc = mock_document().with_indent("..");
    let html = doc.create_element("html");
    doc.within(html, |doc| {
        doc.create_element("body");
    });

    assert_eq!(doc.render_node(html), "\n<html>\n..<body></body>\n</html>");
}

#[test]
fn test_element_render_pretty_with_content() {
    let mut doc = Document::xml("html").with_indent("..");
    doc.create_element(Element::new("body").content("hello world"));

    assert_eq!(doc.render(), "\n<html>\n..<body>hello world</body>\n</html>");
}

#[test]
fn test_element_render_pretty_nested() {
    let mut doc = Document::xml("a").with_indent("  ");
    let b = doc.create_element("b");
    doc.within(b, |doc| {
        doc.create_element("c");
        doc.create_text("d");
    });
    doc.create_element("e");

    assert_eq!(
        doc.render(),
        "\n<a>\n  <b>\n    <c></c>\n    d\n  </b>\n  <e></e>\n</a>"
    );
}

#[test]
fn test_element_render_escape() {
    let mut doc = mock_document();
    let node = doc.create_element(Element::new("body").content(r#"<div>"hello"</div>"#));
    assert_eq!(
        doc.render_node(node),
        r#"<body>&lt;div&gt;"hello"&lt;/div&gt;</body>"#
    );

    let node = doc.create_element(
        Element::new("body")
            .content(r#"<div>"hello"</div>"#)
            .safe(),
    );
    assert_eq!(doc.render_node(node), r#"<body><div>"hello"</div></body>"#);
}

#[test]
fn test_element_content_takes_precedence_over_children() {
    let mut doc = mock_document();
    let p = doc.create_element(Element::new("p").content("inline"));
    doc.within(p, |doc| {
        doc.create_text("ignored");
    });

    assert_eq!(doc.children(p).count(), 1);
    assert_eq!(doc.render_node(p), "<p>inline</p>");
}

#[test]
fn test_element_with_attrs_through_markup_renderer() {
    let mut doc = Document::fragment().with_renderer(MarkupRenderer::new());
    let node = doc.create_element(Element::new("a").attr("href", "/x?a=1&b=2").attr("id", "l"));
    assert_eq!(
        doc.render_node(node),
        r#"<a href="/x?a=1&b=2" id="l"></a>"#
    );
}

#[test]
fn test_text_render() {
    let mut doc = mock_document();
    let node = doc.create_text("hello world");
    assert_eq!(doc.render_node(node), "hello world");
}

#[test]
fn test_text_render_escape() {
    let mut doc = mock_document();
    let node = doc.create_text(r#"<div>"hello"</div>"#);
    assert_eq!(doc.render_node(node), r#"&lt;div&gt;"hello"&lt;/div&gt;"#);

    let node = doc.create_text(Text::new(r#"<div>"hello"</div>"#).safe());
    assert_eq!(doc.render_node(node), r#"<div>"hello"</div>"#);
}

#[test]
fn test_text_repr() {
    let mut doc = mock_document();
    let node = doc.create_text("hello world");
    assert_eq!(format!("{:?}", doc.get(node)), "TextNode(hello world)");
    assert!(doc.get(node).kind.is_text());
}

#[test]
fn test_document_root_is_never_rendered() {
    let doc = mock_document();
    let sentinel = doc.document_root();
    assert!(matches!(doc.get(sentinel).kind, NodeKind::DocumentRoot));
    assert_eq!(doc.render_node(sentinel), "");
}
