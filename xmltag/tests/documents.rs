use facet_testhelpers::test;
use xmltag::{Attributes, Document, Element, RenderOptions, doctype};

fn mock_renderer(tag: &str, content: &str, _attrs: &Attributes) -> String {
    format!("<{tag}>{content}</{tag}>")
}

#[test]
fn test_xml_tag_reprs() {
    let mut doc = Document::xml("xml").with_renderer(mock_renderer);
    let html = doc.create_element("html");
    let text = doc.create_text("hello");

    assert_eq!(format!("{:?}", doc.get(html)), "ElementNode(html)");
    assert_eq!(format!("{:?}", doc.get(text)), "TextNode(hello)");
}

#[test]
fn test_xml_render_tag() {
    let doc = Document::xml("xml").with_renderer(mock_renderer);
    assert_eq!(doc.render_tag("html", "", &Attributes::new()), "<html></html>");
}

#[test]
fn test_xml_render_empty() {
    let doc = Document::xml("xml").with_renderer(mock_renderer);
    assert_eq!(doc.render(), "<xml></xml>");

    let doc = Document::xml("xml");
    assert_eq!(doc.render(), "<xml></xml>");
}

#[test]
fn test_html_render_empty() {
    let doc = Document::html();
    assert_eq!(doc.render(), format!("{}\n<html></html>", doctype::HTML5));
    assert_eq!(doc.render(), "<!DOCTYPE html>\n<html></html>");
}

#[test]
fn test_xhtml_render_empty() {
    let doc = Document::xhtml();
    assert_eq!(doc.render(), format!("{}\n<html></html>", doctype::XHTML));
}

#[test]
fn test_named_doctype() {
    let doc = Document::with_doctype("html", "xhtml11").unwrap();
    assert_eq!(doc.render(), format!("{}\n<html></html>", doctype::XHTML11));
}

#[test]
fn test_fragment_without_nodes_renders_empty() {
    let doc = Document::fragment().with_indent("  ");
    assert_eq!(doc.render(), "");
}

#[test]
fn test_render_is_idempotent() {
    let mut doc = Document::html().with_indent("\t");
    let body = doc.create_element("body");
    doc.within(body, |doc| {
        doc.create_element(Element::new("p").content("one & two"));
        doc.create_text("tail");
    });

    let first = doc.render();
    let second = doc.render();
    assert_eq!(first, second);
}

#[test]
fn test_pretty_document_with_doctype() {
    let mut doc = Document::html().with_indent("..");
    doc.create_element(Element::new("body").content("hello world"));

    assert_eq!(
        doc.render(),
        "<!DOCTYPE html>\n\n<html>\n..<body>hello world</body>\n</html>"
    );
}

#[test]
fn test_options_switch_between_compact_and_pretty() {
    let mut doc = Document::xml("list").with_options(RenderOptions::new().pretty());
    doc.create_element("item");
    doc.create_element("item");
    assert_eq!(
        doc.render(),
        "\n<list>\n  <item></item>\n  <item></item>\n</list>"
    );

    doc.set_indent(None);
    assert_eq!(doc.render(), "<list><item></item><item></item></list>");
}

#[test]
fn test_root_attributes() {
    let mut doc = Document::html();
    let root = doc.root().unwrap();
    doc.element_mut(root).unwrap().attrs.set("lang", "en");

    assert_eq!(
        doc.render(),
        "<!DOCTYPE html>\n<html lang=\"en\"></html>"
    );
}
