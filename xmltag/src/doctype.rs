//! Document-type preambles.
//!
//! A static table from document-type name to the literal declaration placed on
//! the first line of a rendered document. Plain XML documents have no entry.

pub const HTML5: &str = "<!DOCTYPE html>";

pub const HTML4: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;

pub const HTML4_TRANSITIONAL: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#;

pub const HTML4_FRAMESET: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#;

/// XHTML 1.0 Strict.
pub const XHTML: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#;

pub const XHTML_TRANSITIONAL: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

pub const XHTML_FRAMESET: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#;

pub const XHTML11: &str =
    r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#;

/// All known document types, by name.
pub const DOCTYPES: &[(&str, &str)] = &[
    ("html5", HTML5),
    ("html4", HTML4),
    ("html4-transitional", HTML4_TRANSITIONAL),
    ("html4-frameset", HTML4_FRAMESET),
    ("xhtml", XHTML),
    ("xhtml-transitional", XHTML_TRANSITIONAL),
    ("xhtml-frameset", XHTML_FRAMESET),
    ("xhtml11", XHTML11),
];

/// Look up the preamble for a document-type name.
pub fn lookup(name: &str) -> Option<&'static str> {
    DOCTYPES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, preamble)| *preamble)
}
