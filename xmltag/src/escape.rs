//! Character escaping for text embedded in markup.

use std::borrow::Cow;

/// Escape `&`, `<` and `>` in text content.
///
/// Quote characters are left untouched; text content never needs them escaped.
/// Returns the input unchanged (borrowed) when there is nothing to escape.
pub fn escape(text: &str) -> Cow<'_, str> {
    escape_with(text, false)
}

/// Escape an attribute value: `&`, `<`, `>` and `"`.
pub fn escape_attribute(value: &str) -> Cow<'_, str> {
    escape_with(value, true)
}

/// Escape `text` unless it was marked safe by the caller.
pub fn escape_unless(text: &str, safe: bool) -> Cow<'_, str> {
    if safe { Cow::Borrowed(text) } else { escape(text) }
}

fn escape_with(text: &str, quotes: bool) -> Cow<'_, str> {
    let needs_escape = |c: char| matches!(c, '&' | '<' | '>') || (quotes && c == '"');

    let Some(first) = text.find(needs_escape) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len() + 8);
    out.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if quotes => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
