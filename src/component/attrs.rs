//! Attribute forwarding.
//!
//! Rules copy most author attributes verbatim onto the tag they generate.
//! The exceptions are attributes a rule consumes for its own semantics
//! (class merging, anchors, sizing); those never appear twice.

use std::borrow::Cow;

use crate::dom::Element;

/// Attributes consumed by rules and therefore never forwarded.
const CONSUMED: &[&str] = &[
    "class",
    "id",
    "href",
    "target",
    "size",
    "size-sm",
    "size-lg",
    "small",
    "large",
    "no-expander",
];

/// Forwardable attributes as ` key="value"` pairs in document order.
///
/// Returns an empty string when nothing is forwarded, so the result can be
/// interpolated directly after a tag name.
pub fn forward(element: &Element, escape: bool) -> String {
    let mut out = String::new();
    for (key, value) in element.attrs() {
        if CONSUMED.contains(&key.as_str()) {
            continue;
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escaped(value, escape));
        out.push('"');
    }
    out
}

/// Entity-escape a value when strict mode is on; verbatim otherwise.
pub fn escaped(value: &str, escape: bool) -> Cow<'_, str> {
    if !escape || !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
