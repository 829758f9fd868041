//! Re-emission of elements the engine does not rebuild.
//!
//! Used for pass-through markup (plain HTML between components), the default
//! rule, and the centering rule, all of which keep the original tag shape.

use crate::dom::{Element, parse::is_void};

/// All attributes of an element as ` key="value"` pairs, document order.
///
/// Empty string when the element has none, so callers can interpolate the
/// result directly after a tag name.
pub fn attrs_string(element: &Element) -> String {
    let mut out = String::new();
    for (key, value) in element.attrs() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
    out
}

/// Re-emit an element around its already-resolved inner content.
pub fn element_with_inner(element: &Element, inner: &str) -> String {
    let name = &element.name;
    let attrs = attrs_string(element);
    if element.children.is_empty() && is_void(name) {
        format!("<{name}{attrs}>")
    } else {
        format!("<{name}{attrs}>{inner}</{name}>")
    }
}
