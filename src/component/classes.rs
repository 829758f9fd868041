//! Class list builder.
//!
//! Merges a rule's mandatory base classes with whatever the author put in
//! the element's `class` attribute. Base tokens come first, author tokens
//! follow in their original order. Nothing is deduplicated, renamed or
//! validated - `class="a a"` stays `a a`.

use crate::dom::Element;

/// Base tokens followed by the element's `class` value split on single
/// spaces, joined back with single spaces.
pub fn class_list(base: &[&str], element: &Element) -> String {
    let mut classes: Vec<&str> = base.to_vec();
    if let Some(value) = element.attr("class") {
        classes.extend(value.split(' '));
    }
    classes.join(" ")
}
