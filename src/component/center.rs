//! Centering rule.
//!
//! The one rule with cross-node effects. Before the walker descends into an
//! unprocessed centering element, [`apply`] edits the subtree in two phases:
//! a pure scan that collects path-addressed edits, then an apply pass.
//!
//! - every *direct* child element gets `align="center"` and a
//!   `float-center` class token;
//! - every descendant at any depth that is a menu item (by tag or by
//!   `menu-item` class) gets `float-center`.
//!
//! Legacy `align` attribute plus CSS class together cover the widest range
//! of email clients. The element is then flagged as processed so a revisit
//! cannot mutate the subtree twice; the flag is walker-internal state and
//! never shows up in output.
//!
//! Unlike every other rule, [`render`] re-emits the element's own tag and
//! attributes instead of building a table.

use crate::config::Components;
use crate::dom::{Element, Node, serialize};

/// One pending mutation, addressed by child-index path from the centering
/// element.
#[derive(Debug, PartialEq, Eq)]
struct Edit {
    path: Vec<usize>,
    set_align: bool,
}

/// Mutate an unprocessed centering element's subtree and mark it processed.
///
/// An element with no children mutates nothing but is still marked.
pub(crate) fn apply(element: &mut Element, components: &Components) {
    if element.processed {
        return;
    }
    for edit in collect_edits(element, components) {
        apply_edit(element, &edit);
    }
    element.processed = true;
}

/// Emit the original element shape around the resolved inner content.
pub(crate) fn render(element: &Element, inner: &str) -> String {
    serialize::element_with_inner(element, inner)
}

/// Pure scan phase: no mutation, just a list of edits to perform.
fn collect_edits(element: &Element, components: &Components) -> Vec<Edit> {
    let mut edits = Vec::new();

    for (index, node) in element.children.iter().enumerate() {
        if let Node::Element(_) = node {
            edits.push(Edit {
                path: vec![index],
                set_align: true,
            });
        }
    }

    let mut path = Vec::new();
    collect_menu_items(&element.children, &mut path, components, &mut edits);
    edits
}

/// Deep search for menu items, independent of the direct-child pass.
fn collect_menu_items(
    children: &[Node],
    path: &mut Vec<usize>,
    components: &Components,
    edits: &mut Vec<Edit>,
) {
    for (index, node) in children.iter().enumerate() {
        let Node::Element(el) = node else { continue };
        path.push(index);
        if el.name == components.menu_item || el.has_class("menu-item") {
            edits.push(Edit {
                path: path.clone(),
                set_align: false,
            });
        }
        collect_menu_items(&el.children, path, components, edits);
        path.pop();
    }
}

fn apply_edit(element: &mut Element, edit: &Edit) {
    let mut current = element;
    for &index in &edit.path {
        let Some(Node::Element(child)) = current.children.get_mut(index) else {
            return;
        };
        current = child;
    }
    if edit.set_align {
        current.set_attr("align", "center");
    }
    current.add_class("float-center");
}
