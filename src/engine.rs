//! The rendering engine: raw extraction, parse, post-order walk, re-inject.
//!
//! The walk is strictly post-order: an element's children are resolved to
//! final HTML text before its own rule runs, so every rule sees its inner
//! content as an opaque, finished string. One pass, single-threaded, no
//! state shared across sibling subtrees.

use tracing::{debug, trace};

use crate::component::{ComponentKind, Factory};
use crate::config::Options;
use crate::dom::{self, Element, Node, SiblingInfo, serialize};
use crate::error::Error;
use crate::raw;

/// The template engine. Cheap to construct; holds only configuration.
#[derive(Debug, Clone, Default)]
pub struct Trestle {
    options: Options,
}

impl Trestle {
    /// Engine with stock options: 12-column grid, verbatim attribute
    /// interpolation, default tag names.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Render a template into table-based HTML.
    ///
    /// Best-effort on malformed input: the output mirrors whatever tree the
    /// lenient parser produced. No validation, no sanitization.
    pub fn render(&self, input: &str) -> Result<String, Error> {
        let (stripped, raws) = raw::extract(input);
        if !raws.is_empty() {
            debug!(blocks = raws.len(), "extracted raw blocks");
        }

        let mut nodes = dom::parse::parse_fragment(&stripped)?;
        self.annotate(&mut nodes);

        let factory = Factory {
            options: &self.options,
        };
        let mut output = String::with_capacity(input.len() * 2);
        for node in &mut nodes {
            output.push_str(&self.render_node(&factory, node));
        }

        Ok(raw::restore(&output, &raws))
    }

    fn render_node(&self, factory: &Factory<'_>, node: &mut Node) -> String {
        match node {
            Node::Text(text) => text.clone(),
            Node::Element(element) => self.render_element(factory, element),
        }
    }

    fn render_element(&self, factory: &Factory<'_>, element: &mut Element) -> String {
        let kind = self.options.components.kind_of(&element.name);

        // The centering mutation runs before the descent so the transformed
        // children observe their new alignment attributes and classes.
        if kind == Some(ComponentKind::Center) {
            crate::component::center::apply(element, &self.options.components);
        }

        self.annotate(&mut element.children);

        let mut inner = String::new();
        for child in element.children.iter_mut() {
            inner.push_str(&self.render_node(factory, child));
        }

        match kind {
            Some(kind) => {
                trace!(tag = %element.name, ?kind, "transforming component");
                factory.transform(kind, element, &inner)
            }
            // Plain markup between components is re-emitted as-is.
            None => serialize::element_with_inner(element, &inner),
        }
    }

    /// Fill in sibling positions for the element children of one parent.
    /// Column sizing reads these, which keeps the column rule a function of
    /// its own element alone.
    fn annotate(&self, children: &mut [Node]) {
        let names: Vec<String> = children
            .iter()
            .filter_map(|node| match node {
                Node::Element(el) => Some(el.name.clone()),
                Node::Text(_) => None,
            })
            .collect();
        let count = names.len();
        let column_tag = &self.options.components.columns;

        let mut position = 0;
        for node in children.iter_mut() {
            let Node::Element(element) = node else {
                continue;
            };
            element.siblings = SiblingInfo {
                count,
                first: !names[..position].iter().any(|name| name == column_tag),
                last: !names[position + 1..].iter().any(|name| name == column_tag),
            };
            position += 1;
        }
    }
}
