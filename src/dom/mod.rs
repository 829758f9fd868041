//! Element tree for template markup.
//!
//! A deliberately small DOM: lowercase tag names, attributes kept in document
//! order, children as an ordered sequence. Transformation rules only ever
//! borrow read access; the one exception is the centering rule, which edits
//! attributes and classes of its own descendants before re-serializing.

pub mod parse;
pub mod serialize;

/// One node of the parsed template.
///
/// Text nodes carry their source bytes verbatim - comments, entity
/// references and doctypes are folded into text so they round-trip
/// unchanged.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// Position of an element among the element children of its parent.
///
/// Filled in by the walker right before descending, so a rule that needs it
/// (column sizing) still depends only on its own input element.
#[derive(Debug, Clone, Copy)]
pub struct SiblingInfo {
    /// Number of element siblings, including this element.
    pub count: usize,
    /// No earlier sibling element uses the column tag.
    pub first: bool,
    /// No later sibling element uses the column tag.
    pub last: bool,
}

impl Default for SiblingInfo {
    fn default() -> Self {
        Self {
            count: 1,
            first: true,
            last: true,
        }
    }
}

/// A parsed element: tag identity, ordered attributes, ordered children.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Lowercased tag name.
    pub name: String,
    /// Attributes in document order. Keys are lowercased at parse time;
    /// values are kept verbatim (no entity expansion).
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
    /// Visited marker for the centering rule. Internal state only - it is
    /// never serialized.
    pub(crate) processed: bool,
    pub(crate) siblings: SiblingInfo,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Attribute value by (lowercase) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Replace an attribute value, or append the attribute if absent.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn push_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.push((name.into(), value.into()));
    }

    /// Attributes in document order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    /// Whether the `class` attribute contains `token`.
    pub fn has_class(&self, token: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|t| t == token))
    }

    /// Append a class token unless it is already present.
    ///
    /// Matches the append-if-absent semantics the centering mutation relies
    /// on; the class-list *builder* used by rules never deduplicates.
    pub fn add_class(&mut self, token: &str) {
        if self.has_class(token) {
            return;
        }
        match self.attrs.iter_mut().find(|(key, _)| key == "class") {
            Some((_, value)) => {
                if value.is_empty() {
                    value.push_str(token);
                } else {
                    value.push(' ');
                    value.push_str(token);
                }
            }
            None => self.attrs.push(("class".to_string(), token.to_string())),
        }
    }

    /// Element children, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// Whether any descendant element satisfies `pred`.
    pub fn descendant_matches(&self, pred: &dyn Fn(&Element) -> bool) -> bool {
        self.child_elements()
            .any(|child| pred(child) || child.descendant_matches(pred))
    }
}
