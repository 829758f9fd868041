//! Tag-identity table.
//!
//! Maps markup tag names to the fixed set of component kinds. The kinds are
//! closed; the tag *names* are configurable so a host can rename a component
//! (say, `<item>` to `<menu-link>`) without touching the engine.

use serde::{Deserialize, Serialize};

use crate::component::ComponentKind;

/// Recognized tag names, one per component kind.
///
/// Tags listed in `custom` are recognized by the walker but carry no
/// dedicated rule; they fall through to the default rule, which wraps the
/// re-serialized element in a single row/cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Components {
    pub button: String,
    pub row: String,
    pub columns: String,
    pub container: String,
    pub logo: String,
    pub block_grid: String,
    pub menu: String,
    pub menu_item: String,
    pub center: String,
    pub callout: String,
    pub spacer: String,
    pub wrapper: String,
    pub h_line: String,
    pub accordion: String,
    pub accordion_item: String,
    pub accordion_header: String,
    pub accordion_content: String,
    pub custom: Vec<String>,
}

impl Default for Components {
    fn default() -> Self {
        Self {
            button: "button".into(),
            row: "row".into(),
            columns: "columns".into(),
            container: "container".into(),
            logo: "logo".into(),
            block_grid: "block-grid".into(),
            menu: "menu".into(),
            menu_item: "item".into(),
            center: "center".into(),
            callout: "callout".into(),
            spacer: "spacer".into(),
            wrapper: "wrapper".into(),
            h_line: "h-line".into(),
            accordion: "accordion".into(),
            accordion_item: "accordion-item".into(),
            accordion_header: "accordion-item-header".into(),
            accordion_content: "accordion-item-content".into(),
            custom: Vec::new(),
        }
    }
}

impl Components {
    /// Component kind for a tag, or `None` for plain markup the walker
    /// passes through untouched.
    pub fn kind_of(&self, tag: &str) -> Option<ComponentKind> {
        use ComponentKind::*;

        let kind = match tag {
            t if t == self.button => Button,
            t if t == self.row => Row,
            t if t == self.columns => Columns,
            t if t == self.container => Container,
            t if t == self.logo => Logo,
            t if t == self.block_grid => BlockGrid,
            t if t == self.menu => Menu,
            t if t == self.menu_item => MenuItem,
            t if t == self.center => Center,
            t if t == self.callout => Callout,
            t if t == self.spacer => Spacer,
            t if t == self.wrapper => Wrapper,
            t if t == self.h_line => HLine,
            t if t == self.accordion => Accordion,
            t if t == self.accordion_item => AccordionItem,
            t if t == self.accordion_header => AccordionHeader,
            t if t == self.accordion_content => AccordionContent,
            t if self.custom.iter().any(|c| c == t) => Custom,
            _ => return None,
        };
        Some(kind)
    }
}
