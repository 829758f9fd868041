//! Rule dispatch and the structural rules.
//!
//! One match arm per component kind. Most rules are a single nested-table
//! idiom; the branchier ones (button, column, spacer, center) live in their
//! own modules. Output is assembled by interpolation only - the engine never
//! validates or reshapes what a rule emits.

use crate::component::{ComponentKind, attrs, center, classes::class_list, column, spacer};
use crate::config::Options;
use crate::dom::{Element, serialize};

/// Conditional-comment sentinels hiding checkbox/icon markup from Outlook
/// and IE. Literal strings, not configurable.
pub const GUARD_OPEN: &str = "<!--[if !mso | IE]><!-->";
pub const GUARD_CLOSE: &str = "<!--<![endif]-->";

/// Fixed decorative logo markup; ignores all attributes and children.
const LOGO: &str = r#"<tr><td><img src="logo.png" alt=""></td></tr>"#;

/// Applies transformation rules. Borrowed by the walker for one pass.
pub struct Factory<'a> {
    pub options: &'a Options,
}

impl Factory<'_> {
    /// Transform one element whose children are already resolved into
    /// `inner`. Total: every kind yields output for any input shape.
    pub fn transform(&self, kind: ComponentKind, element: &Element, inner: &str) -> String {
        use ComponentKind::*;

        match kind {
            HLine => format!(
                r#"<table class="{}"><tr><th>&nbsp;</th></tr></table>"#,
                class_list(&["h-line"], element)
            ),
            Row => format!(
                r#"<table{}{}><tbody><tr>{inner}</tr></tbody></table>"#,
                self.forwarded(element),
                self.class_attr(&["row"], element),
            ),
            Columns => column::make_column(self, element, inner, "columns"),
            Button => self.button(element, inner),
            Container => format!(
                r#"<table{} align="center"{}><tbody><tr><td>{inner}</td></tr></tbody></table>"#,
                self.forwarded(element),
                self.class_attr(&["container"], element),
            ),
            Logo => LOGO.to_string(),
            BlockGrid => {
                let up = element.attr("up").unwrap_or_default();
                format!(
                    r#"<table class="{}"><tbody><tr>{inner}</tr></tbody></table>"#,
                    class_list(&["block-grid", &format!("up-{up}")], element)
                )
            }
            Menu => format!(
                r#"<table{}{}><tbody><tr><td><table><tbody><tr>{inner}</tr></tbody></table></td></tr></tbody></table>"#,
                self.forwarded(element),
                self.class_attr(&["menu"], element),
            ),
            MenuItem => format!(
                r#"<th{}{}><a href="{}"{}>{inner}</a></th>"#,
                self.forwarded(element),
                self.class_attr(&["menu-item"], element),
                self.value(element, "href"),
                self.target(element),
            ),
            Center => center::render(element, inner),
            Callout => format!(
                r#"<table{} class="callout"><tbody><tr><th{}>{inner}</th><th class="expander"></th></tr></tbody></table>"#,
                self.forwarded(element),
                self.class_attr(&["callout-inner"], element),
            ),
            Spacer => spacer::spacer(self, element),
            Wrapper => format!(
                r#"<table{}{} align="center"><tbody><tr><td class="wrapper-inner">{inner}</td></tr></tbody></table>"#,
                self.forwarded(element),
                self.class_attr(&["wrapper"], element),
            ),
            Accordion => format!(
                r#"<table{}{}><tr><td class="accordion-inner"><table>{inner}</table></td></tr></table>"#,
                self.forwarded(element),
                self.class_attr(&["accordion"], element),
            ),
            AccordionItem => format!(
                r#"<tr><td><label{}>{GUARD_OPEN}<input type="checkbox" class="accordion-checkbox" style="display: none;">{GUARD_CLOSE}<div>{inner}</div></label></td></tr>"#,
                self.class_attr(&["accordion-element"], element),
            ),
            AccordionHeader => self.accordion_header(element, inner),
            AccordionContent => format!(
                r#"<div{}><table><tr><td>{inner}</td></tr></table></div>"#,
                self.class_attr(&["accordion-content"], element),
            ),
            // Recognized tag with no dedicated rule: one row/cell wrapping
            // the element re-emitted as-is.
            Custom => format!(
                "<tr><td>{}</td></tr>",
                serialize::element_with_inner(element, inner)
            ),
        }
    }

    /// Anchor-wrapped, optionally expanded button.
    fn button(&self, element: &Element, inner: &str) -> String {
        let expanded = element.has_class("expand") || element.has_class("expanded");

        let mut inner = inner.to_string();
        if let Some(href) = element.attr("href") {
            let centering = if expanded {
                // The centering block below would mark its anchor child this
                // way; flattened here since the anchor is built inline.
                r#" align="center" class="float-center""#
            } else {
                ""
            };
            inner = format!(
                r#"<a{} href="{}"{}{centering}>{inner}</a>"#,
                self.forwarded(element),
                attrs::escaped(href, self.options.escape_attributes),
                self.target(element),
            );
        }

        let expander = if expanded {
            inner = format!("<center>{inner}</center>");
            r#"<td class="expander"></td>"#
        } else {
            ""
        };

        format!(
            r#"<table{}><tbody><tr><td><table><tbody><tr><td>{inner}</td></tr></tbody></table></td>{expander}</tr></tbody></table>"#,
            self.class_attr(&["button"], element),
        )
    }

    /// Title cell plus a guarded icon cell with expand/collapse images.
    fn accordion_header(&self, element: &Element, inner: &str) -> String {
        let more_src = self.value(element, "iconmoresrc");
        let more_alt = self.value_or(element, "iconmorealt", "+");
        let less_src = self.value(element, "iconlesssrc");
        let less_alt = self.value_or(element, "iconlessalt", "-");

        format!(
            r#"<div{}><table><tr><td class="accordion-header" valign="middle">{inner}</td>{GUARD_OPEN}<td class="accordion-ico" valign="middle"><img class="accordion-more" src="{more_src}" alt="{more_alt}"><img class="accordion-less" src="{less_src}" alt="{less_alt}"></td>{GUARD_CLOSE}</tr></table></div>"#,
            self.class_attr(&["accordion-title"], element),
        )
    }

    /// ` class="..."` with base classes merged with the author's.
    pub(crate) fn class_attr(&self, base: &[&str], element: &Element) -> String {
        format!(r#" class="{}""#, class_list(base, element))
    }

    /// Forwarded attributes, honoring the strict-escaping option.
    pub(crate) fn forwarded(&self, element: &Element) -> String {
        attrs::forward(element, self.options.escape_attributes)
    }

    /// Attribute value for interpolation; absent attributes degrade to "".
    pub(crate) fn value(&self, element: &Element, name: &str) -> String {
        self.value_or(element, name, "")
    }

    fn value_or(&self, element: &Element, name: &str, default: &str) -> String {
        let value = element.attr(name).unwrap_or(default);
        attrs::escaped(value, self.options.escape_attributes).into_owned()
    }

    /// ` target="..."` when present, empty otherwise.
    pub(crate) fn target(&self, element: &Element) -> String {
        match element.attr("target") {
            Some(target) => format!(
                r#" target="{}""#,
                attrs::escaped(target, self.options.escape_attributes)
            ),
            None => String::new(),
        }
    }
}
