//! Spacer rule: fixed-height tables for vertical rhythm.
//!
//! Sizing is responsive: `size` alone (or nothing, defaulting to 16) emits
//! one table; `size-sm`/`size-lg` emit small- and large-screen variants
//! tagged `hide-for-large`/`show-for-large`, both when both are present.
//! Values are interpolated as raw text - no bounds checks, no units.

use crate::component::Factory;
use crate::dom::Element;

const DEFAULT_SIZE: &str = "16";

pub(crate) fn spacer(factory: &Factory<'_>, element: &Element) -> String {
    let small = element.attr("size-sm");
    let large = element.attr("size-lg");

    let mut html = String::new();
    if small.is_some() || large.is_some() {
        if let Some(size) = small {
            html.push_str(&spacer_table(factory, element, Some("hide-for-large"), size));
        }
        if let Some(size) = large {
            html.push_str(&spacer_table(factory, element, Some("show-for-large"), size));
        }
    } else {
        let size = element.attr("size").unwrap_or(DEFAULT_SIZE);
        html.push_str(&spacer_table(factory, element, None, size));
    }
    html
}

fn spacer_table(
    factory: &Factory<'_>,
    element: &Element,
    modifier: Option<&str>,
    size: &str,
) -> String {
    let mut base = vec!["spacer"];
    base.extend(modifier);
    format!(
        r#"<table{}{}><tbody><tr><td height="{size}" style="font-size:{size}px;line-height:{size}px;">&nbsp;</td></tr></tbody></table>"#,
        factory.forwarded(element),
        factory.class_attr(&base, element),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Options;

    fn render(element: &Element) -> String {
        let options = Options::default();
        spacer(&Factory { options: &options }, element)
    }

    #[test]
    fn test_defaults_to_sixteen() {
        let el = Element::new("spacer");
        assert_eq!(
            render(&el),
            r#"<table class="spacer"><tbody><tr><td height="16" style="font-size:16px;line-height:16px;">&nbsp;</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn test_explicit_size() {
        let mut el = Element::new("spacer");
        el.push_attr("size", "10");
        let out = render(&el);
        assert!(out.contains(r#"height="10" style="font-size:10px;line-height:10px;""#));
    }

    #[test]
    fn test_small_only() {
        let mut el = Element::new("spacer");
        el.push_attr("size-sm", "10");
        let out = render(&el);
        assert!(out.starts_with(r#"<table class="spacer hide-for-large">"#));
        assert!(!out.contains("show-for-large"));
    }

    #[test]
    fn test_both_sizes_emit_two_tables_in_order() {
        let mut el = Element::new("spacer");
        el.push_attr("size-sm", "10");
        el.push_attr("size-lg", "20");
        let out = render(&el);

        let hide = out.find("hide-for-large").unwrap();
        let show = out.find("show-for-large").unwrap();
        assert!(hide < show);
        assert_eq!(out.matches("<table").count(), 2);
        assert!(out.contains(r#"height="10""#));
        assert!(out.contains(r#"height="20""#));
    }

    #[test]
    fn test_author_classes_follow_responsive_modifier() {
        let mut el = Element::new("spacer");
        el.push_attr("size-lg", "20");
        el.push_attr("class", "bgcolor");
        let out = render(&el);
        assert!(out.starts_with(r#"<table class="spacer show-for-large bgcolor">"#));
    }

    #[test]
    fn test_size_not_validated() {
        let mut el = Element::new("spacer");
        el.push_attr("size", "huge");
        let out = render(&el);
        assert!(out.contains(r#"height="huge""#));
    }
}
