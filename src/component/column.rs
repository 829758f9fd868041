//! Shared column-building routine.
//!
//! Width classes come from the `small`/`large` attributes; a column with
//! neither spans the full grid on small screens and an even share of the
//! grid on large ones. `first`/`last` mark the edges of a row so gutter
//! styles can target them. Parameterized by the column class token so
//! column variants share one routine.

use crate::component::{Factory, classes::class_list};
use crate::config::Options;
use crate::dom::Element;

pub(crate) fn make_column(
    factory: &Factory<'_>,
    element: &Element,
    inner: &str,
    kind: &str,
) -> String {
    let options = factory.options;
    let grid = options.column_count;
    let siblings = element.siblings;

    let small = match element.attr("small") {
        Some(small) => small.to_string(),
        None => grid.to_string(),
    };
    let large = element
        .attr("large")
        .or_else(|| element.attr("small"))
        .map(str::to_string)
        .unwrap_or_else(|| (grid / siblings.count.max(1)).to_string());

    let mut base = vec![format!("small-{small}"), format!("large-{large}"), kind.to_string()];
    if siblings.first {
        base.push("first".to_string());
    }
    if siblings.last {
        base.push("last".to_string());
    }
    let base: Vec<&str> = base.iter().map(String::as_str).collect();

    let expander = if wants_expander(element, &large, options) {
        r#"<th class="expander"></th>"#
    } else {
        ""
    };

    format!(
        r#"<th class="{}"{}><table><tr><th>{inner}</th>{expander}</tr></table></th>"#,
        class_list(&base, element),
        factory.forwarded(element),
    )
}

/// A full-grid column gets an empty expander cell so nested content fills
/// the column width - unless it already contains a row, or the author
/// opted out with `no-expander`.
fn wants_expander(element: &Element, large: &str, options: &Options) -> bool {
    if large.parse::<usize>().ok() != Some(options.column_count) {
        return false;
    }
    match element.attr("no-expander") {
        None => {}
        Some("false") => {}
        Some(_) => return false,
    }
    let row_tag = options.components.row.as_str();
    !element.descendant_matches(&|el| el.name == row_tag || el.has_class("row"))
}
