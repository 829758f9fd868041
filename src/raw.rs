//! Escape hatch for opaque content.
//!
//! `<raw>` blocks bypass the whole pipeline: their contents - which may be
//! template placeholders or anything else that is not HTML - must reach the
//! output byte-for-byte, with the wrapping tag removed. Blocks are swapped
//! for indexed placeholders *before* parsing so the parser never sees them,
//! and swapped back after rendering.

use std::sync::LazyLock;

use regex::Regex;

static RAW_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<\s*raw\s*>(.*?)<\s*/\s*raw\s*>").expect("raw block pattern")
});

fn placeholder(index: usize) -> String {
    format!("###RAW{index}###")
}

/// Replace every raw block with a placeholder, returning the rewritten
/// input and the extracted contents in order.
pub fn extract(input: &str) -> (String, Vec<String>) {
    let mut raws = Vec::new();
    let out = RAW_BLOCK
        .replace_all(input, |captures: &regex::Captures<'_>| {
            raws.push(captures[1].to_string());
            placeholder(raws.len() - 1)
        })
        .into_owned();
    (out, raws)
}

/// Swap each placeholder back for its original content, once each.
pub fn restore(output: &str, raws: &[String]) -> String {
    let mut out = output.to_string();
    for (index, content) in raws.iter().enumerate() {
        out = out.replacen(&placeholder(index), content, 1);
    }
    out
}
