#![deny(missing_docs)]

//! # Text Sanitizing
//!
//! apiDoc renders descriptions to HTML. OpenAPI descriptions here are plain
//! text, so markup is stripped and whitespace is collapsed.

use regex::Regex;
use std::sync::OnceLock;

/// Strips markup tags, decodes `&quot;` / `&amp;`, collapses whitespace and trims.
///
/// Every `<...>` span is treated as a tag and replaced by a space before
/// whitespace is collapsed. `None` yields an empty string.
pub fn strip_html(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    let tag_re = TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("Invalid regex"));

    let without_tags = tag_re.replace_all(text, " ");
    let decoded = without_tags.replace("&quot;", "\"").replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts the first standalone three digit number from a group label.
///
/// `"Success 200"` -> `200`, `"Error 4xx"` -> fallback.
pub fn extract_status_code(label: Option<&str>, fallback: &str) -> String {
    static STATUS_RE: OnceLock<Regex> = OnceLock::new();
    let status_re = STATUS_RE
        .get_or_init(|| Regex::new(r"(?-u:\b)([0-9]{3})(?-u:\b)").expect("Invalid regex"));

    label
        .and_then(|l| status_re.captures(l))
        .map(|caps| caps[1].to_string())
        .unwrap_or_else(|| fallback.to_string())
}
