#![deny(missing_docs)]

//! # Example Parsing
//!
//! apiDoc examples are free text such as:
//!
//! ```text
//! HTTP/1.1 200 OK
//! {
//!   "id": 1
//! }
//! ```
//!
//! The status line yields a status code and the rest becomes the example body,
//! structured when it parses as JSON, raw text otherwise.

use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// The result of parsing one example block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedExample {
    /// Status code from an `HTTP/1.1 NNN` line, if any.
    pub status: Option<String>,
    /// Example body; `None` when empty or a JSON `null`.
    pub body: Option<Value>,
}

/// Parses an example block. Never fails: unparsable bodies are kept as text.
pub fn parse_example(content: &str) -> ParsedExample {
    if content.is_empty() {
        return ParsedExample::default();
    }

    static STATUS_RE: OnceLock<Regex> = OnceLock::new();
    let status_re = STATUS_RE
        .get_or_init(|| Regex::new(r"(?i)HTTP/1\.1\s+([0-9]{3})").expect("Invalid regex"));

    let status = status_re.captures(content).map(|caps| caps[1].to_string());

    let mut lines: Vec<&str> = content.split('\n').collect();
    let starts_with_status = lines
        .first()
        .is_some_and(|first| first.to_ascii_uppercase().starts_with("HTTP/1.1"));
    if status.is_some() && starts_with_status {
        lines.remove(0);
    }

    let body_text = lines.join("\n");
    let body_text = body_text.trim();
    if body_text.is_empty() {
        return ParsedExample { status, body: None };
    }

    let clean = body_text.replace('\t', "  ");
    let body = match serde_json::from_str::<Value>(&clean) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(clean)),
    };

    ParsedExample { status, body }
}
