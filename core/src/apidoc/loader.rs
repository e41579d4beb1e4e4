#![deny(missing_docs)]

//! # Description Loader
//!
//! apiDoc emits `api_data.js`, a script whose only statement registers the
//! description: `define({ "api": [ ... ] });`. The script is never evaluated.
//! The argument of the single `define(` call is located and parsed as JSON,
//! so the content cannot reach the filesystem, network or process.
//!
//! The plain JSON output (`api_data.json`) is accepted as well.

use crate::apidoc::models::{ApiDescription, EndpointEntry};
use crate::error::{AppError, AppResult};
use regex::Regex;
use serde_json::Value;
use std::path::Path;
use std::sync::OnceLock;

/// The shape of a description source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceFormat {
    /// `api_data.js`: a `define(...)` registration script.
    #[default]
    Script,
    /// `api_data.json`: `{ "api": [...] }` or a bare array of entries.
    Json,
}

impl SourceFormat {
    /// Picks the format from a file extension; anything but `.json` is a script.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Script,
        }
    }
}

/// Parses a description source of the given format.
pub fn parse_description(text: &str, format: SourceFormat) -> AppResult<ApiDescription> {
    match format {
        SourceFormat::Script => parse_description_source(text),
        SourceFormat::Json => parse_description_json(text),
    }
}

/// Extracts the description registered through `define(...)` in `api_data.js`.
///
/// # Errors
///
/// * `AppError::Configuration` when no registration call is present or the
///   registered object has no `api` sequence.
/// * `AppError::Json` when the registered argument is not valid JSON.
pub fn parse_description_source(text: &str) -> AppResult<ApiDescription> {
    static DEFINE_RE: OnceLock<Regex> = OnceLock::new();
    let define_re = DEFINE_RE.get_or_init(|| Regex::new(r"\bdefine\s*\(").expect("Invalid regex"));

    let call = define_re.find(text).ok_or_else(|| {
        AppError::Configuration("no define(...) registration call found in api_data.js".into())
    })?;

    // Stream a single value so the trailing `);` is left unread.
    let argument = serde_json::Deserializer::from_str(&text[call.end()..])
        .into_iter::<Value>()
        .next()
        .ok_or_else(|| {
            AppError::Configuration("define(...) was called without an argument".into())
        })??;

    description_from_value(argument)
}

/// Parses the plain JSON form: `{ "api": [...] }` or a bare array of entries.
pub fn parse_description_json(text: &str) -> AppResult<ApiDescription> {
    let value: Value = serde_json::from_str(text)?;
    match value {
        Value::Array(entries) => entries_from_values(entries),
        other => description_from_value(other),
    }
}

fn description_from_value(value: Value) -> AppResult<ApiDescription> {
    match value {
        Value::Object(mut map) => match map.remove("api") {
            Some(Value::Array(entries)) => entries_from_values(entries),
            _ => Err(missing_api()),
        },
        _ => Err(missing_api()),
    }
}

fn entries_from_values(entries: Vec<Value>) -> AppResult<ApiDescription> {
    let api = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<EndpointEntry>(entry).map_err(|e| {
                AppError::Configuration(format!("api[{}] is not a usable entry: {}", index, e))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    Ok(ApiDescription { api })
}

fn missing_api() -> AppError {
    AppError::Configuration("Cannot find api array in api_data.js".into())
}
