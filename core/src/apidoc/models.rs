#![deny(missing_docs)]

//! # apiDoc Models
//!
//! Deserialization targets for the entries apiDoc writes into `api_data.js`.
//! Only the attributes the converter reads are modelled; everything else in an
//! entry is ignored. Every attribute is optional.

use indexmap::IndexMap;
use serde::Deserialize;

/// The realized description: an ordered sequence of endpoint entries.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiDescription {
    /// Endpoint entries in declaration order.
    pub api: Vec<EndpointEntry>,
}

/// One declared API operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EndpointEntry {
    /// HTTP method (any case). Defaults to `get` when absent.
    #[serde(rename = "type")]
    pub method: Option<String>,
    /// URL template with `:param` placeholders.
    pub url: Option<String>,
    /// Group label, emitted as the operation tag.
    pub group: Option<String>,
    /// Human title.
    pub title: Option<String>,
    /// Machine name, base of the operation ID.
    pub name: Option<String>,
    /// HTML description.
    pub description: Option<String>,
    /// Semantic version string.
    pub version: Option<String>,
    /// Request parameters.
    pub parameter: Option<FieldSection>,
    /// Request headers.
    pub header: Option<FieldSection>,
    /// Success responses.
    pub success: Option<FieldSection>,
    /// Error responses.
    pub error: Option<FieldSection>,
}

impl EndpointEntry {
    /// Lower-cased HTTP method.
    pub fn method(&self) -> String {
        self.method
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or("get")
            .to_lowercase()
    }

    /// Raw URL template.
    pub fn url(&self) -> &str {
        self.url
            .as_deref()
            .filter(|u| !u.is_empty())
            .unwrap_or("/unknown")
    }

    /// Title, else name, if any is non-empty.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.title.as_deref()).or_else(|| non_empty(self.name.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// A field-group collection: labelled groups of fields plus example blocks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldSection {
    /// Group label (`"Parameter"`, `"Success 200"`, `"Error 4xx"`) to its fields.
    pub fields: IndexMap<String, Vec<FieldDeclaration>>,
    /// Free-text examples.
    pub examples: Vec<ExampleBlock>,
}

/// A named, typed field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldDeclaration {
    /// Field name.
    pub field: String,
    /// Type annotation, e.g. `String[]` or `Number|null`.
    #[serde(rename = "type")]
    pub type_annotation: Option<String>,
    /// Declared optional.
    pub optional: bool,
    /// HTML description.
    pub description: Option<String>,
}

/// A free-text example, usually an HTTP status line followed by a body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExampleBlock {
    /// Example title, may carry a status code.
    pub title: Option<String>,
    /// Raw example text.
    pub content: Option<String>,
    /// Syntax hint (`json`, ...); not used for conversion.
    #[serde(rename = "type")]
    pub syntax: Option<String>,
}
