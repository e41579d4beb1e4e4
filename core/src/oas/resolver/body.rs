#![deny(missing_docs)]

//! # Request Body Resolution
//!
//! Collects body-placed parameters into a single JSON object schema.

use crate::oas::models::{MediaType, RequestBody, Schema, JSON_MEDIA_TYPE};
use indexmap::IndexMap;

/// Accumulates request body properties in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestBodyBuilder {
    properties: IndexMap<String, Schema>,
    required: Vec<String>,
}

impl RequestBodyBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a property. Required names are listed once.
    pub fn add_property(&mut self, name: &str, schema: Schema, required: bool) {
        self.properties.insert(name.to_string(), schema);
        if required && !self.required.iter().any(|r| r == name) {
            self.required.push(name.to_string());
        }
    }

    /// True when no property was added.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Builds the request body, or `None` when there are no properties.
    pub fn build(self) -> Option<RequestBody> {
        if self.is_empty() {
            return None;
        }

        let required = !self.required.is_empty();
        let mut content = IndexMap::new();
        content.insert(
            JSON_MEDIA_TYPE.to_string(),
            MediaType {
                schema: Some(Schema::object(self.properties, self.required)),
                example: None,
            },
        );

        Some(RequestBody { required, content })
    }
}
