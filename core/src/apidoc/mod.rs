#![deny(missing_docs)]

//! # apiDoc Input Module
//!
//! - **models**: The realized description structure (`{ api: [...] }`).
//! - **loader**: Extraction of that structure from `api_data.js` / `api_data.json`.
//! - **examples**: Parsing of free-text example blocks.

pub mod examples;
pub mod loader;
pub mod models;

pub use examples::{parse_example, ParsedExample};
pub use loader::{parse_description, parse_description_json, parse_description_source, SourceFormat};
pub use models::{ApiDescription, EndpointEntry, ExampleBlock, FieldDeclaration, FieldSection};
