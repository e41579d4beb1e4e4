#![deny(missing_docs)]

//! # apiDoc -> OpenAPI Core
//!
//! Conversion engine turning an apiDoc description (`api_data.js`) into an
//! OpenAPI 3.0.3 document.
//!
//! ```
//! use apidoc_oas_core::{convert_source, ConvertOptions};
//!
//! let source = r#"define({ "api": [ { "type": "get", "url": "/users/:id", "name": "GetUser" } ] });"#;
//! let json = convert_source(source, &ConvertOptions::default()).unwrap();
//! assert!(json.contains("\"/users/{id}\""));
//! ```

/// Shared error types.
pub mod error;

/// apiDoc input: models, loader, example parsing.
pub mod apidoc;

/// Type mapping logic (apiDoc annotation -> schema node).
pub mod type_mapping;

/// Markup stripping and label helpers.
pub mod sanitize;

/// OpenAPI output: models and assembly.
pub mod oas;

pub use apidoc::{
    parse_description, parse_description_json, parse_description_source, ApiDescription,
    EndpointEntry, SourceFormat,
};
pub use error::{AppError, AppResult};
pub use oas::{
    build_document, convert, convert_source, convert_source_as, ConvertOptions, DocumentAssembler,
    InfoOverrides, OpenApiDocument,
};
pub use type_mapping::{map_type, ApiDocTypeMapper, TypeMapper};
