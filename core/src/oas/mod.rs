#![deny(missing_docs)]

//! # OpenAPI Output Module
//!
//! - **models**: The emitted OpenAPI 3.0 tree.
//! - **options**: Caller overrides for the `info` block.
//! - **resolver**: Field groups -> parameters, request body and responses.
//! - **routes**: Path normalization, operation IDs, per-entry operations.
//! - **document**: Orchestration over all entries.

pub mod document;
pub mod models;
pub mod options;
pub mod resolver;
pub mod routes;

pub use document::{
    build_document, convert, convert_source, convert_source_as, resolve_version,
    DocumentAssembler, DEFAULT_API_VERSION, OPENAPI_VERSION,
};
pub use models::{
    Components, Info, MediaType, OpenApiDocument, Operation, Parameter, ParameterLocation,
    PathItem, RequestBody, Response, Schema, SchemaType,
};
pub use options::{ConvertOptions, InfoOverrides};
