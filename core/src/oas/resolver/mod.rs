#![deny(missing_docs)]

//! # Resolver Module
//!
//! Logic for resolving apiDoc field groups into OpenAPI operation parts.
//!
//! Handles:
//! - Placement of declared parameters into path, query, header or request body.
//! - Assembly of the JSON request body schema.
//! - Synthesis of per-status responses from field groups and example blocks.

pub mod body;
pub mod params;
pub mod responses;

pub use body::RequestBodyBuilder;
pub use params::{classify_parameters, ClassifiedParameters};
pub use responses::synthesize_responses;
