#![deny(missing_docs)]

//! # Routes Module
//!
//! Per-endpoint assembly: path normalization, operation IDs and the operation
//! object itself.

pub mod builder;
pub mod naming;

pub use builder::build_operation;
pub use naming::{normalize_path, sanitize_operation_id, OperationIdGenerator};
