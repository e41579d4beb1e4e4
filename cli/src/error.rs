#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use apidoc_oas_core::AppError;
use derive_more::{Display, From};
use std::path::PathBuf;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Conversion or loading failure from the core crate.
    #[display("{}", _0)]
    Core(AppError),

    /// Reading or writing a file failed.
    #[from(ignore)]
    #[display("Failed to {action} {}: {source}", path.display())]
    File {
        /// What was attempted (`read`, `write`, ...).
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

impl CliError {
    /// Wraps an IO error with the action and path it concerned.
    pub fn file(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::File {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `General(String)`
/// variant contains a `String`, which does not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
