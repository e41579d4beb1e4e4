//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Only `Configuration` is raised by the conversion itself; everything else
/// comes from reading or (de)serializing data around it.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The description source (or an overrides file) is not valid JSON.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// YAML serialization or overrides parsing failed.
    #[display("YAML Error: {_0}")]
    Yaml(serde_yaml::Error),

    /// The input is structurally unusable: no registration call, or no `api` sequence.
    /// We ignore this for `From<String>` to avoid conflict with General.
    #[from(ignore)]
    #[display("Configuration Error: {_0}")]
    Configuration(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_conversion() {
        let io_err = Error::new(ErrorKind::Other, "test");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
    }

    #[test]
    fn test_string_conversion() {
        // String defaults to General, not Configuration
        let msg = String::from("something wrong");
        let app_err: AppError = msg.into();
        match app_err {
            AppError::General(s) => assert_eq!(s, "something wrong"),
            _ => panic!("String should convert to AppError::General"),
        }
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app_err: AppError = json_err.into();
        assert!(matches!(app_err, AppError::Json(_)));
    }

    #[test]
    fn test_configuration_display() {
        let app_err = AppError::Configuration("Cannot find api array".into());
        assert_eq!(
            format!("{}", app_err),
            "Configuration Error: Cannot find api array"
        );
    }
}
