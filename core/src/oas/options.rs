#![deny(missing_docs)]

//! # Conversion Options
//!
//! Caller-supplied metadata that overrides the generated `info` block.

use crate::error::AppResult;
use crate::oas::models::Info;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Default document title.
pub const DEFAULT_TITLE: &str = "API (converted from apiDoc)";

/// Default document description.
pub const DEFAULT_DESCRIPTION: &str =
    "This specification is automatically converted from apiDoc (api_data.js).";

/// Options for one conversion call.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Overrides applied on top of the generated `info` block.
    pub info: InfoOverrides,
}

/// Overrides for the `info` block.
///
/// Known keys replace the generated values in place; any other key is appended
/// to `info` as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InfoOverrides {
    /// Replaces the default title.
    pub title: Option<String>,
    /// Replaces the resolved version.
    pub version: Option<String>,
    /// Replaces the default description.
    pub description: Option<String>,
    /// Additional `info` keys (`contact`, `license`, `termsOfService`, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl InfoOverrides {
    /// Reads overrides from JSON or YAML text.
    pub fn from_yaml_str(text: &str) -> AppResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Layers `other` on top of `self`; keys set in `other` win.
    pub fn merge(mut self, other: InfoOverrides) -> Self {
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.version.is_some() {
            self.version = other.version;
        }
        if other.description.is_some() {
            self.description = other.description;
        }
        self.extra.extend(other.extra);
        self
    }

    /// Builds the `info` block from the resolved version and these overrides.
    pub fn apply(&self, resolved_version: String) -> Info {
        Info {
            title: self
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            version: self.version.clone().unwrap_or(resolved_version),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            extra: self.extra.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let info = InfoOverrides::default().apply("2.0.0".into());
        assert_eq!(info.title, DEFAULT_TITLE);
        assert_eq!(info.version, "2.0.0");
        assert_eq!(info.description, DEFAULT_DESCRIPTION);
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_from_yaml_with_extra_keys() {
        let overrides = InfoOverrides::from_yaml_str(
            "title: Users API\ncontact:\n  name: Ops\n  email: ops@example.com\n",
        )
        .unwrap();
        let info = overrides.apply("1.0.0".into());
        assert_eq!(info.title, "Users API");
        assert_eq!(
            info.extra.get("contact"),
            Some(&json!({"name": "Ops", "email": "ops@example.com"}))
        );
    }

    #[test]
    fn test_from_json_text() {
        let overrides = InfoOverrides::from_yaml_str(r#"{"version": "9.9.9"}"#).unwrap();
        assert_eq!(overrides.apply("1.0.0".into()).version, "9.9.9");
    }

    #[test]
    fn test_merge_prefers_later_layer() {
        let file = InfoOverrides {
            title: Some("From file".into()),
            description: Some("File description".into()),
            ..Default::default()
        };
        let flags = InfoOverrides {
            title: Some("From flag".into()),
            ..Default::default()
        };
        let merged = file.merge(flags);
        assert_eq!(merged.title.as_deref(), Some("From flag"));
        assert_eq!(merged.description.as_deref(), Some("File description"));
    }
}
