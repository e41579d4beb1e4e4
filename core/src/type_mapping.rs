#![deny(missing_docs)]

//! # Type Mapping
//!
//! Converts apiDoc type annotations (`String`, `Number[]`, `String|null`,
//! `String[64]`, ...) into schema nodes.
//!
//! Mapping never fails: annotations that are not recognized degrade to an
//! `object` node whose description carries the original text.

use crate::oas::models::{Schema, SchemaType};
use regex::Regex;
use std::sync::OnceLock;

/// Trait for converting annotation strings to schema nodes.
pub trait TypeMapper {
    /// Maps a full annotation, including `|` unions and `null`, to a schema node.
    fn map(&self, annotation: Option<&str>) -> Schema;
}

/// The apiDoc implementation of `TypeMapper`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiDocTypeMapper;

impl TypeMapper for ApiDocTypeMapper {
    fn map(&self, annotation: Option<&str>) -> Schema {
        map_type(annotation.unwrap_or_default())
    }
}

/// Maps a top-level annotation.
///
/// The annotation is split on `|`. A literal `null` alternative is removed and
/// marks the result `nullable`. Two or more remaining alternatives produce a
/// `oneOf`; a single one is mapped directly.
pub fn map_type(annotation: &str) -> Schema {
    if annotation.trim().is_empty() {
        return Schema::of(SchemaType::String);
    }

    static NULL_RE: OnceLock<Regex> = OnceLock::new();
    let null_re = NULL_RE
        .get_or_init(|| Regex::new(r"(?i)(?-u:\b)null(?-u:\b)").expect("Invalid regex"));
    let nullable = null_re.is_match(annotation);

    let alternatives: Vec<&str> = annotation
        .split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter(|part| !part.eq_ignore_ascii_case("null"))
        .collect();

    let mut schema = match alternatives.as_slice() {
        [] => map_single_type(annotation),
        [single] => map_single_type(single),
        many => Schema::one_of(many.iter().map(|part| map_single_type(part)).collect()),
    };

    if nullable {
        schema.nullable = Some(true);
    }
    schema
}

/// Maps a single (non-union) annotation.
///
/// - trailing `[]` wraps the element mapping in an array, at any depth;
/// - everything from the first `/` on is discarded before mapping;
/// - `string[N]` yields a `maxLength` bound.
pub fn map_single_type(annotation: &str) -> Schema {
    let trimmed = annotation.trim();
    if trimmed.is_empty() {
        return Schema::of(SchemaType::String);
    }

    if let Some(element) = trimmed.strip_suffix("[]") {
        return Schema::array(map_single_type(element));
    }

    if let Some((head, _)) = trimmed.split_once('/') {
        return map_single_type(head);
    }

    static BOUNDED_RE: OnceLock<Regex> = OnceLock::new();
    let bounded_re =
        BOUNDED_RE.get_or_init(|| Regex::new(r"(?i)string\[([0-9]+)\]").expect("Invalid regex"));
    if let Some(max_length) = bounded_re
        .captures(trimmed)
        .and_then(|caps| caps[1].parse::<u64>().ok())
    {
        return Schema {
            max_length: Some(max_length),
            ..Schema::of(SchemaType::String)
        };
    }

    match trimmed.to_lowercase().as_str() {
        "string" => Schema::of(SchemaType::String),
        "integer" => Schema::of(SchemaType::Integer),
        "number" | "float" | "double" => Schema::of(SchemaType::Number),
        "boolean" | "bool" => Schema::of(SchemaType::Boolean),
        "object" => Schema::of(SchemaType::Object),
        "array" => Schema {
            items: Some(Box::default()),
            ..Schema::of(SchemaType::Array)
        },
        "buffer" => Schema {
            format: Some("binary".to_string()),
            ..Schema::of(SchemaType::String)
        },
        _ => {
            tracing::debug!(annotation = trimmed, "unknown type annotation, using object");
            Schema::opaque(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitive_mapping() {
        let cases = vec![
            ("String", SchemaType::String),
            ("integer", SchemaType::Integer),
            ("Number", SchemaType::Number),
            ("Float", SchemaType::Number),
            ("double", SchemaType::Number),
            ("Boolean", SchemaType::Boolean),
            ("bool", SchemaType::Boolean),
            ("Object", SchemaType::Object),
        ];

        for (input, expected) in cases {
            assert_eq!(map_type(input), Schema::of(expected), "{}", input);
        }
    }

    #[test]
    fn test_empty_defaults_to_string() {
        assert_eq!(map_type(""), Schema::of(SchemaType::String));
        assert_eq!(
            ApiDocTypeMapper.map(None),
            Schema::of(SchemaType::String)
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            map_type("String[]"),
            Schema::array(Schema::of(SchemaType::String))
        );
        assert_eq!(
            map_type("Number[][]"),
            Schema::array(Schema::array(Schema::of(SchemaType::Number)))
        );

        let untyped = map_type("Array");
        assert_eq!(untyped.schema_type, Some(SchemaType::Array));
        assert_eq!(untyped.items.as_deref(), Some(&Schema::default()));
    }

    #[test]
    fn test_deep_nesting_terminates() {
        let annotation = format!("Integer{}", "[]".repeat(64));
        let mut schema = map_type(&annotation);
        let mut depth = 0;
        while let Some(items) = schema.items.take() {
            schema = *items;
            depth += 1;
        }
        assert_eq!(depth, 64);
        assert_eq!(schema, Schema::of(SchemaType::Integer));
    }

    #[test]
    fn test_bounded_string() {
        let schema = map_type("String[64]");
        assert_eq!(schema.schema_type, Some(SchemaType::String));
        assert_eq!(schema.max_length, Some(64));
    }

    #[test]
    fn test_slash_truncates() {
        assert_eq!(map_type("String/Number"), Schema::of(SchemaType::String));
        assert_eq!(
            map_type("Object/Foo[]"),
            Schema::array(Schema::of(SchemaType::Object))
        );
    }

    #[test]
    fn test_buffer_is_binary_string() {
        let schema = map_type("Buffer");
        assert_eq!(schema.schema_type, Some(SchemaType::String));
        assert_eq!(schema.format.as_deref(), Some("binary"));
    }

    #[test]
    fn test_unknown_type_keeps_original_text() {
        let schema = map_type("UserProfile");
        assert_eq!(schema.schema_type, Some(SchemaType::Object));
        assert_eq!(
            schema.description.as_deref(),
            Some("Original type: UserProfile")
        );
    }

    #[test]
    fn test_nullable() {
        let schema = map_type("String|null");
        assert_eq!(schema.schema_type, Some(SchemaType::String));
        assert!(schema.is_nullable());

        let only_null = map_type("null");
        assert!(only_null.is_nullable());
        assert_eq!(only_null.schema_type, Some(SchemaType::Object));
    }

    #[test]
    fn test_nullable_key_order() {
        let nullable = map_type("String|null").with_description("Contact");
        assert_eq!(
            serde_json::to_string(&nullable).unwrap(),
            r#"{"type":"string","nullable":true,"description":"Contact"}"#
        );

        let unknown = map_type("Profile|null");
        assert_eq!(
            serde_json::to_string(&unknown).unwrap(),
            r#"{"type":"object","description":"Original type: Profile","nullable":true}"#
        );
    }

    #[test]
    fn test_union() {
        assert_eq!(
            map_type("String|Number"),
            Schema::one_of(vec![
                Schema::of(SchemaType::String),
                Schema::of(SchemaType::Number)
            ])
        );

        let nullable_union = map_type("String | Number | NULL");
        assert_eq!(nullable_union.one_of.as_ref().map(Vec::len), Some(2));
        assert!(nullable_union.schema_type.is_none());
        assert!(nullable_union.is_nullable());
    }
}
