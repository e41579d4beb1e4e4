#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! The OpenAPI 3.0 tree emitted by the converter.
//!
//! Field order in these structs is the key order of the serialized JSON, so
//! reordering fields changes the output. `Schema` writes its keys by hand to
//! follow attachment order. Absent optional members are skipped rather than
//! written as `null`.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// The only media type the converter emits.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// The primitive JSON Schema types a schema node may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    /// `string`
    String,
    /// `integer`
    Integer,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `object`
    Object,
    /// `array`
    Array,
}

/// A minimal JSON-Schema-compatible node.
///
/// At most one of `schema_type` / `one_of` is set. A node with neither (the
/// `items` of an untyped array) serializes as `{}`.
///
/// Keys serialize in the order they are attached during conversion: the
/// mapped type first, then `nullable`, then a field description. A
/// description produced by the type mapper itself precedes `nullable`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The JSON type.
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,
    /// Alternatives for a union annotation.
    #[serde(default)]
    pub one_of: Option<Vec<Schema>>,
    /// Element schema of an array.
    #[serde(default)]
    pub items: Option<Box<Schema>>,
    /// Object members, in declaration order.
    #[serde(default)]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Names of the non-optional object members.
    #[serde(default)]
    pub required: Option<Vec<String>>,
    /// Upper bound for `string[N]` annotations.
    #[serde(default)]
    pub max_length: Option<u64>,
    /// Format hint, e.g. `binary`.
    #[serde(default)]
    pub format: Option<String>,
    /// Human readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Set when the annotation admits `null`.
    #[serde(default)]
    pub nullable: Option<bool>,
    /// True when `description` was set by the type mapper, before `nullable`.
    #[serde(skip)]
    pub description_from_type: bool,
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if let Some(schema_type) = &self.schema_type {
            map.serialize_entry("type", schema_type)?;
        }
        if let Some(one_of) = &self.one_of {
            map.serialize_entry("oneOf", one_of)?;
        }
        if let Some(items) = &self.items {
            map.serialize_entry("items", items)?;
        }
        if let Some(properties) = &self.properties {
            map.serialize_entry("properties", properties)?;
        }
        if let Some(required) = &self.required {
            map.serialize_entry("required", required)?;
        }
        if let Some(max_length) = &self.max_length {
            map.serialize_entry("maxLength", max_length)?;
        }
        if let Some(format) = &self.format {
            map.serialize_entry("format", format)?;
        }

        let description = self.description.as_ref();
        if self.description_from_type {
            if let Some(description) = description {
                map.serialize_entry("description", description)?;
            }
        }
        if let Some(nullable) = &self.nullable {
            map.serialize_entry("nullable", nullable)?;
        }
        if !self.description_from_type {
            if let Some(description) = description {
                map.serialize_entry("description", description)?;
            }
        }
        map.end()
    }
}

impl Schema {
    /// A node with just a `type`.
    pub fn of(schema_type: SchemaType) -> Self {
        Self {
            schema_type: Some(schema_type),
            ..Default::default()
        }
    }

    /// An `array` node with the given element schema.
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some(SchemaType::Array),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// An `object` node built from ordered properties and required names.
    ///
    /// `required` is omitted when empty.
    pub fn object(properties: IndexMap<String, Schema>, required: Vec<String>) -> Self {
        Self {
            schema_type: Some(SchemaType::Object),
            properties: Some(properties),
            required: (!required.is_empty()).then_some(required),
            ..Default::default()
        }
    }

    /// A union of alternatives.
    pub fn one_of(alternatives: Vec<Schema>) -> Self {
        Self {
            one_of: Some(alternatives),
            ..Default::default()
        }
    }

    /// Returns the schema with `description` set.
    ///
    /// Replacing a type-mapper description keeps its key position.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// An `object` node recording an unrecognized annotation.
    pub fn opaque(original: &str) -> Self {
        Self {
            description: Some(format!("Original type: {}", original)),
            description_from_type: true,
            ..Self::of(SchemaType::Object)
        }
    }

    /// True when the node admits `null`.
    pub fn is_nullable(&self) -> bool {
        self.nullable.unwrap_or(false)
    }
}

/// The `info` block of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Free text description.
    pub description: String,
    /// Additional keys supplied through overrides (contact, license, ...).
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Location of an operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Templated path segment.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
}

/// A path, query or header parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be present.
    pub required: bool,
    /// Value schema.
    pub schema: Schema,
    /// Sanitized description, possibly empty.
    pub description: String,
}

/// Content of one media type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Body schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
    /// Example body, structured or raw text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// A JSON request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// True when at least one body property is required.
    pub required: bool,
    /// Media type map.
    pub content: IndexMap<String, MediaType>,
}

/// A declared response for one status code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Response description (may be empty until a non-empty one is offered).
    pub description: String,
    /// Media type map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

impl Response {
    /// Returns the JSON media entry, creating the content map and entry as needed.
    pub fn json_media_mut(&mut self) -> &mut MediaType {
        self.content
            .get_or_insert_with(IndexMap::new)
            .entry(JSON_MEDIA_TYPE.to_string())
            .or_default()
    }

    /// Returns the JSON media entry if present.
    pub fn json_media(&self) -> Option<&MediaType> {
        self.content.as_ref()?.get(JSON_MEDIA_TYPE)
    }
}

/// One path + method operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Group label of the source entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Title (or name) of the source entry.
    pub summary: String,
    /// Sanitized description.
    pub description: String,
    /// Document-unique identifier.
    pub operation_id: String,
    /// Path, query and header parameters; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code.
    pub responses: IndexMap<String, Response>,
    /// JSON request body; omitted when there are no body properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
}

/// Operations of one path keyed by lower-case method.
pub type PathItem = IndexMap<String, Operation>;

/// The `components` block. The converter never emits shared schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Components {
    /// Named schemas.
    pub schemas: IndexMap<String, Schema>,
}

/// The complete OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// Spec version, always `3.0.3`.
    pub openapi: String,
    /// Document metadata.
    pub info: Info,
    /// Operations keyed by `{param}`-style path.
    pub paths: IndexMap<String, PathItem>,
    /// Shared components.
    pub components: Components,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_untyped_items_serialize_as_empty_object() {
        let schema = Schema {
            items: Some(Box::default()),
            ..Schema::of(SchemaType::Array)
        };
        let value = serde_json::to_value(&schema).unwrap();
        assert_eq!(value, json!({"type": "array", "items": {}}));
    }

    #[test]
    fn test_field_description_follows_nullable() {
        let schema = Schema {
            nullable: Some(true),
            ..Schema::of(SchemaType::String)
        }
        .with_description("Contact");
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"type":"string","nullable":true,"description":"Contact"}"#
        );

        let union = Schema {
            nullable: Some(true),
            ..Schema::one_of(vec![Schema::of(SchemaType::String)])
        }
        .with_description("Either");
        assert_eq!(
            serde_json::to_string(&union).unwrap(),
            r#"{"oneOf":[{"type":"string"}],"nullable":true,"description":"Either"}"#
        );
    }

    #[test]
    fn test_type_description_precedes_nullable() {
        let schema = Schema {
            nullable: Some(true),
            ..Schema::opaque("Profile")
        }
        .with_description("User profile");
        assert_eq!(
            serde_json::to_string(&schema).unwrap(),
            r#"{"type":"object","description":"User profile","nullable":true}"#
        );
    }

    #[test]
    fn test_object_omits_empty_required() {
        let mut props = IndexMap::new();
        props.insert("id".to_string(), Schema::of(SchemaType::Integer));
        let value = serde_json::to_value(Schema::object(props, vec![])).unwrap();
        assert_eq!(
            value,
            json!({"type": "object", "properties": {"id": {"type": "integer"}}})
        );
    }

    #[test]
    fn test_parameter_location_key() {
        let p = Parameter {
            name: "id".into(),
            location: ParameterLocation::Path,
            required: true,
            schema: Schema::of(SchemaType::String),
            description: String::new(),
        };
        let value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["in"], "path");
        assert_eq!(value["description"], "");
    }

    #[test]
    fn test_json_media_mut_creates_entry_once() {
        let mut response = Response::default();
        response.json_media_mut().example = Some(json!(1));
        response.json_media_mut().schema = Some(Schema::of(SchemaType::Object));
        let media = response.json_media().unwrap();
        assert_eq!(media.example, Some(json!(1)));
        assert!(media.schema.is_some());
        assert_eq!(response.content.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_info_extra_follows_defaults() {
        let mut extra = IndexMap::new();
        extra.insert("termsOfService".to_string(), json!("https://example.com/tos"));
        let info = Info {
            title: "T".into(),
            version: "1.0.0".into(),
            description: "D".into(),
            extra,
        };
        let text = serde_json::to_string(&info).unwrap();
        assert_eq!(
            text,
            r#"{"title":"T","version":"1.0.0","description":"D","termsOfService":"https://example.com/tos"}"#
        );
    }
}
