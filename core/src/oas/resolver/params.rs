#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Decides where each declared apiDoc parameter lives in the OpenAPI operation.
//!
//! For fields of the `parameter` section, first match wins:
//! 1. the field names a placeholder of the path -> `in: path`, always required;
//! 2. the method carries no body -> `in: query`;
//! 3. otherwise -> a property of the JSON request body.
//!
//! Fields of the `header` section are always `in: header`.

use crate::apidoc::models::{EndpointEntry, FieldDeclaration};
use crate::oas::models::{Parameter, ParameterLocation, Schema};
use crate::oas::resolver::body::RequestBodyBuilder;
use crate::sanitize::strip_html;
use crate::type_mapping::TypeMapper;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Methods whose non-path parameters travel in the request body.
pub const BODY_METHODS: [&str; 3] = ["post", "put", "patch"];

/// Parameters and body properties of one operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedParameters {
    /// Path, query and header parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Body-placed fields.
    pub body: RequestBodyBuilder,
}

/// Returns true when `method` (any case) sends parameters in the body.
pub fn is_body_method(method: &str) -> bool {
    BODY_METHODS
        .iter()
        .any(|m| m.eq_ignore_ascii_case(method))
}

/// Collects the `{name}` placeholders of a normalized path.
pub fn path_placeholders(normalized_path: &str) -> HashSet<&str> {
    static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
    let placeholder_re =
        PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^{}/]+)\}").expect("Invalid regex"));

    placeholder_re
        .captures_iter(normalized_path)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Classifies the `parameter` and `header` fields of an entry.
///
/// # Arguments
///
/// * `entry` - The source entry.
/// * `method` - Lower-cased HTTP method.
/// * `normalized_path` - Path with `{param}` placeholders.
/// * `mapper` - Type annotation mapper.
pub fn classify_parameters(
    entry: &EndpointEntry,
    method: &str,
    normalized_path: &str,
    mapper: &impl TypeMapper,
) -> ClassifiedParameters {
    let placeholders = path_placeholders(normalized_path);
    let body_method = is_body_method(method);
    let mut classified = ClassifiedParameters::default();

    let params = entry
        .parameter
        .iter()
        .flat_map(|section| section.fields.values())
        .flatten();

    for field in params {
        let schema = mapper.map(field.type_annotation.as_deref());
        let description = strip_html(field.description.as_deref());

        if placeholders.contains(field.field.as_str()) {
            classified
                .parameters
                .push(parameter(field, ParameterLocation::Path, true, schema, description));
        } else if !body_method {
            classified.parameters.push(parameter(
                field,
                ParameterLocation::Query,
                !field.optional,
                schema,
                description,
            ));
        } else {
            let schema = if description.is_empty() {
                schema
            } else {
                schema.with_description(description)
            };
            classified
                .body
                .add_property(&field.field, schema, !field.optional);
        }
    }

    let headers = entry
        .header
        .iter()
        .flat_map(|section| section.fields.values())
        .flatten();

    for field in headers {
        classified.parameters.push(parameter(
            field,
            ParameterLocation::Header,
            !field.optional,
            mapper.map(field.type_annotation.as_deref()),
            strip_html(field.description.as_deref()),
        ));
    }

    classified
}

fn parameter(
    field: &FieldDeclaration,
    location: ParameterLocation,
    required: bool,
    schema: Schema,
    description: String,
) -> Parameter {
    Parameter {
        name: field.field.clone(),
        location,
        required,
        schema,
        description,
    }
}
