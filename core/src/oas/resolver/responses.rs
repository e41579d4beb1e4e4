#![deny(missing_docs)]

//! # Response Synthesis
//!
//! Builds the `responses` map of an operation from the `success` and `error`
//! sections of an entry.
//!
//! Each section contributes twice. Field groups run first: every group label
//! selects a status and its fields become that status' JSON schema (the last
//! group for a status wins). Example blocks run second: the first non-empty
//! example per status is attached.

use crate::apidoc::examples::parse_example;
use crate::apidoc::models::{EndpointEntry, FieldSection};
use crate::oas::models::{Response, Schema};
use crate::sanitize::{extract_status_code, strip_html};
use crate::type_mapping::TypeMapper;
use indexmap::IndexMap;

/// Fallback status for success groups without a code in their label.
pub const SUCCESS_STATUS: &str = "200";

/// Fallback status for error groups without a code in their label.
pub const ERROR_STATUS: &str = "400";

/// Builds the responses of one entry, ordered by status code.
///
/// An entry without any response gets a synthetic `200` so every operation
/// declares at least one.
pub fn synthesize_responses(
    entry: &EndpointEntry,
    mapper: &impl TypeMapper,
) -> IndexMap<String, Response> {
    let success_description = strip_html(Some(entry.display_name().unwrap_or("Success")));
    let error_description = strip_html(Some(entry.display_name().unwrap_or("Error")));

    let mut responses = IndexMap::new();

    add_responses_from_fields(
        &mut responses,
        entry.success.as_ref(),
        SUCCESS_STATUS,
        &success_description,
        mapper,
    );
    add_responses_from_fields(
        &mut responses,
        entry.error.as_ref(),
        ERROR_STATUS,
        &error_description,
        mapper,
    );
    add_examples(
        &mut responses,
        entry.success.as_ref(),
        SUCCESS_STATUS,
        &success_description,
    );
    add_examples(&mut responses, entry.error.as_ref(), ERROR_STATUS, "Error");

    if responses.is_empty() {
        let description = if success_description.is_empty() {
            "Success".to_string()
        } else {
            success_description
        };
        responses.insert(
            SUCCESS_STATUS.to_string(),
            Response {
                description,
                content: None,
            },
        );
    }

    // Status keys are three digit codes, so key order is numeric order.
    responses.sort_keys();
    responses
}

/// Returns the response for `status`, creating it on first reference.
///
/// The description is only filled while it is still empty.
pub fn ensure_response<'a>(
    responses: &'a mut IndexMap<String, Response>,
    status: &str,
    description: &str,
) -> &'a mut Response {
    let response = responses.entry(status.to_string()).or_default();
    if response.description.is_empty() && !description.is_empty() {
        response.description = description.to_string();
    }
    response
}

/// Writes one object schema per field group into the matching response.
pub fn add_responses_from_fields(
    responses: &mut IndexMap<String, Response>,
    section: Option<&FieldSection>,
    fallback_status: &str,
    default_description: &str,
    mapper: &impl TypeMapper,
) {
    let Some(section) = section else {
        return;
    };

    for (group, fields) in &section.fields {
        let status = extract_status_code(Some(group), fallback_status);

        let mut properties = IndexMap::new();
        let mut required = Vec::new();
        for f in fields {
            let mut schema = mapper.map(f.type_annotation.as_deref());
            if f.description.as_deref().is_some_and(|d| !d.is_empty()) {
                schema = schema.with_description(strip_html(f.description.as_deref()));
            }
            properties.insert(f.field.clone(), schema);
            if !f.optional {
                required.push(f.field.clone());
            }
        }

        let response = ensure_response(responses, &status, default_description);
        response.json_media_mut().schema = Some(Schema::object(properties, required));
    }
}

/// Attaches parsed example bodies; the first example per status wins.
pub fn add_examples(
    responses: &mut IndexMap<String, Response>,
    section: Option<&FieldSection>,
    fallback_status: &str,
    default_description: &str,
) {
    let Some(section) = section else {
        return;
    };

    for example in &section.examples {
        let parsed = parse_example(example.content.as_deref().unwrap_or_default());
        let status = parsed
            .status
            .unwrap_or_else(|| extract_status_code(example.title.as_deref(), fallback_status));

        let response = ensure_response(responses, &status, default_description);
        let Some(body) = parsed.body else {
            continue;
        };

        let media = response.json_media_mut();
        if media.example.is_none() {
            media.example = Some(body);
        }
    }
}
