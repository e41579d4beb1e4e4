#![deny(missing_docs)]

//! # Operation Builder
//!
//! Transforms one apiDoc entry into an OpenAPI `Operation`.

use crate::apidoc::models::EndpointEntry;
use crate::oas::models::Operation;
use crate::oas::resolver::params::classify_parameters;
use crate::oas::resolver::responses::synthesize_responses;
use crate::oas::routes::naming::OperationIdGenerator;
use crate::sanitize::strip_html;
use crate::type_mapping::TypeMapper;

/// Builds the operation for `entry`.
///
/// # Arguments
///
/// * `entry` - The source entry.
/// * `method` - Lower-cased HTTP method.
/// * `normalized_path` - Path with `{param}` placeholders.
/// * `operation_ids` - Run-scoped ID generator.
/// * `mapper` - Type annotation mapper.
pub fn build_operation(
    entry: &EndpointEntry,
    method: &str,
    normalized_path: &str,
    operation_ids: &mut OperationIdGenerator,
    mapper: &impl TypeMapper,
) -> Operation {
    let base = match entry.name.as_deref().filter(|n| !n.is_empty()) {
        Some(name) => name.to_string(),
        None => format!("{}_{}", method, normalized_path),
    };

    let classified = classify_parameters(entry, method, normalized_path, mapper);

    Operation {
        tags: entry
            .group
            .as_ref()
            .filter(|g| !g.is_empty())
            .map(|g| vec![g.clone()]),
        summary: entry.display_name().unwrap_or_default().to_string(),
        description: strip_html(entry.description.as_deref()),
        operation_id: operation_ids.next_id(&base),
        parameters: classified.parameters,
        responses: synthesize_responses(entry, mapper),
        request_body: classified.body.build(),
    }
}
