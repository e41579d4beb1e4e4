#![deny(missing_docs)]

//! # Document Assembly
//!
//! Walks the entries of a description in order and produces the OpenAPI
//! document. The first entry for a (path, method) pair is materialized; later
//! ones are skipped.

use crate::apidoc::loader::{parse_description, SourceFormat};
use crate::apidoc::models::{ApiDescription, EndpointEntry};
use crate::error::AppResult;
use crate::oas::models::{Components, OpenApiDocument, PathItem};
use crate::oas::options::ConvertOptions;
use crate::oas::routes::builder::build_operation;
use crate::oas::routes::naming::{normalize_path, OperationIdGenerator};
use crate::type_mapping::{ApiDocTypeMapper, TypeMapper};
use indexmap::IndexMap;
use std::cmp::Ordering;

/// The OpenAPI version written into every document.
pub const OPENAPI_VERSION: &str = "3.0.3";

/// Version used when no entry declares one.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Assembles one document. Owns the run-scoped operation ID counters.
#[derive(Debug)]
pub struct DocumentAssembler<M: TypeMapper = ApiDocTypeMapper> {
    mapper: M,
    operation_ids: OperationIdGenerator,
}

impl Default for DocumentAssembler<ApiDocTypeMapper> {
    fn default() -> Self {
        Self::new(ApiDocTypeMapper)
    }
}

impl<M: TypeMapper> DocumentAssembler<M> {
    /// Creates an assembler using `mapper` for type annotations.
    pub fn new(mapper: M) -> Self {
        Self {
            mapper,
            operation_ids: OperationIdGenerator::new(),
        }
    }

    /// Consumes the assembler and builds the document.
    pub fn assemble(
        mut self,
        description: &ApiDescription,
        options: &ConvertOptions,
    ) -> OpenApiDocument {
        let version = resolve_version(&description.api);
        let mut paths: IndexMap<String, PathItem> = IndexMap::new();
        let mut skipped = 0usize;

        for entry in &description.api {
            let method = entry.method();
            let normalized_path = normalize_path(entry.url());

            let path_item = paths.entry(normalized_path.clone()).or_default();
            if path_item.contains_key(&method) {
                tracing::debug!(path = %normalized_path, %method, "duplicate endpoint skipped");
                skipped += 1;
                continue;
            }

            let operation = build_operation(
                entry,
                &method,
                &normalized_path,
                &mut self.operation_ids,
                &self.mapper,
            );
            path_item.insert(method, operation);
        }

        tracing::info!(
            entries = description.api.len(),
            paths = paths.len(),
            skipped,
            version = %version,
            "converted apiDoc description"
        );

        OpenApiDocument {
            openapi: OPENAPI_VERSION.to_string(),
            info: options.info.apply(version),
            paths,
            components: Components::default(),
        }
    }
}

/// Builds the typed document for a description.
pub fn build_document(description: &ApiDescription, options: &ConvertOptions) -> OpenApiDocument {
    DocumentAssembler::new(ApiDocTypeMapper).assemble(description, options)
}

/// Converts a description into 2-space indented OpenAPI JSON.
pub fn convert(description: &ApiDescription, options: &ConvertOptions) -> AppResult<String> {
    build_document(description, options).to_json()
}

/// Loads an `api_data.js` script and converts it.
pub fn convert_source(source: &str, options: &ConvertOptions) -> AppResult<String> {
    convert_source_as(source, SourceFormat::Script, options)
}

/// Loads a description of the given format and converts it.
pub fn convert_source_as(
    source: &str,
    format: SourceFormat,
    options: &ConvertOptions,
) -> AppResult<String> {
    let description = parse_description(source, format)?;
    convert(&description, options)
}

impl OpenApiDocument {
    /// Serializes as 2-space indented JSON.
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes as YAML.
    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Picks the highest version declared by any entry.
///
/// Versions compare as dot-separated numbers; missing or non-numeric
/// components count as 0. Among equal versions the first declared wins.
pub fn resolve_version(entries: &[EndpointEntry]) -> String {
    let mut best: Option<&str> = None;
    for version in entries
        .iter()
        .filter_map(|e| e.version.as_deref())
        .filter(|v| !v.is_empty())
    {
        match best {
            Some(current) if compare_versions(version, current) != Ordering::Greater => {}
            _ => best = Some(version),
        }
    }

    best.unwrap_or(DEFAULT_API_VERSION).to_string()
}

/// Compares two dot-separated versions numerically.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|part| part.trim().parse::<u64>().unwrap_or(0))
            .collect()
    };
    let (a, b) = (parse(a), parse(b));

    (0..a.len().max(b.len()))
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            x.cmp(&y)
        })
        .find(|ord| *ord != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
