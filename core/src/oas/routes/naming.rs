#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Path template normalization and document-unique operation IDs.

use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Rewrites `:name` placeholders to `{name}`.
///
/// e.g. `/users/:id/:name` -> `/users/{id}/{name}`. Idempotent.
pub fn normalize_path(url: &str) -> String {
    static COLON_RE: OnceLock<Regex> = OnceLock::new();
    let colon_re = COLON_RE.get_or_init(|| Regex::new(r":([A-Za-z0-9_]+)").expect("Invalid regex"));
    colon_re.replace_all(url, "{$1}").into_owned()
}

/// Reduces a string to `[A-Za-z0-9_]`, collapsing and trimming underscores.
///
/// e.g. `get_/users/{id}` -> `get_users_id`. Empty results become `operation`.
pub fn sanitize_operation_id(base: &str) -> String {
    static INVALID_RE: OnceLock<Regex> = OnceLock::new();
    let invalid_re =
        INVALID_RE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("Invalid regex"));
    static UNDERSCORES_RE: OnceLock<Regex> = OnceLock::new();
    let underscores_re = UNDERSCORES_RE.get_or_init(|| Regex::new(r"_+").expect("Invalid regex"));

    let replaced = invalid_re.replace_all(base, "_");
    let collapsed = underscores_re.replace_all(&replaced, "_");
    let trimmed = collapsed.trim_matches('_');

    if trimmed.is_empty() {
        "operation".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Hands out operation IDs that are unique within one conversion run.
///
/// The first use of a sanitized base returns it unchanged, later uses get a
/// `_2`, `_3`, ... suffix. Candidates already handed out, whether bare or
/// suffixed, are skipped.
#[derive(Debug, Default)]
pub struct OperationIdGenerator {
    counters: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl OperationIdGenerator {
    /// Creates a generator with no IDs handed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes `base` and returns the next unique ID for it.
    pub fn next_id(&mut self, base: &str) -> String {
        let normalized = sanitize_operation_id(base);
        let count = self.counters.entry(normalized.clone()).or_insert(0);

        loop {
            *count += 1;
            let candidate = if *count == 1 {
                normalized.clone()
            } else {
                format!("{}_{}", normalized, count)
            };

            if self.issued.insert(candidate.clone()) {
                if candidate != normalized {
                    tracing::debug!(
                        base = %normalized,
                        operation_id = %candidate,
                        "operation id already taken"
                    );
                }
                return candidate;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/users/:id/:name"), "/users/{id}/{name}");
        assert_eq!(normalize_path("/users/{id}"), "/users/{id}");
        assert_eq!(
            normalize_path(&normalize_path("/a/:b_c/d")),
            normalize_path("/a/:b_c/d")
        );
    }

    #[test]
    fn test_sanitize_operation_id() {
        assert_eq!(sanitize_operation_id("GetUser"), "GetUser");
        assert_eq!(sanitize_operation_id("get_/users/{id}"), "get_users_id");
        assert_eq!(sanitize_operation_id("__a--b__"), "a_b");
        assert_eq!(sanitize_operation_id("///"), "operation");
        assert_eq!(sanitize_operation_id(""), "operation");
    }

    #[test]
    fn test_dedup_in_encounter_order() {
        let mut ids = OperationIdGenerator::new();
        assert_eq!(ids.next_id("get_user"), "get_user");
        assert_eq!(ids.next_id("get user"), "get_user_2");
        assert_eq!(ids.next_id("other"), "other");
        assert_eq!(ids.next_id("get_user"), "get_user_3");
    }

    #[test]
    fn test_suffix_never_reissues_a_taken_id() {
        let mut ids = OperationIdGenerator::new();
        let issued = vec![
            ids.next_id("get_user"),
            ids.next_id("get_user"),
            ids.next_id("get_user_2"),
        ];
        assert_eq!(issued, vec!["get_user", "get_user_2", "get_user_2_2"]);

        let mut ids = OperationIdGenerator::new();
        let issued = vec![
            ids.next_id("get_user_2"),
            ids.next_id("get_user"),
            ids.next_id("get_user"),
        ];
        assert_eq!(issued, vec!["get_user_2", "get_user", "get_user_3"]);
    }

    #[test]
    fn test_generators_are_independent() {
        let mut first = OperationIdGenerator::new();
        let mut second = OperationIdGenerator::new();
        assert_eq!(first.next_id("x"), "x");
        assert_eq!(second.next_id("x"), "x");
    }
}
