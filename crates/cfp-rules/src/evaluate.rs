//! # Rule Evaluator
//!
//! Validates a parsed pipeline definition against the version-specific rules
//! after generic JSON Schema validation has already run upstream.
//!
//! The evaluator never stops at the first problem: every check runs and
//! every violation is accumulated, so a caller sees the whole repair list in
//! one pass. Only an unsupported `schema_version` aborts immediately, since
//! without a rule-set there is nothing meaningful to check.
//!
//! Checks run in a fixed order — root-required fields in table order, then
//! per-file checks in file order, then repeatable-field checks — and the
//! violation list preserves that order. Existing callers parse the output.

use serde_json::Value;

use crate::error::{RuleError, RuleViolations};
use crate::table::{rule_set, RepeatableField, DEFAULT_SCHEMA_VERSION};

/// Validate a pipeline definition against the rules for its declared
/// schema version.
///
/// The document is an already-parsed, schema-valid JSON object; it is read
/// but never mutated. A missing `schema_version` field resolves to
/// [`DEFAULT_SCHEMA_VERSION`].
///
/// # Errors
///
/// Returns [`RuleError::UnsupportedVersion`] when the declared version has
/// no rule-table entry, and [`RuleError::RulesFailed`] with the full ordered
/// violation list when any structural rule is breached.
pub fn validate(document: &Value) -> Result<(), RuleError> {
    let version = declared_version(document);
    let rules =
        rule_set(&version).ok_or_else(|| RuleError::UnsupportedVersion(version.clone()))?;

    let mut violations: Vec<String> = Vec::new();

    // Root-required fields, in table order. Presence only: a null value
    // still counts as present.
    for &field in rules.required {
        if document.get(field).is_none() {
            violations.push(format!("Missing required field: {field}"));
        }
    }

    let files = document.get("files").and_then(Value::as_array);

    if let Some(files) = files {
        for file in files {
            let file_id = file_label(file);

            // Per-file required fields and the depends_on list-type check
            // apply only to rule-sets that declare required_per_file.
            if let Some(per_file) = rules.required_per_file {
                for &field in per_file {
                    if file.get(field).is_none() {
                        violations.push(format!("Missing '{field}' in file: {file_id}"));
                    }
                }

                if let Some(depends_on) = file.get("depends_on") {
                    if !depends_on.is_array() {
                        violations
                            .push(format!("'depends_on' must be a list in file: {file_id}"));
                    }
                }
            }

            // API files must declare headers under every version.
            if file.get("file_type").and_then(Value::as_str) == Some("api")
                && file.get("headers").is_none()
            {
                violations.push(format!("'headers' required for API file: {file_id}"));
            }
        }

        // Repeatable per-file subfields must hold arrays when present.
        // Root-level repeatable entries are documentation-only.
        for &repeatable in rules.repeatable {
            let RepeatableField::FileSubfield(subfield) = repeatable else {
                continue;
            };
            for file in files {
                if let Some(value) = file.get(subfield) {
                    if !value.is_array() {
                        violations.push(format!(
                            "'{subfield}' must be a list in file: {}",
                            file_label(file)
                        ));
                    }
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(RuleError::RulesFailed(RuleViolations::from(violations)))
    }
}

/// The document's declared schema version, defaulting when absent.
///
/// A non-string value is rendered in its JSON form; it will not match any
/// table entry and surfaces as an unsupported version.
fn declared_version(document: &Value) -> String {
    match document.get("schema_version") {
        None => DEFAULT_SCHEMA_VERSION.to_string(),
        Some(Value::String(version)) => version.clone(),
        Some(other) => other.to_string(),
    }
}

/// The file entry's `file_id` for violation messages, `"unknown"` when
/// absent.
fn file_label(file: &Value) -> String {
    match file.get("file_id") {
        None => "unknown".to_string(),
        Some(Value::String(id)) => id.clone(),
        Some(other) => other.to_string(),
    }
}
