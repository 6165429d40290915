//! # Rule Table
//!
//! The immutable mapping from schema version to structural rule-set.
//!
//! Version keys are exact-match strings: `"2.0.0"` and `"2.0.0-coc"` are
//! distinct, unrelated entries. There is no semantic-version range matching.
//!
//! ## Repeatable fields
//!
//! The Python rule engine this table was ported from encoded per-file array
//! fields as `"files[].<subfield>"` strings and split on `.` at evaluation
//! time. [`RepeatableField`] replaces that with a tagged representation, so
//! the evaluator's per-file array check is a pattern match instead of string
//! parsing. Note the asymmetry carried over from the Python rules:
//! [`RepeatableField::Root`] entries (`files`, `preprocessing_hooks`,
//! `postprocessing_hooks`, root-level `depends_on`) are listed for
//! documentation and reporting, but the evaluator never type-checks them
//! against the root document. Only the `FileSubfield` entries are enforced.

/// A field path from a rule-set's `repeatable` list.
///
/// Repeatable fields must hold array values. The two forms correspond to the
/// Python table's `"<name>"` and `"files[].<name>"` path notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatableField {
    /// A root-level field of the pipeline definition. Listed for
    /// documentation and the support matrix; not type-checked by the
    /// evaluator.
    Root(&'static str),

    /// A subfield of every entry in the `files` array. When present on a
    /// file entry, its value must be an array.
    FileSubfield(&'static str),
}

impl RepeatableField {
    /// The field name without path notation.
    pub fn name(self) -> &'static str {
        match self {
            RepeatableField::Root(name) | RepeatableField::FileSubfield(name) => name,
        }
    }
}

/// Structural rules for one pipeline schema version.
///
/// Field order inside `required` and `repeatable` is significant: the
/// evaluator reports violations in table order, and existing callers parse
/// that output.
#[derive(Debug, Clone)]
pub struct RuleSet {
    /// Exact-match version key (the document's `schema_version` value).
    pub version: &'static str,
    /// Root fields that must be present in the document.
    pub required: &'static [&'static str],
    /// Root fields permitted but not mandatory.
    pub optional: &'static [&'static str],
    /// Fields whose value must be array-typed.
    pub repeatable: &'static [RepeatableField],
    /// Fields that must be present on every entry of the `files` array.
    /// Only some versions declare these; the per-file checks (including the
    /// `depends_on` list-type check) run only when this is `Some`.
    pub required_per_file: Option<&'static [&'static str]>,
}

/// Version applied when a document carries no `schema_version` field.
pub const DEFAULT_SCHEMA_VERSION: &str = "1.0.0";

/// The rule table. Definition order here is the column order of the
/// support matrix.
pub const SCHEMA_RULES: &[RuleSet] = &[
    RuleSet {
        version: "1.0.0",
        required: &["schema_version", "pipeline_id", "files", "final_query"],
        optional: &["missing_value_check", "default_fill_value", "description"],
        repeatable: &[
            RepeatableField::Root("files"),
            RepeatableField::FileSubfield("features"),
        ],
        required_per_file: None,
    },
    RuleSet {
        version: "2.0.0",
        required: &[
            "schema_version",
            "pipeline_id",
            "files",
            "final_query",
            "created_by",
            "created_at",
            "global_settings",
        ],
        optional: &[
            "context_settings",
            "missing_value_check",
            "default_fill_value",
            "description",
        ],
        repeatable: &[
            RepeatableField::Root("files"),
            RepeatableField::FileSubfield("features"),
            RepeatableField::Root("preprocessing_hooks"),
            RepeatableField::Root("postprocessing_hooks"),
        ],
        required_per_file: None,
    },
    RuleSet {
        version: "2.0.0-coc",
        required: &[
            "schema_version",
            "pipeline_id",
            "files",
            "final_query",
            "created_by",
            "created_at",
            "global_settings",
            "context_settings",
            "chain_of_command",
        ],
        optional: &["missing_value_check", "default_fill_value", "description"],
        repeatable: &[
            RepeatableField::Root("files"),
            RepeatableField::FileSubfield("features"),
            RepeatableField::Root("preprocessing_hooks"),
            RepeatableField::Root("postprocessing_hooks"),
            RepeatableField::Root("depends_on"),
        ],
        required_per_file: Some(&["execution_order"]),
    },
];

/// Look up the rule-set for an exact version string.
pub fn rule_set(version: &str) -> Option<&'static RuleSet> {
    SCHEMA_RULES.iter().find(|rules| rules.version == version)
}
