//! # Error Types
//!
//! Errors raised by the rule evaluator and the upgrade advisor. All are
//! fatal to the call that raised them: the engine performs no retries and
//! no partial recovery, and callers must treat any violation as rejection.
//!
//! Message texts are preserved byte-for-byte from the CLI this engine was
//! ported from, including the leading space left where an emoji prefix was
//! stripped. Existing log scrapers match on the ` Schema rules failed:`
//! line.

use std::fmt;

use thiserror::Error;

/// Errors from rule evaluation and version comparison.
#[derive(Error, Debug)]
pub enum RuleError {
    /// The document's `schema_version` has no rule-table entry. Raised
    /// before any field-level checks run; carries no partial violation list.
    #[error(" Unsupported schema version: {0}")]
    UnsupportedVersion(String),

    /// One or more structural rules were violated. Carries the full ordered
    /// violation list.
    #[error(" Schema rules failed:\n{0}")]
    RulesFailed(RuleViolations),

    /// An argument to the upgrade advisor is not in the rule table.
    /// `position` names which argument (`current` or `target`).
    #[error(" Unknown {position} version: {version}")]
    UnknownVersion {
        /// Which advisor argument failed the lookup.
        position: &'static str,
        /// The version string that has no table entry.
        version: String,
    },
}

/// The ordered list of rule violations from one evaluation pass.
///
/// Order reflects the order rules were checked: root-required fields in
/// table order, then per-file checks in file order, then repeatable-field
/// checks. Nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleViolations {
    violations: Vec<String>,
}

impl RuleViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when no violations were recorded.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// All violations, in check order.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<String> {
        self.violations
    }
}

impl From<Vec<String>> for RuleViolations {
    fn from(violations: Vec<String>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for RuleViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
