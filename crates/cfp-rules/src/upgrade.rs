//! # Upgrade Advisor
//!
//! Compares the required-field sets of two schema versions and reports what
//! a pipeline author must add when migrating. Purely a rule-table
//! comparison: no document is involved and fields dropped by the target
//! version are not reported.

use std::fmt;

use serde::Serialize;

use crate::error::RuleError;
use crate::table::rule_set;

/// Migration guidance from one schema version to another.
///
/// `new_required` holds the fields required by `target` but not by
/// `current`, sorted ascending — empty when the target demands nothing new
/// (including downgrades).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpgradeReport {
    /// The version migrated from.
    pub current: &'static str,
    /// The version migrated to.
    pub target: &'static str,
    /// Newly required root fields, sorted lexically.
    pub new_required: Vec<&'static str>,
}

impl UpgradeReport {
    /// True when the target version requires nothing the current one does
    /// not.
    pub fn is_noop(&self) -> bool {
        self.new_required.is_empty()
    }
}

impl fmt::Display for UpgradeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.new_required.is_empty() {
            return write!(
                f,
                "🆙 No new required fields when upgrading from {} to {}.",
                self.current, self.target
            );
        }
        write!(
            f,
            "🆙 To upgrade from {} → {}, you must add:",
            self.current, self.target
        )?;
        for field in &self.new_required {
            write!(f, "\n  🔸 {field}")?;
        }
        Ok(())
    }
}

/// Compute the required fields to add when upgrading `current` to `target`.
///
/// # Errors
///
/// Returns [`RuleError::UnknownVersion`] when either version has no rule
/// table entry; `current` is checked first.
pub fn suggest_upgrade(current: &str, target: &str) -> Result<UpgradeReport, RuleError> {
    let current_rules = rule_set(current).ok_or_else(|| RuleError::UnknownVersion {
        position: "current",
        version: current.to_string(),
    })?;
    let target_rules = rule_set(target).ok_or_else(|| RuleError::UnknownVersion {
        position: "target",
        version: target.to_string(),
    })?;

    let mut new_required: Vec<&'static str> = target_rules
        .required
        .iter()
        .copied()
        .filter(|field| !current_rules.required.contains(field))
        .collect();
    new_required.sort_unstable();

    Ok(UpgradeReport {
        current: current_rules.version,
        target: target_rules.version,
        new_required,
    })
}
