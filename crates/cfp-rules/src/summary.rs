//! # Rule Reporter
//!
//! Renders a field × version support matrix from the rule table, for CLI
//! display and documentation generation. A pure function of the table; no
//! document is involved.

use std::fmt;

use serde::Serialize;

use crate::table::SCHEMA_RULES;

/// How one schema version treats one root field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSupport {
    /// The field is in the version's required set.
    Required,
    /// The field is permitted but not mandatory.
    Optional,
    /// The version does not know the field.
    Absent,
}

impl FieldSupport {
    /// The cell marker used in the rendered table, matching the Python
    /// CLI output.
    pub fn marker(self) -> &'static str {
        match self {
            FieldSupport::Required => "✅",
            FieldSupport::Optional => "🟡",
            FieldSupport::Absent => "❌",
        }
    }
}

/// One matrix row: a field and its support across all versions, in table
/// column order.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    /// The root field name.
    pub field: &'static str,
    /// Support per version, aligned with [`SupportMatrix::versions`].
    pub support: Vec<FieldSupport>,
}

/// The field × version support matrix.
///
/// Rows are the sorted union of every version's required and optional
/// fields; columns are the versions in rule-table definition order. The
/// `Display` rendering reproduces the Python CLI's Markdown table.
#[derive(Debug, Clone, Serialize)]
pub struct SupportMatrix {
    versions: Vec<&'static str>,
    rows: Vec<MatrixRow>,
}

impl SupportMatrix {
    /// Column labels, in rule-table definition order.
    pub fn versions(&self) -> &[&'static str] {
        &self.versions
    }

    /// Rows, sorted by field name.
    pub fn rows(&self) -> &[MatrixRow] {
        &self.rows
    }

    /// Support for a single field under a single version, `None` when
    /// either is unknown to the table.
    pub fn support_for(&self, field: &str, version: &str) -> Option<FieldSupport> {
        let column = self.versions.iter().position(|v| *v == version)?;
        let row = self.rows.iter().find(|row| row.field == field)?;
        row.support.get(column).copied()
    }
}

impl fmt::Display for SupportMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| Field Group |")?;
        for version in &self.versions {
            write!(f, " {version} |")?;
        }
        write!(f, "\n|-------------|")?;
        for _ in &self.versions {
            write!(f, "---|")?;
        }
        for row in &self.rows {
            write!(f, "\n| {} ", row.field)?;
            for support in &row.support {
                write!(f, "| {} ", support.marker())?;
            }
            write!(f, "|")?;
        }
        Ok(())
    }
}

/// Build the support matrix from the rule table.
pub fn build_support_matrix() -> SupportMatrix {
    let versions: Vec<&'static str> = SCHEMA_RULES.iter().map(|rules| rules.version).collect();

    let mut fields: Vec<&'static str> = SCHEMA_RULES
        .iter()
        .flat_map(|rules| rules.required.iter().chain(rules.optional.iter()).copied())
        .collect();
    fields.sort_unstable();
    fields.dedup();

    let rows = fields
        .into_iter()
        .map(|field| MatrixRow {
            field,
            support: SCHEMA_RULES
                .iter()
                .map(|rules| {
                    if rules.required.contains(&field) {
                        FieldSupport::Required
                    } else if rules.optional.contains(&field) {
                        FieldSupport::Optional
                    } else {
                        FieldSupport::Absent
                    }
                })
                .collect(),
        })
        .collect();

    SupportMatrix { versions, rows }
}
