//! # cfp-cli — CLI Tool for CFP Pipeline Definitions
//!
//! Provides the `cfp` command-line interface around the rule engine in
//! `cfp-rules`, replacing the Python `cfp_input_parser` entry points with a
//! structured Rust implementation.
//!
//! ## Subcommands
//!
//! - `cfp validate` — Post-schema rule validation of a pipeline definition.
//! - `cfp upgrade` — Required-field diff between two schema versions.
//! - `cfp rules` — Field-support matrix across schema versions.
//!
//! ## Backward Compatibility
//!
//! Output formats match the Python implementation exactly — the
//! ` Schema rules failed:` block, the upgrade guidance lines, and the
//! Markdown support table are preserved byte-for-byte so existing CI
//! pipelines and log scrapers keep working:
//!
//! ```bash
//! cfp validate pipelines/churn.json
//! cfp upgrade 1.0.0 2.0.0
//! cfp rules
//! ```
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from rule logic.
//! - Handler functions delegate to `cfp-rules` — no rule knowledge here.
//! - Generic JSON Schema validation is an upstream concern; this tool only
//!   runs the version-specific structural rules.

pub mod summary;
pub mod upgrade;
pub mod validate;
