//! # cfp-rules — Pipeline-Definition Rule Engine
//!
//! Structural validation of CFP pipeline definitions beyond what generic
//! JSON Schema validation covers. Generic type/shape validation is the
//! upstream collaborator's responsibility; this crate answers the questions
//! the schema cannot: which root fields a given `schema_version` mandates,
//! which per-file constraints apply, and which fields must be array-typed.
//!
//! ## Components
//!
//! - [`table`] — the immutable rule table, one [`RuleSet`] per schema version.
//! - [`evaluate`] — [`validate`], the post-schema rule evaluator. Accumulates
//!   every violation before failing rather than stopping at the first.
//! - [`upgrade`] — [`suggest_upgrade`], required-field diff between two
//!   versions for migration guidance.
//! - [`summary`] — [`build_support_matrix`], the field × version support
//!   table for CLI and documentation rendering.
//!
//! ## Crate Policy
//!
//! - Pure and synchronous: no I/O, no logging, no shared mutable state. The
//!   rule table is `'static` data, safely shared across threads.
//! - Documents arrive as already-parsed `serde_json::Value` trees and are
//!   never mutated.
//! - No `unsafe` code. No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod evaluate;
pub mod summary;
pub mod table;
pub mod upgrade;

pub use error::{RuleError, RuleViolations};
pub use evaluate::validate;
pub use summary::{build_support_matrix, FieldSupport, MatrixRow, SupportMatrix};
pub use table::{rule_set, RepeatableField, RuleSet, DEFAULT_SCHEMA_VERSION, SCHEMA_RULES};
pub use upgrade::{suggest_upgrade, UpgradeReport};
