//! # Upgrade Subcommand
//!
//! Prints the required fields a pipeline author must add when moving a
//! definition from one schema version to another. A pure rule-table
//! comparison; no document is read.

use anyhow::Result;
use clap::Args;

/// Arguments for the `cfp upgrade` subcommand.
#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// The schema version migrating from.
    #[arg(value_name = "CURRENT")]
    pub current: String,

    /// The schema version migrating to.
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Emit the report as JSON instead of the guidance text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the upgrade subcommand.
///
/// Returns exit code 0 with the report printed; a version missing from the
/// rule table propagates as an error.
pub fn run_upgrade(args: &UpgradeArgs) -> Result<u8> {
    let report = cfp_rules::suggest_upgrade(&args.current, &args.target)?;

    tracing::debug!(
        current = report.current,
        target = report.target,
        new_fields = report.new_required.len(),
        "computed upgrade report"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(0)
}
