//! # Rules Subcommand
//!
//! Prints the field-support matrix across every schema version in the rule
//! table, for quick reference or documentation generation.

use anyhow::Result;
use clap::Args;

/// Arguments for the `cfp rules` subcommand.
#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Emit the matrix as JSON instead of the Markdown table.
    #[arg(long)]
    pub json: bool,
}

/// Execute the rules subcommand. Always exits 0.
pub fn run_rules(args: &RulesArgs) -> Result<u8> {
    let matrix = cfp_rules::build_support_matrix();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matrix)?);
    } else {
        println!("{matrix}");
    }
    Ok(0)
}
