//! # cfp CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros with a subcommand structure matching the Python
//! `cfp_input_parser` entry points.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cfp_cli::summary::{run_rules, RulesArgs};
use cfp_cli::upgrade::{run_upgrade, UpgradeArgs};
use cfp_cli::validate::{run_validate, ValidateArgs};

/// CFP pipeline-definition toolchain.
///
/// Validates pipeline definitions against version-specific structural rules
/// (after upstream JSON Schema validation), advises on schema-version
/// upgrades, and renders the field-support matrix.
#[derive(Parser, Debug)]
#[command(name = "cfp", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a pipeline definition against its version's rules.
    Validate(ValidateArgs),

    /// Show the required fields to add when upgrading between versions.
    Upgrade(UpgradeArgs),

    /// Print the field-support matrix across schema versions.
    Rules(RulesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Upgrade(args) => run_upgrade(&args),
        Commands::Rules(args) => run_rules(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
