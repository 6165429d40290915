//! # Validate Subcommand
//!
//! Post-schema rule validation of a single pipeline definition file.
//!
//! The file is parsed here (JSON, or YAML by extension) and handed to the
//! rule engine as a `serde_json::Value`. Generic JSON Schema validation is
//! the upstream collaborator's job and is assumed to have already passed;
//! this subcommand only runs the version-specific structural rules.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

/// Arguments for the `cfp validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the pipeline definition (.json, .yaml, or .yml).
    #[arg(value_name = "PATH")]
    pub pipeline_file: PathBuf,
}

/// Execute the validate subcommand.
///
/// Returns exit code 0 when every rule passes and 1 on rule violations or
/// an unsupported schema version. Load and parse problems are operational
/// errors and propagate to the caller.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let document = load_document(&args.pipeline_file)?;

    tracing::debug!(
        path = %args.pipeline_file.display(),
        "running post-schema rules"
    );

    match cfp_rules::validate(&document) {
        Ok(()) => {
            println!("OK: {}", args.pipeline_file.display());
            Ok(0)
        }
        Err(e) => {
            println!("FAIL: {}", args.pipeline_file.display());
            println!("{e}");
            Ok(1)
        }
    }
}

/// Load a pipeline definition into a JSON value.
///
/// The format follows the file extension: `.yaml`/`.yml` parse as YAML,
/// anything else as JSON. Pipeline definitions use the JSON-compatible
/// subset of YAML, so the YAML tree deserializes directly into a
/// `serde_json::Value`.
fn load_document(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read pipeline definition {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("invalid YAML in {}", path.display())),
        _ => serde_json::from_str(&content)
            .with_context(|| format!("invalid JSON in {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_pipeline(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn valid_v1_json() -> String {
        json!({
            "schema_version": "1.0.0",
            "pipeline_id": "demo",
            "files": [],
            "final_query": "SELECT 1"
        })
        .to_string()
    }

    #[test]
    fn valid_json_pipeline_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pipeline(&dir, "pipeline.json", &valid_v1_json());

        let args = ValidateArgs { pipeline_file: path };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn rule_violations_return_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pipeline(
            &dir,
            "pipeline.json",
            &json!({ "schema_version": "1.0.0" }).to_string(),
        );

        let args = ValidateArgs { pipeline_file: path };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn unsupported_version_returns_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pipeline(
            &dir,
            "pipeline.json",
            &json!({ "schema_version": "9.9.9" }).to_string(),
        );

        let args = ValidateArgs { pipeline_file: path };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn yaml_pipeline_validates_like_json() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r#"
schema_version: "1.0.0"
pipeline_id: demo
files:
  - file_id: customers
    features: [age, region]
final_query: SELECT 1
"#;
        let path = write_pipeline(&dir, "pipeline.yaml", yaml);

        let args = ValidateArgs { pipeline_file: path };
        assert_eq!(run_validate(&args).unwrap(), 0);
    }

    #[test]
    fn yaml_rule_violations_return_one() {
        let dir = tempfile::tempdir().unwrap();
        let yaml = r#"
schema_version: "1.0.0"
pipeline_id: demo
files:
  - file_id: customers
    features: age
final_query: SELECT 1
"#;
        let path = write_pipeline(&dir, "pipeline.yml", yaml);

        let args = ValidateArgs { pipeline_file: path };
        assert_eq!(run_validate(&args).unwrap(), 1);
    }

    #[test]
    fn missing_file_is_an_operational_error() {
        let args = ValidateArgs {
            pipeline_file: PathBuf::from("/tmp/cfp-test-no-such-pipeline.json"),
        };
        assert!(run_validate(&args).is_err());
    }

    #[test]
    fn malformed_json_is_an_operational_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pipeline(&dir, "pipeline.json", "{ not json");

        let args = ValidateArgs { pipeline_file: path };
        assert!(run_validate(&args).is_err());
    }

    #[test]
    fn load_document_parses_unknown_extension_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_pipeline(&dir, "pipeline.conf", &valid_v1_json());

        let document = load_document(&path).unwrap();
        assert_eq!(document["pipeline_id"], "demo");
    }
}
