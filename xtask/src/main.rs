//! Developer tasks (schema output, fixture checks, explain coverage).

use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root (parent of the xtask crate).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// A published JSON schema, keyed by the `schema` id documents carry.
struct SchemaTarget {
    id: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(onehealth_types::OneHealthReport)
}

fn generate_scenario_schema() -> schemars::Schema {
    schema_for!(onehealth_settings::ScenarioConfigV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            id: onehealth_types::SCHEMA_REPORT_V1,
            generate: generate_report_schema,
        },
        SchemaTarget {
            id: onehealth_settings::SCHEMA_SCENARIO_V1,
            generate: generate_scenario_schema,
        },
    ]
}

/// Print the generated schema for `id` as pretty JSON.
fn print_schema(id: Option<&str>) -> anyhow::Result<()> {
    let known: Vec<&str> = schema_targets().iter().map(|t| t.id).collect();
    let Some(id) = id else {
        bail!("usage: cargo xtask print-schema <id> (one of {})", known.join("|"));
    };
    let Some(target) = schema_targets().into_iter().find(|t| t.id == id) else {
        bail!("unknown schema id: {id} (expected one of {})", known.join("|"));
    };
    let json = serde_json::to_string_pretty(&(target.generate)()).context("serialize schema")?;
    println!("{json}");
    Ok(())
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  print-schema <id>  Print the JSON schema generated from the Rust types");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  check-fixtures    Run the built onehealth binary on tests/fixtures and check reports");
    eprintln!("  explain-coverage  Validate all model and metric IDs have explanations");
}

/// Run the built binary on every fixture, validate the report against the generated schema and
/// compare its summary with `expected.summary.json`.
///
/// Fixtures without an expected summary must be rejected (exit 1, no report).
fn check_fixtures() -> anyhow::Result<()> {
    let schema_value = serde_json::to_value(generate_report_schema())?;
    let compiled = jsonschema::validator_for(&schema_value)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {}", e))?;

    let bin = project_root().join("target").join("debug").join("onehealth");

    #[cfg(target_os = "windows")]
    let bin = bin.with_extension("exe");

    if !bin.exists() {
        bail!(
            "onehealth binary not found at {}.\n\
            Run `cargo build -p onehealth-cli` first.",
            bin.display()
        );
    }

    let fixtures_dir = project_root().join("tests").join("fixtures");
    let mut errors = Vec::new();
    let mut checked = 0usize;

    let mut entries: Vec<PathBuf> = fs::read_dir(&fixtures_dir)
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.join("onehealth.toml").exists())
        .collect();
    entries.sort();

    for fixture_dir in entries {
        let name = fixture_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        checked += 1;

        if let Err(err) = check_fixture(&bin, &fixture_dir, &compiled) {
            errors.push(format!("fixture '{}': {:#}", name, err));
        } else {
            println!("  ✓ fixture '{}'", name);
        }
    }

    if !errors.is_empty() {
        eprintln!("\nFixture errors:");
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Fixture check failed with {} errors", errors.len());
    }

    println!("\n✓ {} fixtures checked", checked);
    Ok(())
}

fn check_fixture(
    bin: &Path,
    fixture_dir: &Path,
    schema: &jsonschema::Validator,
) -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir().context("Failed to create temp dir")?;
    let report_out = temp_dir.path().join("report.json");

    let output = std::process::Command::new(bin)
        .arg("--config")
        .arg(fixture_dir.join("onehealth.toml"))
        .arg("assess")
        .arg("--report-out")
        .arg(&report_out)
        .output()
        .context("Failed to run onehealth")?;
    let code = output.status.code();

    let expected_path = fixture_dir.join("expected.summary.json");
    if !expected_path.exists() {
        if code != Some(1) || report_out.exists() {
            bail!("expected rejection (exit 1, no report), got exit {:?}", code);
        }
        return Ok(());
    }

    if !matches!(code, Some(0) | Some(2)) {
        bail!(
            "exited with {:?}: {}",
            code,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_out)?).context("parse report")?;

    let schema_errors: Vec<String> = schema.iter_errors(&report).map(|e| e.to_string()).collect();
    if !schema_errors.is_empty() {
        bail!("schema validation: {}", schema_errors.join("; "));
    }

    let expected: serde_json::Value = serde_json::from_str(&fs::read_to_string(&expected_path)?)
        .context("parse expected.summary.json")?;
    let actual = onehealth_test_util::summarize_report(&report);
    if actual != expected {
        bail!(
            "summary differs from expected.summary.json:\n{}",
            serde_json::to_string_pretty(&actual)?
        );
    }

    // Alert state and exit code must agree.
    let alert = report["data"]["alert"].as_bool().unwrap_or(false);
    if alert != (code == Some(2)) {
        bail!("alert = {} but exit code {:?}", alert, code);
    }

    // Second run must differ only in timestamps.
    let rerun_out = temp_dir.path().join("rerun.json");
    std::process::Command::new(bin)
        .arg("--config")
        .arg(fixture_dir.join("onehealth.toml"))
        .arg("assess")
        .arg("--report-out")
        .arg(&rerun_out)
        .output()
        .context("Failed to re-run onehealth")?;
    let rerun: serde_json::Value = serde_json::from_str(&fs::read_to_string(&rerun_out)?)?;
    if onehealth_test_util::normalize_nondeterministic(rerun)
        != onehealth_test_util::normalize_nondeterministic(report)
    {
        bail!("report is not deterministic across runs");
    }

    Ok(())
}

/// Validate that all model and metric IDs have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let model_ids = onehealth_types::explain::all_model_ids();
    let metric_ids = onehealth_types::explain::all_metric_ids();

    let mut errors = Vec::new();

    for id in model_ids.iter().chain(metric_ids) {
        match onehealth_types::lookup_explanation(id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("'{}' has empty title", id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("'{}' has empty description", id));
                }
                if exp.formula.is_empty() {
                    errors.push(format!("'{}' has empty formula", id));
                }
            }
            None => errors.push(format!("'{}' has no explanation", id)),
        }
    }

    if errors.is_empty() {
        println!("✓ {} model IDs have explanations", model_ids.len());
        println!("✓ {} metric IDs have explanations", metric_ids.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "print-schema" => print_schema(args.get(2).map(String::as_str)),
        "check-fixtures" => check_fixtures(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for target in schema_targets() {
                println!("{}", target.id);
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
