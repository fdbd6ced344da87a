use crate::summary;
use anyhow::Context;
use clap::Parser;
use loadgate::core::{BaselineConfig, DEFAULT_REPORTS_DIR};
use loadgate::{BaselineChecker, CategoryOutcome};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Check load test results against performance baselines.
///
/// Exits with 0 when every checked category meets its baseline and 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "check-baseline", version)]
pub(crate) struct Cli {
    /// Directory containing the load test reports
    #[arg(long, env = "LOADGATE_REPORTS_DIR", default_value = DEFAULT_REPORTS_DIR)]
    pub reports_dir: PathBuf,

    /// Check a single test category only (e.g. `auth`)
    #[arg(long)]
    pub test_type: Option<String>,

    /// JSON file with baseline profiles to use instead of the built-in ones
    #[arg(long)]
    pub baseline_file: Option<PathBuf>,

    /// Print a JSON summary instead of the console report
    #[arg(long)]
    pub json: bool,
}

/// Run the checks described by `args`, writing the report to `out`.
///
/// `Ok(false)` means the checks ran and the gate failed; `Err` means they could not run at all.
pub(crate) fn run<W: Write>(args: &Cli, out: &mut W) -> anyhow::Result<bool> {
    let mut checker = BaselineChecker::new(&args.reports_dir);
    if let Some(path) = &args.baseline_file {
        let config = BaselineConfig::from_json_file(path)
            .with_context(|| format!("Unable to load baselines from {}", path.display()))?;
        checker = checker.config(config);
    }
    debug!("Using reports in {}", checker.reports_dir().display());

    let passed = match &args.test_type {
        Some(category) => {
            let outcome = CategoryOutcome {
                category: category.clone(),
                result: checker.check(category),
            };

            if args.json {
                serde_json::to_writer_pretty(&mut *out, &summary::outcome(&outcome))?;
                writeln!(out)?;
            } else {
                writeln!(out, "{outcome}")?;
            }
            outcome.passed()
        }
        None => {
            let report = checker.run_all();

            if args.json {
                serde_json::to_writer_pretty(&mut *out, &summary::report(&report))?;
                writeln!(out)?;
            } else {
                writeln!(out, "{report}")?;
            }
            report.passed()
        }
    };

    info!("Baseline gate {}", if passed { "passed" } else { "failed" });
    Ok(passed)
}
