//! Baseline checking over a reports directory
use crate::artifact::{artifact_path, read_run_statistics};
use crate::error::CheckError;
use crate::verification::{evaluate, VerificationResult};
use loadgate_core::{BaselineConfig, RunStatistics, DEFAULT_REPORTS_DIR};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Checks run artifacts in a reports directory against a [`BaselineConfig`].
///
/// # Example
///
/// ```no_run
/// use loadgate::prelude::*;
///
/// let report = BaselineChecker::new("reports").run_all();
/// println!("{report}");
/// std::process::exit(if report.passed() { 0 } else { 1 });
/// ```
#[derive(Debug, Clone)]
pub struct BaselineChecker {
    reports_dir: PathBuf,
    config: BaselineConfig,
}

impl Default for BaselineChecker {
    fn default() -> Self {
        Self::new(DEFAULT_REPORTS_DIR)
    }
}

impl BaselineChecker {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
            config: BaselineConfig::default(),
        }
    }

    /// Replace the default baselines.
    pub fn config(mut self, config: BaselineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn baselines(&self) -> &BaselineConfig {
        &self.config
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    pub fn artifact_path(&self, category: &str) -> PathBuf {
        artifact_path(&self.reports_dir, category)
    }

    /// Read the aggregate statistics for `category` from its artifact.
    #[instrument(skip(self))]
    pub fn load(&self, category: &str) -> Result<RunStatistics, CheckError> {
        let path = self.artifact_path(category);
        debug!("Reading {}", path.display());
        read_run_statistics(&path)
    }

    /// Check a single category. Unknown categories fail before any file is touched.
    #[instrument(skip(self))]
    pub fn check(&self, category: &str) -> Result<VerificationResult, CheckError> {
        let profile = self
            .config
            .get(category)
            .ok_or_else(|| CheckError::UnknownCategory(category.to_string()))?;

        let stats = self.load(category)?;
        let result = evaluate(profile, &stats);

        if result.passed() {
            info!("Baseline met");
        } else {
            warn!("Baseline not met");
        }

        #[cfg(feature = "metrics")]
        record_metrics(&result);

        Ok(result)
    }

    /// Check every configured category, in declaration order.
    ///
    /// A failing category never stops the remaining ones from being checked.
    #[instrument(skip_all, fields(reports_dir = %self.reports_dir.display()))]
    pub fn run_all(&self) -> BaselineReport {
        let outcomes = self
            .config
            .categories()
            .map(|category| {
                let result = self.check(category);
                if let Err(err) = &result {
                    error!("{category}: {err}");
                }
                CategoryOutcome {
                    category: category.to_string(),
                    result,
                }
            })
            .collect();

        let report = BaselineReport { outcomes };
        info!(
            "{} of {} categories passed",
            report.passed_count(),
            report.outcomes.len()
        );
        report
    }
}

#[cfg(feature = "metrics")]
fn record_metrics(result: &VerificationResult) {
    let category = result.category().to_string();
    let stats = result.stats();

    metrics::gauge!("loadgate.avg_response_time_ms", "category" => category.clone())
        .set(stats.avg_response_time_ms);
    metrics::gauge!("loadgate.success_rate", "category" => category.clone())
        .set(stats.success_rate());
    metrics::gauge!("loadgate.requests_per_second", "category" => category.clone())
        .set(stats.requests_per_second);
    metrics::gauge!("loadgate.passed", "category" => category)
        .set(if result.passed() { 1. } else { 0. });
}

/// Result of checking one category.
#[derive(Debug)]
pub struct CategoryOutcome {
    pub category: String,
    pub result: Result<VerificationResult, CheckError>,
}

impl CategoryOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(result) if result.passed())
    }
}

impl fmt::Display for CategoryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            Ok(result) => write!(f, "{result}"),
            Err(err) => write!(f, "[{}]\n  ✗ {err}\n  FAIL", self.category),
        }
    }
}

/// Results for every configured category.
#[derive(Debug)]
pub struct BaselineReport {
    outcomes: Vec<CategoryOutcome>,
}

impl BaselineReport {
    pub fn outcomes(&self) -> &[CategoryOutcome] {
        &self.outcomes
    }

    pub fn get(&self, category: &str) -> Option<&CategoryOutcome> {
        self.outcomes.iter().find(|o| o.category == category)
    }

    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// True only when every category produced results and all of them met their baseline.
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CategoryOutcome::passed)
    }
}

impl fmt::Display for BaselineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance baseline check")?;
        writeln!(f, "{}", "=".repeat(50))?;
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        writeln!(f, "{}", "=".repeat(50))?;
        write!(
            f,
            "{}/{} categories passed: {}",
            self.passed_count(),
            self.outcomes.len(),
            if self.passed() { "PASS" } else { "FAIL" }
        )
    }
}
