use loadgate_core::{BaselineProfile, RunStatistics};
use serde::Serialize;
use std::fmt;

/// The metric a [`Check`] compares against its baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ResponseTime,
    SuccessRate,
    Throughput,
}

/// Outcome of comparing one observed value against one threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    pub metric: Metric,
    pub observed: f64,
    pub threshold: f64,
    pub passed: bool,
}

impl Check {
    fn ceiling(metric: Metric, observed: f64, threshold: f64) -> Self {
        Self {
            metric,
            observed,
            threshold,
            passed: observed <= threshold,
        }
    }

    fn floor(metric: Metric, observed: f64, threshold: f64) -> Self {
        Self {
            metric,
            observed,
            threshold,
            passed: observed >= threshold,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = if self.passed { "✓" } else { "✗" };
        match self.metric {
            Metric::ResponseTime => write!(
                f,
                "{symbol} response time {:.1}ms {} {}ms",
                self.observed,
                if self.passed { "<=" } else { ">" },
                self.threshold,
            ),
            Metric::SuccessRate => write!(
                f,
                "{symbol} success rate {:.2}% {} {:.2}%",
                self.observed * 100.,
                if self.passed { ">=" } else { "<" },
                self.threshold * 100.,
            ),
            Metric::Throughput => write!(
                f,
                "{symbol} throughput {:.1} req/s {} {} req/s",
                self.observed,
                if self.passed { ">=" } else { "<" },
                self.threshold,
            ),
        }
    }
}

/// A category's run statistics judged against its baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationResult {
    profile: BaselineProfile,
    stats: RunStatistics,
    response_time: Check,
    success_rate: Check,
    throughput: Check,
}

impl VerificationResult {
    pub fn category(&self) -> &str {
        &self.profile.category
    }

    pub fn profile(&self) -> &BaselineProfile {
        &self.profile
    }

    pub fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    pub fn response_time(&self) -> &Check {
        &self.response_time
    }

    pub fn success_rate(&self) -> &Check {
        &self.success_rate
    }

    pub fn throughput(&self) -> &Check {
        &self.throughput
    }

    pub fn checks(&self) -> [&Check; 3] {
        [&self.response_time, &self.success_rate, &self.throughput]
    }

    pub fn passed(&self) -> bool {
        self.checks().iter().all(|c| c.passed)
    }
}

/// Judge `stats` against `profile`. All bounds are inclusive.
pub fn evaluate(profile: &BaselineProfile, stats: &RunStatistics) -> VerificationResult {
    VerificationResult {
        profile: profile.clone(),
        stats: stats.clone(),
        response_time: Check::ceiling(
            Metric::ResponseTime,
            stats.avg_response_time_ms,
            profile.max_avg_response_time_ms,
        ),
        success_rate: Check::floor(
            Metric::SuccessRate,
            stats.success_rate(),
            profile.min_success_rate,
        ),
        throughput: Check::floor(
            Metric::Throughput,
            stats.requests_per_second,
            profile.min_rps,
        ),
    }
}

impl fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;
        let profile = &self.profile;

        writeln!(f, "[{}]", self.category())?;
        writeln!(
            f,
            "  requests:      {} ({} failed)",
            stats.request_count, stats.failure_count
        )?;
        writeln!(
            f,
            "  success rate:  {:.2}% (min {:.2}%)",
            stats.success_rate() * 100.,
            profile.min_success_rate * 100.
        )?;
        writeln!(
            f,
            "  avg response:  {:.1}ms (max {}ms)",
            stats.avg_response_time_ms, profile.max_avg_response_time_ms
        )?;
        writeln!(
            f,
            "  throughput:    {:.1} req/s (min {} req/s)",
            stats.requests_per_second, profile.min_rps
        )?;
        for check in self.checks() {
            writeln!(f, "  {check}")?;
        }
        write!(f, "  {}", if self.passed() { "PASS" } else { "FAIL" })
    }
}
