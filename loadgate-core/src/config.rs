use crate::{ConfigError, AUTH, COMPREHENSIVE, DATAFILE, ORGANIZATION};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Pass/fail thresholds for a single test category.
///
/// All bounds are inclusive: a run sitting exactly on a threshold passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineProfile {
    pub category: String,
    /// Ceiling on the mean response time, in milliseconds.
    pub max_avg_response_time_ms: f64,
    /// Floor on the fraction of successful requests, in `[0, 1]`.
    pub min_success_rate: f64,
    /// Floor on throughput, in requests per second.
    pub min_rps: f64,
}

impl BaselineProfile {
    pub fn new(
        category: &str,
        max_avg_response_time_ms: f64,
        min_success_rate: f64,
        min_rps: f64,
    ) -> Self {
        Self {
            category: category.to_string(),
            max_avg_response_time_ms,
            min_success_rate,
            min_rps,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.category.trim().is_empty() {
            return Err(ConfigError::EmptyCategory);
        }

        let fields = [
            ("max_avg_response_time_ms", self.max_avg_response_time_ms),
            ("min_success_rate", self.min_success_rate),
            ("min_rps", self.min_rps),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0. {
                return Err(self.invalid(field, value));
            }
        }

        if self.min_success_rate > 1. {
            return Err(self.invalid("min_success_rate", self.min_success_rate));
        }

        Ok(())
    }

    fn invalid(&self, field: &'static str, value: f64) -> ConfigError {
        ConfigError::InvalidThreshold {
            category: self.category.clone(),
            field,
            value,
        }
    }
}

/// The full set of baselines, keyed by category.
///
/// Built once at startup and never mutated afterwards. Iteration follows declaration order so
/// reports come out in a stable order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaselineConfig {
    profiles: Vec<BaselineProfile>,
}

#[derive(Deserialize)]
struct BaselineFile {
    profiles: Vec<BaselineProfile>,
}

impl BaselineConfig {
    pub fn new(profiles: Vec<BaselineProfile>) -> Result<Self, ConfigError> {
        if profiles.is_empty() {
            return Err(ConfigError::NoProfiles);
        }

        let mut seen = HashSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.category.as_str()) {
                return Err(ConfigError::DuplicateCategory(profile.category.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// Load baselines from a JSON file of the form `{"profiles": [ ... ]}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading baselines from {}", path.display());

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: BaselineFile =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?;

        Self::new(file.profiles)
    }

    pub fn get(&self, category: &str) -> Option<&BaselineProfile> {
        self.profiles.iter().find(|p| p.category == category)
    }

    pub fn profile(&self, category: &str) -> Result<&BaselineProfile, ConfigError> {
        self.get(category)
            .ok_or_else(|| ConfigError::UnknownCategory(category.to_string()))
    }

    pub fn profiles(&self) -> &[BaselineProfile] {
        &self.profiles
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.category.as_str())
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            profiles: vec![
                BaselineProfile::new(AUTH, 200., 0.95, 10.),
                BaselineProfile::new(ORGANIZATION, 300., 0.95, 5.),
                BaselineProfile::new(DATAFILE, 500., 0.90, 3.),
                BaselineProfile::new(COMPREHENSIVE, 400., 0.90, 5.),
            ],
        }
    }
}
