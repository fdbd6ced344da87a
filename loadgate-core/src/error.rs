use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown test type: {0}")]
    UnknownCategory(String),

    #[error("Unable to read baseline file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid baseline file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Baseline configuration has no profiles")]
    NoProfiles,

    #[error("Baseline category `{0}` is declared more than once")]
    DuplicateCategory(String),

    #[error("Baseline category name must not be empty")]
    EmptyCategory,

    #[error("Baseline `{category}` has an invalid {field}: {value}")]
    InvalidThreshold {
        category: String,
        field: &'static str,
        value: f64,
    },
}
