#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod artifact;
pub mod checker;
mod error;
pub mod verification;

pub use checker::{BaselineChecker, BaselineReport, CategoryOutcome};
pub use error::CheckError;
pub use verification::{evaluate, Check, Metric, VerificationResult};

pub use loadgate_core as core;

pub mod prelude {
    pub use crate::checker::{BaselineChecker, BaselineReport};
    pub use crate::error::CheckError;
    pub use crate::verification::{evaluate, VerificationResult};

    pub use loadgate_core::{BaselineConfig, BaselineProfile, RunStatistics};
}
