//! Core module for credit analysis, feasibility classification and planning

pub mod advisor;
pub mod capacity;
pub mod config;
pub mod deficit;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod planner;
pub mod ranker;
pub mod repository;
pub mod tables;

pub use advisor::{Advisor, AnalysisOutput};
pub use error::{AdvisorError, DataWarning};
pub use evaluator::{AdvisorPolicy, Participation, ProgramEvaluator};
pub use repository::{MajorCatalog, RequirementRepository, RequirementSource};

/// Returns the current version of the `MultiMajorAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
