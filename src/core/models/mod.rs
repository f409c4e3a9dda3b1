//! Data models for `MultiMajorAdvisor`

pub mod analysis;
pub mod program;
pub mod requirement;
pub mod student;

pub use analysis::{
    CategoryBreakdown, CategoryCredits, CreditAnalysis, PlanCategory, SemesterAllocation,
    SimulationResult,
};
pub use program::{AdmissionType, GraduationStatus, ProgramType, StudentKind};
pub use requirement::{MultiRequirement, PrimaryRequirement};
pub use student::{CreditLedger, StudentSnapshot};
