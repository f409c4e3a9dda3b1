//! Semester planning

pub mod policy;
pub mod semester_planner;

pub use policy::{FillPolicy, GENERAL_EDUCATION_FIRST_GRADES, REQUIRED_CAP_PER_SEMESTER};
pub use semester_planner::{
    generate_plan, grade_and_half, planned_category, planned_total, SemesterPlanner,
};
