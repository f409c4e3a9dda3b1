//! Shared library for `MultiMajorAdvisor`
//! Contains the credit-analysis core used by the CLI and by embedding front ends

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::get_version;
