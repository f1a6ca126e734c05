//! Reading Bluepill JUnit XML reports.

pub mod error;
pub mod junit_model;
pub mod loader;
