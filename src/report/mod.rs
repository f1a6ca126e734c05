//! Turning a parsed report into deduplicated, printable error summaries.

pub mod console;
pub mod extract;
pub mod markdown;
pub mod normalize;
pub mod report_model;
