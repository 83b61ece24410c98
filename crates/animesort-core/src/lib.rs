//! Animesort Core Library
//!
//! Domain logic for match/no-match image sorting: the sort decision,
//! output directory layout, and run reporting. No OpenCV here.

pub mod decision;
pub mod report;

// Re-export commonly used types
pub use decision::{OutputLayout, SortDecision};
pub use report::{FileOutcome, FileReport, RunReport, RunStats};
