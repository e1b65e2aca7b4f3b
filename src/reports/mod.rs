//! Report generation modules for different output formats
//!
//! These describe a computed layout without drawing it:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::DepDrawError;
use crate::layout::LayoutOutcome;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a computed layout
    fn generate_report(&self, outcome: &LayoutOutcome) -> Result<String, DepDrawError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
