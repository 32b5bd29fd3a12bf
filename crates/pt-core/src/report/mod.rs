//! Report rendering for parsed comments

pub mod json;
pub mod text;

pub use json::{ReportData, ReportStats};
pub use text::TextReport;
