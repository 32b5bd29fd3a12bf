//! pt-core - Core library for pr-triage
//!
//! This crate provides the processing logic for the PR review comment triage
//! tool: decoding a review-comment export, filtering and classifying the
//! comments, and rendering the triage report.

pub mod comment;
pub mod error;
pub mod report;

pub use comment::{CommentParser, LineNumber, ParsedComment, ParserConfig, RawComment, Severity};
pub use error::{Result, TriageError};
pub use report::{ReportData, ReportStats, TextReport};
