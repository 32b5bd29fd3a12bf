//! Machine-readable JSON report

use crate::comment::{ParsedComment, Severity};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report format version
pub const REPORT_VERSION: &str = "1.0";

/// Report payload for the JSON output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportData {
    /// Report format version
    pub version: String,
    /// Generation timestamp
    pub generated_at: DateTime<Utc>,
    /// Severity statistics
    pub stats: ReportStats,
    /// Parsed comments in report order
    pub comments: Vec<ParsedComment>,
}

impl ReportData {
    /// Create a report from parsed comments
    pub fn from_comments(comments: Vec<ParsedComment>) -> Self {
        Self {
            version: REPORT_VERSION.to_string(),
            generated_at: Utc::now(),
            stats: ReportStats::from_comments(&comments),
            comments,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Comment counts per severity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Total comment count
    pub total: usize,
    /// Critical count
    pub critical: usize,
    /// High count
    pub high: usize,
    /// Medium count
    pub medium: usize,
    /// Unknown count
    pub unknown: usize,
}

impl ReportStats {
    /// Count comments per severity
    pub fn from_comments(comments: &[ParsedComment]) -> Self {
        let mut stats = Self {
            total: comments.len(),
            ..Default::default()
        };

        for comment in comments {
            match comment.severity {
                Severity::Critical => stats.critical += 1,
                Severity::High => stats.high += 1,
                Severity::Medium => stats.medium += 1,
                Severity::Unknown => stats.unknown += 1,
            }
        }

        stats
    }
}
