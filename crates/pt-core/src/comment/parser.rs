//! Review comment parser
//!
//! Turns the raw export into `ParsedComment`s: skips records without a file
//! path, applies the reviewer and severity filters, classifies severity from
//! body markers, strips image markup, and assigns dense 1-based ids.

use super::model::{LineNumber, ParsedComment, RawComment, Severity};
use crate::error::{Result, TriageError};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Configuration for the comment parser
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Case-insensitive substring matched against reviewer logins
    pub reviewer_filter: Option<String>,
    /// Keep only comments at or above this severity
    pub min_severity: Option<Severity>,
}

/// Review comment parser
pub struct CommentParser {
    config: ParserConfig,
}

impl CommentParser {
    /// Create a new parser with no filters
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a new parser with custom config
    ///
    /// An empty reviewer filter matches every login and is normalized away.
    pub fn with_config(mut config: ParserConfig) -> Self {
        config.reviewer_filter = config.reviewer_filter.filter(|f| !f.is_empty());
        Self { config }
    }

    /// Parse comment records in input order
    ///
    /// Records without a non-empty `path` never qualify, and active filters
    /// drop records before ids are assigned, so ids stay dense: the n-th
    /// emitted comment always has `id == n`.
    pub fn parse_records(&self, records: &[RawComment]) -> Vec<ParsedComment> {
        let reviewer_filter = self
            .config
            .reviewer_filter
            .as_deref()
            .map(str::to_lowercase);

        let mut parsed = Vec::new();
        for record in records {
            let path = match record.file_path() {
                Some(p) => p,
                None => continue,
            };

            if let Some(ref filter) = reviewer_filter {
                let login = record.reviewer().unwrap_or("").to_lowercase();
                if !login.contains(filter.as_str()) {
                    continue;
                }
            }

            // Severity comes from the raw body; cleanup below may remove the
            // very line that carried the marker.
            let body = record.body.as_deref().unwrap_or("");
            let severity = Severity::classify(body);

            if let Some(min) = self.config.min_severity {
                if severity < min {
                    continue;
                }
            }

            parsed.push(ParsedComment {
                id: parsed.len() + 1,
                file: path.to_string(),
                line: LineNumber::from_raw(record.line),
                severity,
                reviewer: record.reviewer().unwrap_or("unknown").to_string(),
                body: clean_body(body),
            });
        }

        debug!(
            "Parsed {} of {} comment records",
            parsed.len(),
            records.len()
        );
        parsed
    }

    /// Parse a JSON array of comment records
    pub fn parse_json(&self, input: &str) -> Result<Vec<ParsedComment>> {
        let records: Vec<RawComment> = serde_json::from_str(input)?;
        Ok(self.parse_records(&records))
    }

    /// Parse comments from a JSON file
    ///
    /// A path that does not reference an existing file is reported as
    /// `FileNotFound` rather than a bare IO error, so the caller can show it
    /// without a read-failure wrapper.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<ParsedComment>> {
        if !path.is_file() {
            return Err(TriageError::FileNotFound(path.to_path_buf()));
        }

        let input = fs::read_to_string(path)?;
        self.parse_json(&input)
    }
}

impl Default for CommentParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip image markup from a comment body
///
/// Drops every line whose leading-whitespace-trimmed content starts with
/// `![` (markdown image) or `<img` (raw image tag), rejoins the rest, and
/// trims surrounding whitespace. Cleaning an already-cleaned body is a
/// no-op.
pub fn clean_body(body: &str) -> String {
    body.split('\n')
        .filter(|line| {
            let content = line.trim_start();
            !content.starts_with("![") && !content.starts_with("<img")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
