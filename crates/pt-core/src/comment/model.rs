//! Comment data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw review comment as exported by the upstream API
///
/// Every field is optional: the export is read best-effort, and records with
/// missing fields are excluded or padded with sentinels downstream rather
/// than rejected. Unknown keys in the export are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComment {
    /// File path the comment is attached to; absent for non-code comments
    pub path: Option<String>,
    /// 1-based line number, if the comment targets a line
    pub line: Option<u64>,
    /// Comment text
    pub body: Option<String>,
    /// Comment author
    pub user: Option<RawUser>,
}

impl RawComment {
    /// Author login, if the export carries one
    pub fn reviewer(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.login.as_deref())
    }

    /// File path, if present and non-empty
    pub fn file_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

/// Author object nested in a raw comment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawUser {
    /// Account login of the author
    pub login: Option<String>,
}

/// A review comment after filtering, classification, and cleanup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedComment {
    /// 1-based position among qualifying comments
    pub id: usize,
    /// File path the comment is attached to
    pub file: String,
    /// Line number, or `N/A` when the export carries none
    pub line: LineNumber,
    /// Severity classified from body markers
    pub severity: Severity,
    /// Author login, or `unknown`
    pub reviewer: String,
    /// Body with image-markup lines removed and surrounding whitespace trimmed
    pub body: String,
}

/// Comment severity level, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// No recognized marker in the body
    Unknown,
    /// Medium marker (`![medium]` or 🟡)
    Medium,
    /// High marker (`![high]` or 🟠)
    High,
    /// Critical marker (`![critical]` or 🔴)
    Critical,
}

impl Severity {
    /// Classify a comment body by its embedded markers
    ///
    /// The first level whose marker appears anywhere in the body wins, in
    /// the order critical, high, medium. Bodies without a marker classify
    /// as `Unknown`.
    pub fn classify(body: &str) -> Self {
        if body.contains("![critical]") || body.contains('🔴') {
            Severity::Critical
        } else if body.contains("![high]") || body.contains('🟠') {
            Severity::High
        } else if body.contains("![medium]") || body.contains('🟡') {
            Severity::Medium
        } else {
            Severity::Unknown
        }
    }

    /// Display label shown in report headers
    ///
    /// Known levels pair glyph and name; `Unknown` stays bare.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "🔴 CRITICAL",
            Severity::High => "🟠 HIGH",
            Severity::Medium => "🟡 MEDIUM",
            Severity::Unknown => "UNKNOWN",
        }
    }

    /// Parse from a display label or bare level name
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "🔴 CRITICAL" | "CRITICAL" => Some(Severity::Critical),
            "🟠 HIGH" | "HIGH" => Some(Severity::High),
            "🟡 MEDIUM" | "MEDIUM" => Some(Severity::Medium),
            "UNKNOWN" => Some(Severity::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Severity::from_label(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown severity: {}", s)))
    }
}

/// Line number of a comment, or the `N/A` sentinel when the export has none
///
/// Displays and serializes as the plain number or the literal string `N/A`,
/// matching the field shape of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineNumber {
    /// Concrete 1-based line number
    Number(u64),
    /// Comment has no line (file-level comment or outdated position)
    NotApplicable,
}

impl LineNumber {
    /// Build from the optional export field
    pub fn from_raw(line: Option<u64>) -> Self {
        match line {
            Some(n) => LineNumber::Number(n),
            None => LineNumber::NotApplicable,
        }
    }
}

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineNumber::Number(n) => write!(f, "{}", n),
            LineNumber::NotApplicable => write!(f, "N/A"),
        }
    }
}

impl Serialize for LineNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            LineNumber::Number(n) => serializer.serialize_u64(*n),
            LineNumber::NotApplicable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for LineNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(u64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(LineNumber::Number(n)),
            Repr::Text(s) if s == "N/A" => Ok(LineNumber::NotApplicable),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "invalid line number: {}",
                s
            ))),
        }
    }
}
