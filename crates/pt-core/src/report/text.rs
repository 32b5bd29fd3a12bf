//! Plain-text report renderer

use crate::comment::ParsedComment;

/// Banner and separator width in characters
pub const DEFAULT_WIDTH: usize = 80;

/// Maximum body characters shown per comment
pub const DEFAULT_BODY_LIMIT: usize = 500;

/// Renderer for the human-readable triage report
#[derive(Debug, Clone)]
pub struct TextReport {
    width: usize,
    body_limit: usize,
}

impl TextReport {
    /// Create a renderer with the default width and body limit
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    /// Set the banner and separator width
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the body truncation limit in characters
    pub fn with_body_limit(mut self, body_limit: usize) -> Self {
        self.body_limit = body_limit;
        self
    }

    /// Render the full report
    pub fn render(&self, comments: &[ParsedComment]) -> String {
        let mut out = self.render_header(comments.len());
        for comment in comments {
            self.render_comment(&mut out, comment);
        }
        out
    }

    fn render_header(&self, count: usize) -> String {
        let banner = "=".repeat(self.width);
        format!("{}\nFound {} review comments\n{}\n\n", banner, count, banner)
    }

    fn render_comment(&self, out: &mut String, comment: &ParsedComment) {
        out.push_str(&format!(
            "{} - Comment #{}\n",
            comment.severity.label(),
            comment.id
        ));
        out.push_str(&"─".repeat(self.width));
        out.push('\n');
        out.push_str(&format!("File: {}\n", comment.file));
        out.push_str(&format!("Line: {}\n", comment.line));
        out.push_str(&format!("Reviewer: {}\n", comment.reviewer));
        out.push('\n');

        // Truncation counts characters, not bytes, so a cut never lands
        // inside a multi-byte glyph.
        match comment.body.char_indices().nth(self.body_limit) {
            Some((cut, _)) => {
                out.push_str(&comment.body[..cut]);
                out.push_str("\n...\n");
            }
            None => {
                out.push_str(&comment.body);
                out.push('\n');
            }
        }
        out.push('\n');
    }
}

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}
