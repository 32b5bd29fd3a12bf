//! pr-triage - PR review comment triage
//!
//! Reads a JSON export of pull-request review comments, filters and
//! classifies them, and prints a triage report.
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch review comments with the GitHub CLI
//! gh api repos/OWNER/REPO/pulls/42/comments > /tmp/pr_comments.json
//!
//! # Full report
//! pr-triage /tmp/pr_comments.json
//!
//! # Only comments from one reviewer, as JSON
//! pr-triage /tmp/pr_comments.json gemini --format json
//! ```

mod cli;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
