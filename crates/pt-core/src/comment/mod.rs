//! Comment processing module
//!
//! Handles decoding of the review-comment export, severity classification,
//! body cleanup, and filtering.

pub mod model;
pub mod parser;

pub use model::{LineNumber, ParsedComment, RawComment, RawUser, Severity};
pub use parser::{clean_body, CommentParser, ParserConfig};
