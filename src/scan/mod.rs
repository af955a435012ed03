//! Scanning layer: line iteration, comment-block tokenizing, declaration
//! classification, and the per-file forward scan that ties them together.
//!
//! ```text
//! LineScanner  -> trimmed, blank-filtered (line_no, text) pairs
//! CommentBlock -> tokenizer state machine + tag accumulation
//! classify     -> declaration line -> (identifier, kind, privacy)
//! FileScanner  -> one FileSymbols per file
//! ```

mod classify;
mod comment;
mod lines;
mod scanner;

pub use classify::{Classification, classify_declaration};
pub use comment::{CommentBlock, State};
pub use lines::LineScanner;
pub use scanner::{FileScanner, scan_file};
