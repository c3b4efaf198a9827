//! Error types for jlpt-vocab.

use thiserror::Error;

/// Top-level error type for pipeline operations.
///
/// Per-batch tokenizer failures are deliberately **not** errors: the
/// pipeline degrades to the untokenized input for that batch and keeps
/// going. Only input/output file problems make a whole run fail.
#[derive(Debug, Error)]
pub enum VocabError {
    /// I/O error wrapper (input/output files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The analyzer process could not be run at all. Raised by
    /// [`Analyzer::analyze`](crate::tokenizer::Analyzer::analyze) and
    /// consumed by the batch round trip as a passthrough fallback.
    #[error("analyzer error: {0}")]
    Analyzer(String),

    /// A malformed row in the input file.
    #[error("invalid row at line {line}: {message}")]
    InvalidRow { line: usize, message: String },
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, VocabError>;
