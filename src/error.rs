// Error taxonomy for the detection pipeline.
//
// The library reports typed errors so callers can tell a bad argument from a
// broken dataset or a text too short to measure. The CLI wraps these in
// anyhow at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DetectionError {
    /// An argument was missing or out of range (absent signature, bad
    /// weight vector, nonexistent text path).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A reference dataset row could not be parsed. `line` is 1-based.
    #[error("malformed dataset at line {line}: {reason}")]
    MalformedDataset { line: usize, reason: String },

    /// The text has no words or no sentences, so the averages are undefined.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Attribution was requested against a reference set with no entries.
    #[error("reference set is empty, nothing to match against")]
    EmptyReferenceSet,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DetectionError>;
