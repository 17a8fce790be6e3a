use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the summa workspace.
///
/// This covers argument validation, curve precondition violations, reader-tagged
/// failures, not-found conditions, and cross-curve overlap problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaError {
    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A curve was registered with differently sized x and y sequences.
    #[error("curve length mismatch: {x_len} x-values, {y_len} y-values")]
    LengthMismatch {
        /// Number of x-values (timestamps) supplied.
        x_len: usize,
        /// Number of y-values supplied.
        y_len: usize,
    },

    /// A curve was registered with x-values that are not strictly increasing.
    #[error("curve x-values not strictly increasing at index {index}")]
    NotAscending {
        /// Index of the first x-value that is not greater than its predecessor.
        index: usize,
    },

    /// Two curves share no point where both have valid values.
    #[error("no overlapping time steps: x covers {x_range}, y covers {y_range}")]
    NoOverlap {
        /// Human-readable domain of the first curve.
        x_range: String,
        /// Human-readable domain of the second curve.
        y_range: String,
    },

    /// An individual summary reader returned an error.
    #[error("{reader} failed: {msg}")]
    Reader {
        /// Reader name that failed.
        reader: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A summary address or resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "FOPT in BASE".
        what: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl SummaError {
    /// Helper: build a `Reader` error with the reader name and message.
    pub fn reader(reader: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Reader {
            reader: reader.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `NoOverlap` error from two pre-formatted domain descriptions.
    pub fn no_overlap(x_range: impl Into<String>, y_range: impl Into<String>) -> Self {
        Self::NoOverlap {
            x_range: x_range.into(),
            y_range: y_range.into(),
        }
    }

    /// Returns true if this error reports malformed curve input rather than
    /// a runtime data condition.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::NotAscending { .. } | Self::InvalidArg(_)
        )
    }

    /// Attach a reader name to an error that does not already carry one.
    ///
    /// `NotFound` and `Reader` errors pass through unchanged.
    #[must_use]
    pub fn tagged(self, reader: &str) -> Self {
        match self {
            e @ (Self::NotFound { .. } | Self::Reader { .. }) => e,
            other => Self::Reader {
                reader: reader.to_string(),
                msg: other.to_string(),
            },
        }
    }
}
