//! # Error Types

use crate::alloc::string::String;
use crate::regex::ErrorWrapper;

/// Errors from textcarve operations.
#[derive(Debug, thiserror::Error)]
pub enum TextcarveError {
    /// The pattern was rejected by the engine(s) it was labeled for.
    ///
    /// Raised at compile time, never mid-scan; treat it as a programming
    /// error in the supplied pattern, not as a search outcome.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The rejected pattern source.
        pattern: String,
        /// The underlying engine error.
        source: ErrorWrapper,
    },

    /// The engine gave up mid-scan.
    ///
    /// Only the `fancy_regex` engine produces this (backtrack limit);
    /// `regex` scans cannot fail.
    #[error("scan failed: {0}")]
    Scan(ErrorWrapper),
}

/// Result type for textcarve operations.
pub type TcResult<T> = core::result::Result<T, TextcarveError>;
