//! # Error Module - Custom *MemView* Error Type
//!
//! Defines the unified error type for memview.
//!
//! ## Features
//! - Covers bounds violations on the checked accessors and sub-view operations.
//! - Implements `Display` for readable output and `Error` for integration
//! with standard Rust error handling.
//!
//! When the `abort_on_range_error` feature is enabled, none of these errors
//! are ever constructed: the failing operation aborts the process instead.

use std::error::Error;
use std::fmt;

/// Catch all error type for `memview`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemViewError {
    /// A position or index fell outside the view.
    ///
    /// - `op`: the operation that rejected it, e.g. `"MemoryView::at"`.
    /// - `index`: the offending index or position.
    /// - `len`: the length of the view at the time of the call.
    OutOfRange {
        op: &'static str,
        index: usize,
        len: usize,
    },
}

impl MemViewError {
    /// Name of the operation that raised the error.
    #[inline]
    pub fn op(&self) -> &'static str {
        match self {
            MemViewError::OutOfRange { op, .. } => op,
        }
    }
}

impl fmt::Display for MemViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemViewError::OutOfRange { op, index, len } => {
                write!(
                    f,
                    "Out of range in {}: position {} is outside a view of length {}.",
                    op, index, len
                )
            }
        }
    }
}

impl Error for MemViewError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_operation() {
        let err = MemViewError::OutOfRange {
            op: "MemoryView::at",
            index: 7,
            len: 3,
        };
        assert_eq!(err.op(), "MemoryView::at");
        assert_eq!(
            err.to_string(),
            "Out of range in MemoryView::at: position 7 is outside a view of length 3."
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn Error> = Box::new(MemViewError::OutOfRange {
            op: "MemoryView::view",
            index: 6,
            len: 5,
        });
        assert!(err.to_string().contains("MemoryView::view"));
    }
}
