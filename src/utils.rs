//! # Utilities - *Internal Helper Utilities*
//!
//! Range-failure reporting shared by every checked operation. The
//! `abort_on_range_error` feature selects, at build time, whether a
//! failure becomes a [`MemViewError`] or terminates the process.

use crate::enums::error::MemViewError;

/// Builds the out-of-range error for `op`.
#[cfg(not(feature = "abort_on_range_error"))]
#[cold]
#[inline(never)]
pub(crate) fn out_of_range(op: &'static str, index: usize, len: usize) -> MemViewError {
    MemViewError::OutOfRange { op, index, len }
}

/// Aborts without unwinding. Never returns.
#[cfg(feature = "abort_on_range_error")]
#[cold]
#[inline(never)]
pub(crate) fn out_of_range(op: &'static str, index: usize, len: usize) -> MemViewError {
    let _ = (op, index, len);
    std::process::abort()
}

/// Checks `index < len`.
#[inline(always)]
pub(crate) fn check_index(op: &'static str, index: usize, len: usize) -> Result<(), MemViewError> {
    if index >= len {
        return Err(out_of_range(op, index, len));
    }
    Ok(())
}

/// Checks `pos <= len`. A position equal to the length is the end of the view.
#[inline(always)]
pub(crate) fn check_position(op: &'static str, pos: usize, len: usize) -> Result<(), MemViewError> {
    if pos > len {
        return Err(out_of_range(op, pos, len));
    }
    Ok(())
}
