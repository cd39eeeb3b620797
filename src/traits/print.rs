//! # **Print Module** - *Pretty Printing for Views*
//!
//! Contains the `Display` implementation for [`MemoryView`]
//! and an additional `Print` trait which wraps it to provide
//! `myview.print()` for any object that implements it.
use std::fmt::{self, Display, Formatter};

use crate::MemoryView;

/// Number of elements shown before the preview is truncated.
pub(crate) const MAX_PREVIEW: usize = 50;

/// # Print
///
/// Provides a more convenient way to activate `Display`
/// for views via `myview.print()`,
/// avoiding the need to write `println!("{}", myview);`
pub trait Print {
    #[inline]
    fn print(&self)
    where
        Self: Display,
    {
        println!("{}", self);
    }
}

impl<T: Display> Print for T where T: Display {}

impl<T: Display> Display for MemoryView<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len();
        writeln!(f, "MemoryView [{} elements]", len)?;

        let limit = len.min(MAX_PREVIEW);
        write!(f, "  [")?;
        for (i, value) in self.iter().take(limit).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        if len > MAX_PREVIEW {
            write!(f, ", ... ({} more)", len - MAX_PREVIEW)?;
        }
        writeln!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_short_view() {
        let data = [1, 2, 3];
        let view = MemoryView::new(&data);
        assert_eq!(view.to_string(), "MemoryView [3 elements]\n  [1, 2, 3]\n");
    }

    #[test]
    fn test_display_empty_view() {
        let view = MemoryView::<f64>::empty();
        assert_eq!(view.to_string(), "MemoryView [0 elements]\n  []\n");
    }

    #[test]
    fn test_display_truncates_preview() {
        let data: Vec<u32> = (0..(MAX_PREVIEW as u32 + 7)).collect();
        let view = MemoryView::from(&data);
        let out = view.to_string();
        assert!(out.starts_with("MemoryView [57 elements]"));
        assert!(out.contains("49, ... (7 more)]"));
        assert!(!out.contains(" 50,"));
    }
}
