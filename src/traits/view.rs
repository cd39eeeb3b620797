//! # **View Module** - *Borrowing Storage as a MemoryView*
//!
//! The [`AsMemoryView`] trait lets functions accept any contiguous storage
//! (slices, arrays, `Vec`, `Vec64`, or another view) and work on it through
//! a zero-copy [`MemoryView`].

use crate::{MemViewError, MemoryView};
#[cfg(feature = "vec64")]
use vec64::Vec64;

/// Zero-copy access to contiguous storage through a [`MemoryView`].
///
/// Implemented for native slices, fixed-size arrays, `Vec`, `Vec64` (with the
/// `vec64` feature) and `MemoryView` itself, so functions can accept
/// `&impl AsMemoryView<T>` and take any of them without copying.
///
/// ```rust
/// use memview::AsMemoryView;
///
/// fn total(values: &impl AsMemoryView<u32>) -> u32 {
///     values.as_memory_view().iter().sum()
/// }
///
/// assert_eq!(total(&[1, 2, 3]), 6);
/// assert_eq!(total(&vec![4, 5]), 9);
/// ```
pub trait AsMemoryView<T> {
    /// Returns a view over the whole of `self`.
    fn as_memory_view(&self) -> MemoryView<'_, T>;

    /// Returns a view over `[pos, pos + min(count, len - pos))` of `self`.
    ///
    /// # Errors
    /// `MemViewError::OutOfRange` when `pos` is past the end.
    #[inline]
    fn memory_view(&self, pos: usize, count: usize) -> Result<MemoryView<'_, T>, MemViewError> {
        self.as_memory_view().view(pos, count)
    }
}

impl<T> AsMemoryView<T> for [T] {
    #[inline]
    fn as_memory_view(&self) -> MemoryView<'_, T> {
        MemoryView::new(self)
    }
}

impl<T, const N: usize> AsMemoryView<T> for [T; N] {
    #[inline]
    fn as_memory_view(&self) -> MemoryView<'_, T> {
        MemoryView::from_array(self)
    }
}

impl<T> AsMemoryView<T> for Vec<T> {
    #[inline]
    fn as_memory_view(&self) -> MemoryView<'_, T> {
        MemoryView::new(self.as_slice())
    }
}

#[cfg(feature = "vec64")]
impl<T> AsMemoryView<T> for Vec64<T> {
    #[inline]
    fn as_memory_view(&self) -> MemoryView<'_, T> {
        MemoryView::new(&self[..])
    }
}

impl<T> AsMemoryView<T> for MemoryView<'_, T> {
    #[inline]
    fn as_memory_view(&self) -> MemoryView<'_, T> {
        *self
    }
}
