//! # **MemoryView Module** - *Non-owning View over Contiguous Memory*
//!
//! `MemoryView` is a **logical, read-only, zero-copy view** into a contiguous
//! run of `T` values: a base pointer and an element count.
//!
//! ## Purpose
//! - Indexable access to memory the view does not own, either bounds-checked
//!   ([`at`](MemoryView::at), [`get`](MemoryView::get)) or unchecked
//!   ([`get_unchecked`](MemoryView::get_unchecked)).
//! - O(1) sub-views ([`view`](MemoryView::view)) and window trimming
//!   ([`remove_prefix`](MemoryView::remove_prefix),
//!   [`remove_suffix`](MemoryView::remove_suffix)).
//! - Lexicographic comparison between views of comparable element types.
//!
//! ## Behaviour
//! - All indices are **relative** to the view's base.
//! - Copying a view copies the `(base, len)` pair only. Both copies read the
//!   same memory.
//! - [`take`](MemoryView::take) is the "move out" operation: the source is reset
//!   to the empty view (null base, length 0).
//! - Nothing is allocated or freed, ever.
//!
//! ## Lifetimes
//! - Views built from safe borrows (`&[T]`, `&[T; N]`, `&Vec<T>`) carry the borrow's
//!   lifetime, so the compiler enforces that the memory outlives the view.
//! - Views built from raw pointers or numeric addresses are `unsafe` to construct.
//!   The caller picks `'a` and guarantees `[base, base + len)` stays readable for it.
//!
//! ## Threading
//! - `Send` and `Sync` whenever `T: Sync`, exactly like `&[T]`.
//! - Read operations never mutate the view, so shared use is safe.
//!
//! ## Invariants
//! - `base` may be null only when `len == 0`.
//! - `[base, base + len)` is readable for `'a`.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Deref, Index};
use std::slice::SliceIndex;
use std::{mem, ptr, slice};

#[cfg(feature = "vec64")]
use vec64::Vec64;

use crate::enums::error::MemViewError;
use crate::structs::iter::{Iter, RevIter};
use crate::utils::{check_index, check_position};

/// Count sentinel meaning "the rest of the view".
///
/// Pass it as the `count` argument of [`MemoryView::view`] to extend the
/// sub-view to the end of the source view.
pub const NPOS: usize = usize::MAX;

/// # MemoryView
///
/// Non-owning `(base, len)` window over contiguous `T` values.
///
/// ## Fields
/// - `ptr`: address of the first viewed element, not owned.
/// - `len`: number of viewed elements.
///
/// ## Example
/// ```rust
/// use memview::{MemoryView, NPOS};
///
/// let data = [1, 2, 3, 4, 5];
/// let view = MemoryView::from_array(&data);
///
/// assert_eq!(view.len(), 5);
/// assert_eq!(view.view(1, 2).unwrap(), [2, 3]);
/// assert_eq!(view.view(1, 100).unwrap(), [2, 3, 4, 5]);
/// assert!(view.view(5, NPOS).unwrap().is_empty());
/// assert!(view.view(6, NPOS).is_err());
/// ```
pub struct MemoryView<'a, T> {
    ptr: *const T,
    len: usize,
    _marker: PhantomData<&'a T>,
}

// SAFETY: a view is a shared borrow of `[T]` in all but name.
unsafe impl<T: Sync> Send for MemoryView<'_, T> {}
unsafe impl<T: Sync> Sync for MemoryView<'_, T> {}

impl<'a, T> MemoryView<'a, T> {
    /// The empty view: null base, zero length.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            ptr: ptr::null(),
            len: 0,
            _marker: PhantomData,
        }
    }

    /// View over an entire borrowed slice.
    #[inline]
    pub const fn new(slice: &'a [T]) -> Self {
        Self {
            ptr: slice.as_ptr(),
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// View over a fixed-size array. The length is `N`.
    #[inline]
    pub const fn from_array<const N: usize>(arr: &'a [T; N]) -> Self {
        Self {
            ptr: (arr as *const [T; N]).cast::<T>(),
            len: N,
            _marker: PhantomData,
        }
    }

    /// View over `len` elements starting at `ptr`.
    ///
    /// # Safety
    /// - `[ptr, ptr + len)` must be readable, properly aligned and initialised
    ///   for the whole of `'a`.
    /// - `ptr` may be null only if `len == 0`.
    #[inline]
    pub const unsafe fn from_raw_parts(ptr: *const T, len: usize) -> Self {
        Self {
            ptr,
            len,
            _marker: PhantomData,
        }
    }

    /// View over the half-open pointer range `[begin, end)`.
    ///
    /// # Safety
    /// - Same contract as [`from_raw_parts`](Self::from_raw_parts).
    /// - `begin` and `end` must belong to the same allocation with `begin <= end`.
    ///
    /// # Panics
    /// If `T` is zero-sized, as the element count cannot be derived from two addresses.
    #[inline]
    pub unsafe fn from_ptr_range(begin: *const T, end: *const T) -> Self {
        debug_assert!(begin <= end, "MemoryView::from_ptr_range: end precedes begin");
        let len = unsafe { end.offset_from(begin) } as usize;
        Self {
            ptr: begin,
            len,
            _marker: PhantomData,
        }
    }

    /// View over `len` elements at a numeric address, e.g. a memory-mapped
    /// device region.
    ///
    /// # Safety
    /// Same contract as [`from_raw_parts`](Self::from_raw_parts). The address
    /// must carry exposed provenance for the region.
    #[inline]
    pub unsafe fn from_address(address: usize, len: usize) -> Self {
        Self {
            ptr: ptr::with_exposed_provenance(address),
            len,
            _marker: PhantomData,
        }
    }

    /// Moves the view out, leaving `self` empty.
    ///
    /// ```rust
    /// use memview::MemoryView;
    ///
    /// let data = [1u8, 2, 3];
    /// let mut a = MemoryView::new(&data);
    /// let b = a.take();
    ///
    /// assert!(a.is_empty());
    /// assert!(a.data().is_null());
    /// assert_eq!(b.len(), 3);
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move-assigns `source` into `self`, leaving `source` empty.
    #[inline]
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    /// Exchanges base and length with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Forward iterator over the viewed elements.
    #[inline]
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(*self)
    }

    /// Iterator over the viewed elements in reverse index order.
    #[inline]
    pub fn iter_rev(&self) -> RevIter<'a, T> {
        RevIter::new(*self)
    }

    /// Returns true if the view has no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of viewed elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Largest element count any view can report.
    #[inline]
    pub const fn max_size() -> usize {
        usize::MAX
    }

    /// Returns the element or sub-slice at `index`, or `None` if out of bounds.
    ///
    /// Accepts the same index types as slice `get`: a `usize` or any range.
    #[inline]
    pub fn get<I: SliceIndex<[T]>>(&self, index: I) -> Option<&'a I::Output> {
        self.as_slice().get(index)
    }

    /// Returns the element at `i` without bounds checking.
    ///
    /// # Safety
    /// `i < self.len()`.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, i: usize) -> &'a T {
        debug_assert!(i < self.len, "MemoryView::get_unchecked: index {i} out of bounds for len {}", self.len);
        unsafe { &*self.ptr.add(i) }
    }

    /// Returns the element at `i`.
    ///
    /// # Errors
    /// `MemViewError::OutOfRange` when `i >= len`. Aborts instead under the
    /// `abort_on_range_error` feature.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&'a T, MemViewError> {
        check_index("MemoryView::at", i, self.len)?;
        Ok(unsafe { self.get_unchecked(i) })
    }

    /// First element.
    ///
    /// # Panics
    /// If the view is empty.
    #[inline]
    pub fn front(&self) -> &'a T {
        assert!(!self.is_empty(), "MemoryView::front: view is empty");
        unsafe { self.get_unchecked(0) }
    }

    /// Last element.
    ///
    /// # Panics
    /// If the view is empty.
    #[inline]
    pub fn back(&self) -> &'a T {
        assert!(!self.is_empty(), "MemoryView::back: view is empty");
        unsafe { self.get_unchecked(self.len - 1) }
    }

    /// First element, or `None` when empty.
    #[inline]
    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    /// Last element, or `None` when empty.
    #[inline]
    pub fn last(&self) -> Option<&'a T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Base address of the view. Null for a default or moved-from view.
    #[inline]
    pub const fn data(&self) -> *const T {
        self.ptr
    }

    /// The viewed elements as a native slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        if self.len == 0 {
            return &[];
        }
        // SAFETY: non-empty, so `ptr` is non-null and covers `len` elements for `'a`.
        unsafe { slice::from_raw_parts(self.ptr, self.len) }
    }

    /// Shifts the base forward by `n` elements. The length is **not** reduced.
    ///
    /// This is the raw "move the window start" primitive: the caller keeps
    /// track of how much of the shifted window is still valid. Use
    /// [`advance`](Self::advance) for the checked form that also shrinks the length.
    ///
    /// # Safety
    /// `[base + n, base + n + len)` must be readable for `'a`.
    #[inline]
    pub unsafe fn remove_prefix(&mut self, n: usize) {
        self.ptr = self.ptr.wrapping_add(n);
    }

    /// Drops `n` elements from the end of the view.
    ///
    /// `n > len` is a caller error. It trips a debug assertion and
    /// clamps the length to zero in release builds.
    #[inline]
    pub fn remove_suffix(&mut self, n: usize) {
        debug_assert!(
            n <= self.len,
            "MemoryView::remove_suffix: {} exceeds length {}",
            n,
            self.len
        );
        self.len = self.len.saturating_sub(n);
    }

    /// Drops `n` elements from the front, shifting the base and shrinking the length.
    ///
    /// # Errors
    /// `MemViewError::OutOfRange` when `n > len`. The view is left unchanged.
    #[inline]
    pub fn advance(&mut self, n: usize) -> Result<(), MemViewError> {
        check_position("MemoryView::advance", n, self.len)?;
        self.ptr = self.ptr.wrapping_add(n);
        self.len -= n;
        Ok(())
    }

    /// Returns a new view over `[pos, pos + min(count, len - pos))`.
    ///
    /// `count` is clamped so the sub-view never runs past the end of `self`.
    /// Pass [`NPOS`] to take everything from `pos` onward. `pos == len` is
    /// valid and yields an empty view, including on an empty source.
    ///
    /// # Errors
    /// `MemViewError::OutOfRange` when `pos > len`.
    #[inline]
    pub fn view(&self, pos: usize, count: usize) -> Result<Self, MemViewError> {
        check_position("MemoryView::view", pos, self.len)?;
        Ok(Self {
            ptr: self.ptr.wrapping_add(pos),
            len: count.min(self.len - pos),
            _marker: PhantomData,
        })
    }

    /// Sub-view from `pos` to the end. Shorthand for `view(pos, NPOS)`.
    #[inline]
    pub fn view_from(&self, pos: usize) -> Result<Self, MemViewError> {
        self.view(pos, NPOS)
    }

    /// Splits into `[0, mid)` and `[mid, len)`.
    ///
    /// Shadows the panicking slice `split_at` reached through `Deref`. Use
    /// `as_slice().split_at(mid)` for that form.
    ///
    /// # Errors
    /// `MemViewError::OutOfRange` when `mid > len`.
    #[inline]
    pub fn split_at(&self, mid: usize) -> Result<(Self, Self), MemViewError> {
        check_position("MemoryView::split_at", mid, self.len)?;
        let head = Self {
            ptr: self.ptr,
            len: mid,
            _marker: PhantomData,
        };
        let tail = Self {
            ptr: self.ptr.wrapping_add(mid),
            len: self.len - mid,
            _marker: PhantomData,
        };
        Ok((head, tail))
    }
}

#[cfg(feature = "parallel_proc")]
mod parallel {
    use rayon::prelude::*;

    use super::MemoryView;

    impl<'a, T: Sync> MemoryView<'a, T> {
        /// Parallel iterator over the viewed elements.
        #[inline]
        pub fn par_iter(&self) -> rayon::slice::Iter<'a, T> {
            self.as_slice().into_par_iter()
        }
    }
}

impl<T> Clone for MemoryView<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MemoryView<'_, T> {}

impl<T> Default for MemoryView<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for MemoryView<'_, T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsRef<[T]> for MemoryView<'_, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for MemoryView<'_, T> {
    type Output = I::Output;

    /// Bounds-checked indexing. Panics when out of range, like slice indexing.
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Debug> Debug for MemoryView<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryView")
            .field("len", &self.len)
            .field("data", &self.as_slice())
            .finish()
    }
}

impl<'b, T: PartialEq<U>, U> PartialEq<MemoryView<'b, U>> for MemoryView<'_, T> {
    #[inline]
    fn eq(&self, other: &MemoryView<'b, U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for MemoryView<'_, T> {}

impl<T: PartialEq<U>, U> PartialEq<[U]> for MemoryView<'_, T> {
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for MemoryView<'_, T> {
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<'b, T: PartialEq<U>, U> PartialEq<&'b [U]> for MemoryView<'_, T> {
    #[inline]
    fn eq(&self, other: &&'b [U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialOrd> PartialOrd for MemoryView<'_, T> {
    /// Lexicographic. A strict prefix orders before the longer view.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for MemoryView<'_, T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for MemoryView<'_, T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> From<&'a [T]> for MemoryView<'a, T> {
    #[inline]
    fn from(slice: &'a [T]) -> Self {
        Self::new(slice)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for MemoryView<'a, T> {
    #[inline]
    fn from(arr: &'a [T; N]) -> Self {
        Self::from_array(arr)
    }
}

impl<'a, T> From<&'a Vec<T>> for MemoryView<'a, T> {
    #[inline]
    fn from(vec: &'a Vec<T>) -> Self {
        Self::new(vec.as_slice())
    }
}

#[cfg(feature = "vec64")]
impl<'a, T> From<&'a Vec64<T>> for MemoryView<'a, T> {
    #[inline]
    fn from(vec: &'a Vec64<T>) -> Self {
        Self::new(&vec[..])
    }
}

impl<'a, T> IntoIterator for MemoryView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &MemoryView<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
