//! # Iter Module
//!
//! Random-access iterators over a [`MemoryView`].
//!
//! ## Behaviour
//! - [`Iter`] yields `&'a T` in index order, [`RevIter`] in reverse index order.
//! - `nth` / `nth_back` jump in O(1), and [`Index`] reads relative to the current front.
//! - Iterators compare by the address of the element they point at, like
//!   pointers. Two iterators over overlapping views that point at the same
//!   element are equal. The far end (`back`) takes no part in comparison.
//! - The view is copied in, never consumed: iterate it as often as needed.
//!
//! ## Comparing positions
//! `Iterator` also has `partial_cmp`/`eq`/`lt` methods that take the other side
//! by value and compare the *yielded elements*. Method syntax such as
//! `a.partial_cmp(&b)` therefore resolves to `Iterator::partial_cmp` and fails
//! to compile. Use the operators (`a < b`, `a == b`), the inherent
//! [`Iter::cmp_position`], or `PartialOrd::partial_cmp(&a, &b)`.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::ops::Index;
use std::{mem, ptr};

use crate::structs::memory_view::MemoryView;

/// Orders two cursors given as `(base, offset)`.
///
/// Sized elements compare by address. Zero-sized elements all share one
/// address, so they compare by offset, and only within the same base.
#[inline]
fn cmp_cursor<T>(a: (*const T, usize), b: (*const T, usize)) -> Option<Ordering> {
    if mem::size_of::<T>() == 0 {
        if !ptr::eq(a.0, b.0) {
            return None;
        }
        return Some(a.1.cmp(&b.1));
    }
    Some(a.0.wrapping_add(a.1).cmp(&b.0.wrapping_add(b.1)))
}

/// Double-ended, exact-size iterator over the elements of a [`MemoryView`].
///
/// ## Example
/// ```rust
/// use memview::MemoryView;
///
/// let data = [1, 2, 3, 4, 5];
/// let view = MemoryView::new(&data);
///
/// let mut it = view.iter();
/// assert_eq!(it.nth(2), Some(&3));
/// assert_eq!(it[0], 4);
/// assert_eq!(it.remaining(), [4, 5]);
/// assert!(view.iter() < it);
/// ```
pub struct Iter<'a, T> {
    view: MemoryView<'a, T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(view: MemoryView<'a, T>) -> Self {
        Self {
            view,
            front: 0,
            back: view.len(),
        }
    }

    /// Offset of the next front element from the start of the view.
    #[inline]
    pub fn position(&self) -> usize {
        self.front
    }

    /// The elements not yet yielded, as a view.
    #[inline]
    pub fn remaining(&self) -> MemoryView<'a, T> {
        // SAFETY: front <= back <= view.len(), so the window lies inside the view.
        unsafe {
            MemoryView::from_raw_parts(self.view.data().wrapping_add(self.front), self.back - self.front)
        }
    }

    /// The elements not yet yielded, as a native slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.remaining().as_slice()
    }

    /// Orders the element addresses the two iterators point at.
    ///
    /// `None` only for zero-sized `T` over different views.
    #[inline]
    pub fn cmp_position(&self, other: &Self) -> Option<Ordering> {
        cmp_cursor((self.view.data(), self.front), (other.view.data(), other.front))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        // SAFETY: front < back <= view.len()
        let item = unsafe { self.view.get_unchecked(self.front) };
        self.front += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.back - self.front {
            self.front = self.back;
            return None;
        }
        self.front += n;
        self.next()
    }

    #[inline]
    fn count(self) -> usize {
        self.back - self.front
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: front <= back < view.len()
        Some(unsafe { self.view.get_unchecked(self.back) })
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        if n >= self.back - self.front {
            self.back = self.front;
            return None;
        }
        self.back -= n;
        self.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T> Index<usize> for Iter<'_, T> {
    type Output = T;

    /// Element `i` places past the current front. Panics past the back.
    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> PartialEq for Iter<'_, T> {
    /// Same element address at the front. `back` is ignored.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp_position(other) == Some(Ordering::Equal)
    }
}

impl<T> PartialOrd for Iter<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_position(other)
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// Reverse-order counterpart of [`Iter`].
///
/// Random access runs backwards too: `rev[0]` is the next element yielded,
/// `rev[1]` the one before it in the view. Positions compare in traversal
/// order, so a reverse iterator that has advanced further is greater.
///
/// ```rust
/// use memview::MemoryView;
///
/// let data = [1, 2, 3, 4];
/// let view = MemoryView::new(&data);
///
/// let mut rev = view.iter_rev();
/// assert_eq!(rev.next(), Some(&4));
/// assert_eq!(rev[0], 3);
/// assert_eq!(rev[2], 1);
/// assert_eq!(rev.remaining(), [1, 2, 3]);
/// assert!(view.iter_rev() < rev);
/// ```
pub struct RevIter<'a, T> {
    inner: Iter<'a, T>,
}

impl<'a, T> RevIter<'a, T> {
    #[inline]
    pub(crate) fn new(view: MemoryView<'a, T>) -> Self {
        Self { inner: Iter::new(view) }
    }

    /// Number of elements already yielded from the back of the view.
    #[inline]
    pub fn position(&self) -> usize {
        self.inner.view.len() - self.inner.back
    }

    /// The elements not yet yielded, in view order.
    #[inline]
    pub fn remaining(&self) -> MemoryView<'a, T> {
        self.inner.remaining()
    }

    /// The elements not yet yielded, in view order, as a native slice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }

    /// Orders positions in traversal order: further along is greater.
    ///
    /// `None` only for zero-sized `T` over different views.
    #[inline]
    pub fn cmp_position(&self, other: &Self) -> Option<Ordering> {
        cmp_cursor(
            (other.inner.view.data(), other.inner.back),
            (self.inner.view.data(), self.inner.back),
        )
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth_back(n)
    }

    #[inline]
    fn count(self) -> usize {
        self.inner.count()
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.inner.next()
    }
}

impl<'a, T> DoubleEndedIterator for RevIter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

impl<T> FusedIterator for RevIter<'_, T> {}

impl<T> Clone for RevIter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Index<usize> for RevIter<'_, T> {
    type Output = T;

    /// Element `i` places past the current front, counting backwards. Panics past the end.
    #[inline]
    fn index(&self, i: usize) -> &T {
        let slice = self.as_slice();
        assert!(
            i < slice.len(),
            "RevIter: index {i} out of bounds for {} remaining",
            slice.len()
        );
        &slice[slice.len() - 1 - i]
    }
}

impl<T> PartialEq for RevIter<'_, T> {
    /// Same element address at the traversal front. The far end is ignored.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp_position(other) == Some(Ordering::Equal)
    }
}

impl<T> PartialOrd for RevIter<'_, T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cmp_position(other)
    }
}

impl<T: Debug> Debug for RevIter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevIter").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_forward_and_reverse() {
        let data = [1, 2, 3, 4];
        let view = MemoryView::new(&data);
        let fwd: Vec<_> = view.iter().copied().collect();
        let rev: Vec<_> = view.iter_rev().copied().collect();
        assert_eq!(fwd, vec![1, 2, 3, 4]);
        assert_eq!(rev, vec![4, 3, 2, 1]);

        // restartable
        assert_eq!(view.iter().count(), 4);
        assert_eq!(view.iter().count(), 4);
    }

    #[test]
    fn test_iter_exact_size_and_meet_in_middle() {
        let data = [1, 2, 3, 4, 5];
        let mut it = MemoryView::new(&data).iter();
        assert_eq!(it.len(), 5);
        assert_eq!(it.next(), Some(&1));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.len(), 3);
        assert_eq!(it.as_slice(), &[2, 3, 4]);
        assert_eq!(it.next(), Some(&2));
        assert_eq!(it.next_back(), Some(&4));
        assert_eq!(it.next(), Some(&3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_iter_random_access() {
        let data = [10, 20, 30, 40, 50, 60];
        let view = MemoryView::new(&data);
        let mut it = view.iter();
        assert_eq!(it.nth(1), Some(&20));
        assert_eq!(it.position(), 2);
        assert_eq!(it[0], 30);
        assert_eq!(it[3], 60);
        assert_eq!(it.nth_back(1), Some(&50));
        assert_eq!(it.remaining(), [30, 40]);
        assert_eq!(it.nth(5), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn test_iter_position_comparison() {
        let data = [1, 2, 3];
        let view = MemoryView::new(&data);
        let begin = view.iter();
        let mut mid = view.iter();
        mid.next();
        assert!(begin < mid);
        assert!(begin != mid);
        assert_eq!(begin, view.iter());
        assert_eq!(begin.cmp_position(&mid), Some(Ordering::Less));
        assert_eq!(PartialOrd::partial_cmp(&mid, &begin), Some(Ordering::Greater));

        let other = [1, 2, 3];
        let foreign = MemoryView::new(&other).iter();
        assert!(begin != foreign);
    }

    #[test]
    fn test_iter_overlapping_views_compare_by_address() {
        let data = [1, 2, 3, 4];
        let whole = MemoryView::new(&data);
        let tail = whole.view_from(1).unwrap_or_default();

        let mut from_whole = whole.iter();
        from_whole.next();
        let from_tail = tail.iter();
        assert_eq!(from_whole[0], from_tail[0]);
        assert!(from_whole == from_tail);
        assert_eq!(from_whole.cmp_position(&from_tail), Some(Ordering::Equal));

        assert!(whole.iter() < from_tail);
        let mut further = tail.iter();
        further.next();
        assert!(from_whole < further);
    }

    #[test]
    fn test_iter_equality_ignores_back() {
        let data = [1, 2, 3, 4];
        let view = MemoryView::new(&data);
        let full = view.iter();
        let mut trimmed = view.iter();
        trimmed.next_back();
        assert_eq!(full.len(), 4);
        assert_eq!(trimmed.len(), 3);
        assert!(full == trimmed);
    }

    #[test]
    fn test_iter_zero_sized_compares_by_offset() {
        let units = [(), (), ()];
        let view = MemoryView::from_array(&units);
        let begin = view.iter();
        let mut next = view.iter();
        next.next();
        assert!(begin < next);
        assert!(begin != next);
        assert!(begin == view.iter());
    }

    #[test]
    fn test_rev_iter_random_access() {
        let data = [10, 20, 30, 40, 50];
        let view = MemoryView::new(&data);
        let mut rev = view.iter_rev();
        assert_eq!(rev.len(), 5);
        assert_eq!(rev[0], 50);
        assert_eq!(rev[4], 10);
        assert_eq!(rev.nth(1), Some(&40));
        assert_eq!(rev.position(), 2);
        assert_eq!(rev[0], 30);
        assert_eq!(rev.remaining(), [10, 20, 30]);
        assert_eq!(rev.next_back(), Some(&10));
        assert_eq!(rev.as_slice(), &[20, 30]);
        assert_eq!(rev.nth(5), None);
        assert_eq!(rev.len(), 0);
    }

    #[test]
    #[should_panic(expected = "RevIter: index 3 out of bounds")]
    fn test_rev_iter_index_oob() {
        let data = [1, 2, 3];
        let rev = MemoryView::new(&data).iter_rev();
        let _value = rev[3];
    }

    #[test]
    fn test_rev_iter_position_comparison() {
        let data = [1, 2, 3, 4];
        let view = MemoryView::new(&data);
        let rbegin = view.iter_rev();
        let mut advanced = view.iter_rev();
        advanced.next();
        assert!(rbegin < advanced);
        assert!(rbegin != advanced);
        assert_eq!(rbegin, view.iter_rev());

        // Same traversal front through a shorter view over the same memory.
        let head = view.view(0, 3).unwrap_or_default();
        assert!(head.iter_rev() == advanced);
        assert_eq!(advanced.cmp_position(&rbegin), Some(Ordering::Greater));
    }

    #[test]
    fn test_iter_empty_view() {
        let view = MemoryView::<u8>::empty();
        let mut it = view.iter();
        assert_eq!(it.next(), None);
        assert!(it.remaining().is_empty());
        assert_eq!(it.last(), None);
        assert_eq!(view.iter_rev().next(), None);
    }

    #[test]
    fn test_iter_last() {
        let data = ['a', 'b', 'c'];
        let view = MemoryView::new(&data);
        assert_eq!(view.iter().last(), Some(&'c'));
        assert_eq!(view.iter_rev().last(), Some(&'a'));
        assert_eq!(view.into_iter().max(), Some(&'c'));
    }
}
