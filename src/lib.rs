//! # **memview** - *Non-owning Views over Contiguous Memory*
//!
//! A [`MemoryView`] pairs a base address with an element count. It grants
//! read and iterate access to memory it does not own, never copies it,
//! and never allocates.
//!
//! ## Highlights
//! - Bounds-checked ([`MemoryView::at`]) and unchecked ([`MemoryView::get_unchecked`]) access.
//! - O(1) sub-views with [`MemoryView::view`], using [`NPOS`] for "the rest".
//! - Prefix/suffix trimming, swapping, and explicit "move out" via [`MemoryView::take`].
//! - Lexicographic `Eq`/`Ord` across views.
//!
//! ## Range errors
//! Out-of-range conditions surface as [`MemViewError::OutOfRange`]. Building with
//! the `abort_on_range_error` feature turns every one of them into an immediate
//! `std::process::abort()`, for targets without unwinding.
//!
//! ## Example
//! ```rust
//! use memview::{MemoryView, NPOS};
//!
//! let data = [1, 2, 3, 4, 5];
//! let view = MemoryView::from_array(&data);
//!
//! let tail = view.view(2, NPOS)?;
//! assert_eq!(tail, [3, 4, 5]);
//! assert_eq!(*tail.at(0)?, 3);
//! assert!(MemoryView::new(&[1, 2]) < MemoryView::new(&[1, 2, 3]));
//! # Ok::<(), memview::MemViewError>(())
//! ```

pub mod enums {
    pub mod error;
}

pub mod structs {
    pub mod iter;
    pub mod memory_view;
}

pub mod traits {
    pub mod print;
    pub mod view;
}

mod utils;

pub use enums::error::MemViewError;
pub use structs::iter::{Iter, RevIter};
pub use structs::memory_view::{MemoryView, NPOS};
pub use traits::print::Print;
pub use traits::view::AsMemoryView;
