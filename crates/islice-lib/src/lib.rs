#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Lazy slicing of forward-only iterators with Python semantics.
//!
//! `islice_extended` behaves like `list(source)[start:stop:step]` while
//! touching the source as little as the arguments allow:
//! - **Forward** (non-negative bounds, positive step): streamed one element at
//!   a time, exactly like `itertools.islice`
//! - **Negative step** (non-negative bounds): the first `start + 1` elements
//!   are buffered
//! - **Negative index** (any negative bound): the whole source is buffered,
//!   since the bound is relative to an end nobody knows yet
//!
//! In every case the source is untouched until the first element is
//! requested, and each element is released as soon as it is yielded or known
//! to fall outside the slice.
//!
//! ```
//! use islice_lib::{IsliceExt, SliceError};
//!
//! let tail: Vec<u32> = (0..10)
//!     .islice_extended((Some(-3), None))
//!     .collect::<Result<_, SliceError>>()?;
//! assert_eq!(tail, [7, 8, 9]);
//! # Ok::<(), SliceError>(())
//! ```

mod colors;
mod counter;
mod error;
mod executor;
mod slice;
mod trace;

#[cfg(test)]
mod slice_tests;
#[cfg(test)]
mod test_utils;

pub use colors::Colors;
pub use counter::IteratorCounter;
pub use error::{ParseSliceError, SliceError};
pub use executor::IsliceExtended;
pub use slice::{NormalizedSlice, SliceArgs, SliceIndices, Strategy, parse_bound};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

/// Slice `iterable` lazily; see the crate docs for how much of it gets consumed.
pub fn islice_extended<T: IntoIterator>(
    iterable: T,
    args: impl Into<SliceArgs>,
) -> IsliceExtended<T::IntoIter> {
    IsliceExtended::new(iterable, args)
}

/// Method form of [`islice_extended`].
pub trait IsliceExt: Iterator + Sized {
    fn islice_extended(self, args: impl Into<SliceArgs>) -> IsliceExtended<Self> {
        IsliceExtended::new(self, args)
    }
}

impl<I: Iterator> IsliceExt for I {}
