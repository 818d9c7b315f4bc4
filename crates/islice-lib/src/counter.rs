//! Pass-through iterator that counts successful pulls.

use std::iter::FusedIterator;

/// Wraps an iterator and counts the elements pulled through it.
///
/// The count grows by one for every `Some` and never for the `None` that
/// signals exhaustion. Elements are moved through untouched.
#[derive(Clone, Debug)]
pub struct IteratorCounter<I> {
    inner: I,
    count: usize,
}

impl<I: Iterator> IteratorCounter<I> {
    pub fn new(iterable: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            inner: iterable.into_iter(),
            count: 0,
        }
    }

    /// Number of elements pulled so far.
    ///
    /// Not named `count` so it cannot be shadowed by `Iterator::count`.
    pub fn pulled(&self) -> usize {
        self.count
    }

    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for IteratorCounter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.count += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: FusedIterator> FusedIterator for IteratorCounter<I> {}
