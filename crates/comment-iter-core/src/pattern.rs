//! Aggregate and Iterator abstractions
//!
//! An [`Aggregate`] hands out cursors over its contents; an
//! [`ElementIterator`] is such a cursor. Both are statically typed over the
//! element they yield, so callers never downcast.

use crate::error::Result;

/// A forward-only cursor over the elements of an aggregate
pub trait ElementIterator {
    /// Element produced by [`ElementIterator::next`]
    type Item;

    /// Whether at least one more element is available
    fn has_next(&self) -> bool;

    /// Return the element under the cursor and advance by one.
    ///
    /// Fails with [`IterError::OutOfRange`](crate::IterError::OutOfRange)
    /// once the cursor is exhausted; the cursor does not move in that case.
    fn next(&mut self) -> Result<Self::Item>;
}

/// Anything that can produce an [`ElementIterator`] over its contents
pub trait Aggregate {
    /// Cursor type, possibly borrowing from the aggregate
    type Iter<'a>: ElementIterator
    where
        Self: 'a;

    /// Create a fresh cursor positioned before the first element
    fn iterator(&self) -> Self::Iter<'_>;

    /// Traverse the aggregate with a `std` iterator
    fn elements(&self) -> Elements<Self::Iter<'_>> {
        Elements::new(self.iterator())
    }
}

/// Adapter exposing an [`ElementIterator`] as a [`std::iter::Iterator`].
///
/// Yields elements while `has_next()` holds and stops at exhaustion.
#[derive(Debug, Clone)]
pub struct Elements<I> {
    inner: I,
}

impl<I: ElementIterator> Elements<I> {
    /// Wrap a cursor
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I: ElementIterator> Iterator for Elements<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.inner.has_next() {
            return None;
        }
        ElementIterator::next(&mut self.inner).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IterError;

    struct Countdown {
        remaining: usize,
    }

    impl ElementIterator for Countdown {
        type Item = usize;

        fn has_next(&self) -> bool {
            self.remaining > 0
        }

        fn next(&mut self) -> Result<usize> {
            if self.remaining == 0 {
                return Err(IterError::out_of_range(0, 0));
            }
            self.remaining -= 1;
            Ok(self.remaining)
        }
    }

    struct Range3;

    impl Aggregate for Range3 {
        type Iter<'a> = Countdown;

        fn iterator(&self) -> Countdown {
            Countdown { remaining: 3 }
        }
    }

    #[test]
    fn test_elements_stops_at_exhaustion() {
        let values: Vec<usize> = Elements::new(Countdown { remaining: 3 }).collect();
        assert_eq!(values, vec![2, 1, 0]);
    }

    #[test]
    fn test_provided_elements() {
        assert_eq!(Range3.elements().sum::<usize>(), 3);
        assert_eq!(Range3.elements().count(), 3);
    }
}
