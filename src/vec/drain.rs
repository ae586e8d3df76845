// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::IntoIter,
    storage::Storage,
    vec::{FixedCapacityVec, resolve_range},
};

// Core imports
use core::{fmt, iter::FusedIterator, ops::RangeBounds, ptr};

/// Owned iterator returned by [`FixedCapacityVec::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - Internally just wraps an `IntoIter` over a temporary vector holding the
///   drained elements; the parent is already compacted when `drain` returns.
pub struct Drain<'a, S: Storage> {
    pub(crate) _parent: &'a mut FixedCapacityVec<S>,
    pub(crate) iter: IntoIter<S>,
}

impl<S: Storage> Iterator for Drain<'_, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<S::Item> {
        self.iter.nth(n)
    }
}
impl<S: Storage> DoubleEndedIterator for Drain<'_, S> {
    fn next_back(&mut self) -> Option<S::Item> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<S::Item> {
        self.iter.nth_back(n)
    }
}
impl<S: Storage> ExactSizeIterator for Drain<'_, S> {}
impl<S: Storage> FusedIterator for Drain<'_, S> {}

impl<S: Storage> fmt::Debug for Drain<'_, S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter.as_slice()).finish()
    }
}

impl<S: Storage> FixedCapacityVec<S> {
    /// Removes the specified range of elements and returns them as an iterator.
    ///
    /// Elements in `range` are moved into a temporary vector and yielded by
    /// value. The remainder of the vector is shifted left before this returns,
    /// so leaking the iterator loses only the drained elements.
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use fixed_capacity_vec::TrivialVec;
    /// let mut v: TrivialVec<_, 4> = [1, 2, 3, 4].into();
    /// let drained: TrivialVec<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, S>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len();
        let (start, end) = resolve_range("drain", range, len);

        let range_len = end - start;
        let mut tmp = Self::new();
        // SAFETY: the drained range moves to `tmp` and the tail moves down over
        // it; `len` is updated on both sides before any user code can run.
        unsafe {
            let base = self.storage.slots_mut();
            ptr::copy_nonoverlapping(base.add(start), tmp.storage.slots_mut(), range_len);
            tmp.storage.set_len(range_len);
            ptr::copy(base.add(end), base.add(start), len - end);
            self.storage.set_len(len - range_len);
        }

        Drain {
            _parent: self,
            iter: tmp.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::{NonTrivialVec, TrivialVec};
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::ops::Bound;

    #[test]
    fn test_drain_non_default_type() {
        #[derive(Copy, Clone, Debug, PartialEq, Eq)]
        struct NoDefault(i32); // intentionally no Default

        let mut v: TrivialVec<NoDefault, 5> = TrivialVec::new();
        v.extend_from_slice(&[NoDefault(1), NoDefault(2), NoDefault(3), NoDefault(4)]);

        let drained: Vec<_> = v.drain(1..3).collect();
        assert_eq!(drained, [NoDefault(2), NoDefault(3)]);

        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &[NoDefault(1), NoDefault(4)]);
    }

    #[test]
    fn test_drain_empty_range_and_everything() {
        let mut v: NonTrivialVec<String, 4> = NonTrivialVec::new();
        v.extend(["a", "b", "c"].map(String::from));
        assert_eq!(v.drain(2..2).count(), 0);
        assert_eq!(v.len(), 3);
        let all: Vec<String> = v.drain(..).rev().collect();
        assert_eq!(all, ["c", "b", "a"]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drain_dropped_early_drops_unyielded() {
        let marker = Rc::new(());
        let mut v: NonTrivialVec<Rc<()>, 4> = NonTrivialVec::from_elem(4, marker.clone());
        {
            let mut d = v.drain(1..);
            let _one = d.next();
        }
        assert_eq!(v.len(), 1);
        assert_eq!(Rc::strong_count(&marker), 2);
    }

    #[test]
    #[should_panic(expected = "drain range end overflows usize")]
    fn test_drain_inclusive_end_at_max_panics() {
        let mut v: TrivialVec<i32, 4> = TrivialVec::from([1, 2, 3, 4]);
        let _ = v.drain(..=usize::MAX);
    }

    #[test]
    #[should_panic(expected = "drain range start overflows usize")]
    fn test_drain_excluded_start_at_max_panics() {
        let mut v: TrivialVec<i32, 4> = TrivialVec::from([1, 2, 3, 4]);
        let _ = v.drain((Bound::Excluded(usize::MAX), Bound::Unbounded));
    }

    #[test]
    #[should_panic(expected = "drain range start > end: 3 > 1")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_inverted_range_panics() {
        let mut v: TrivialVec<i32, 4> = TrivialVec::from([1, 2, 3, 4]);
        v.drain(3..1);
    }
}
