// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedCapacityVec`](crate::FixedCapacityVec).
//!
//! - `IntoIter<S>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&FixedCapacityVec` and `&mut FixedCapacityVec` iterate as slices.

// Crate imports
use crate::{storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::{fmt, iter::FusedIterator, ptr, slice};

/// Owned iterator returned by `FixedCapacityVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are dropped
/// with the iterator.
pub struct IntoIter<S: Storage> {
    // `v.len()` is 0: the iterator, not the vector, owns `[front, back)`.
    pub(crate) v: FixedCapacityVec<S>,
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

impl<S: Storage> IntoIter<S> {
    pub(crate) fn new(mut v: FixedCapacityVec<S>) -> Self {
        let back = v.len();
        // SAFETY: ownership of `[0, back)` passes to the iterator.
        unsafe { v.storage.set_len(0) };
        Self { v, front: 0, back }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[S::Item] {
        // SAFETY: `[front, back)` is live and owned by the iterator.
        unsafe {
            slice::from_raw_parts(self.v.storage.slots().add(self.front), self.back - self.front)
        }
    }

    /// Moves the element at `i` out. The caller has already excluded it from
    /// `[front, back)`.
    unsafe fn read(&self, i: usize) -> S::Item {
        // SAFETY: upheld by the caller.
        unsafe { ptr::read(self.v.storage.slots().add(i)) }
    }
}

impl<S: Storage> Iterator for IntoIter<S> {
    type Item = S::Item;
    fn next(&mut self) -> Option<S::Item> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was live and is now outside `[front, back)`.
            Some(unsafe { self.read(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<S::Item> {
        let rem = self.back - self.front;
        let skip_from = self.front;
        if n >= rem {
            self.front = self.back;
            // SAFETY: the skipped range left `[front, back)` above.
            unsafe { self.v.storage.destroy_range(skip_from, skip_from + rem) };
            return None;
        }
        let i = self.front + n; // n < rem == back - front
        self.front = i + 1;
        // SAFETY: `i` and the skipped `[skip_from, i)` are no longer in
        // `[front, back)`; the yielded value is read before the others drop.
        unsafe {
            let out = self.read(i);
            self.v.storage.destroy_range(skip_from, i);
            Some(out)
        }
    }
}

impl<S: Storage> DoubleEndedIterator for IntoIter<S> {
    fn next_back(&mut self) -> Option<S::Item> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was live and is now outside `[front, back)`.
            Some(unsafe { self.read(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<S::Item> {
        let rem = self.back - self.front;
        let skip_to = self.back;
        if n >= rem {
            self.back = self.front;
            // SAFETY: the skipped range left `[front, back)` above.
            unsafe { self.v.storage.destroy_range(self.front, skip_to) };
            None
        } else {
            self.back -= n + 1;
            // SAFETY: as in `nth`, mirrored.
            unsafe {
                let out = self.read(self.back);
                self.v.storage.destroy_range(self.back + 1, skip_to);
                Some(out)
            }
        }
    }
}
impl<S: Storage> FusedIterator for IntoIter<S> {}
impl<S: Storage> ExactSizeIterator for IntoIter<S> {}

impl<S: Storage> Drop for IntoIter<S> {
    fn drop(&mut self) {
        let (front, back) = (self.front, self.back);
        self.front = back;
        // SAFETY: the remaining range is live and owned by the iterator.
        unsafe { self.v.storage.destroy_range(front, back) };
    }
}

impl<S: Storage> fmt::Debug for IntoIter<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, S: Storage> IntoIterator for &'a FixedCapacityVec<S> {
    type Item = &'a S::Item;
    type IntoIter = slice::Iter<'a, S::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, S: Storage> IntoIterator for &'a mut FixedCapacityVec<S> {
    type Item = &'a mut S::Item;
    type IntoIter = slice::IterMut<'a, S::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<S: Storage> IntoIterator for FixedCapacityVec<S> {
    type Item = S::Item;
    type IntoIter = IntoIter<S>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
