// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, capacity_violation},
    storage::Storage,
    vec::FixedCapacityVec,
};

// Core imports
use core::mem;

/// Truncates back to the length seen at construction unless disarmed.
///
/// Used by operations that append one item at a time from an iterator and
/// must leave the vector unchanged if they bail out or unwind.
pub(crate) struct Rollback<'a, S: Storage> {
    pub(crate) vec: &'a mut FixedCapacityVec<S>,
    len: usize,
}

impl<'a, S: Storage> Rollback<'a, S> {
    pub(crate) fn new(vec: &'a mut FixedCapacityVec<S>) -> Self {
        let len = vec.len();
        Self { vec, len }
    }

    pub(crate) fn disarm(self) {
        mem::forget(self);
    }
}

impl<S: Storage> Drop for Rollback<'_, S> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}

/// Appends every item; overflowing the capacity is fatal.
///
/// The vector is never silently truncated. Use
/// [`try_extend_from_iter`](FixedCapacityVec::try_extend_from_iter) to
/// handle overflow.
impl<S: Storage> Extend<S::Item> for FixedCapacityVec<S> {
    #[track_caller]
    fn extend<I: IntoIterator<Item = S::Item>>(&mut self, iter: I) {
        for item in iter {
            if self.try_push(item).is_err() {
                capacity_violation("extend", S::CAPACITY + 1, S::CAPACITY);
            }
        }
    }
}

impl<S: Storage> FixedCapacityVec<S> {
    /// Appends clones of `src`.
    ///
    /// # Panics
    ///
    /// Panics if `len + src.len() > CAPACITY`.
    #[track_caller]
    pub fn extend_from_slice(&mut self, src: &[S::Item])
    where
        S::Item: Clone,
    {
        let required = self.len() + src.len();
        if required > S::CAPACITY {
            capacity_violation("extend_from_slice", required, S::CAPACITY);
        }
        let base = self.len();
        self.grow_with(src.len(), |i| src[i - base].clone());
    }

    /// Appends clones of `src` if they all fit; otherwise no-op and returns [`Error::Full`].
    #[inline]
    pub fn try_extend_from_slice(&mut self, src: &[S::Item]) -> Result<(), Error>
    where
        S::Item: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        let base = self.len();
        self.grow_with(src.len(), |i| src[i - base].clone());
        Ok(())
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// All-or-nothing:
    /// - If the iterator yields at most `spare_capacity()` items, they are
    ///   appended in order and `Ok(())` is returned.
    /// - If it yields more, the items taken so far are dropped, `self` is left
    ///   unchanged and `Err(Error::Full)` is returned.
    ///
    /// The source iterator may be partially consumed on error.
    pub fn try_extend_from_iter<I: IntoIterator<Item = S::Item>>(
        &mut self,
        iter: I,
    ) -> Result<(), Error> {
        let guard = Rollback::new(self);
        for item in iter {
            if guard.vec.try_push(item).is_err() {
                return Err(Error::Full);
            }
        }
        guard.disarm();
        Ok(())
    }

    /// Collects `iter` into a new vector, or returns [`Error::Full`] if it
    /// yields more than `CAPACITY` items.
    ///
    /// Items taken before the overflow are dropped. The source iterator stops
    /// being consumed at the first item that does not fit.
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        for item in iter {
            v.try_push(item)?;
        }
        Ok(v)
    }
}

/// Collecting is fatal on overflow; see [`FixedCapacityVec::try_from_iter`].
impl<S: Storage> FromIterator<S::Item> for FixedCapacityVec<S> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        error::Error,
        vec::{NonTrivialVec, TrivialVec},
    };
    use alloc::{boxed::Box, string::String};
    use core::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    // NOTE: NoDefault does NOT implement Default on purpose.
    #[derive(Copy, Clone, PartialEq, Eq, Debug)]
    struct NoDefault(u8);

    #[test]
    fn test_try_from_iter_non_default_type() {
        let items = [NoDefault(1), NoDefault(2), NoDefault(3)];
        let v = TrivialVec::<NoDefault, 4>::try_from_iter(items).expect("should not overflow");
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &items);

        let overflow_items = [NoDefault(1), NoDefault(2), NoDefault(3), NoDefault(4)];
        let err = TrivialVec::<NoDefault, 3>::try_from_iter(overflow_items).unwrap_err();
        assert_eq!(err, Error::Full);
    }

    #[test]
    fn test_try_from_iter_stops_at_first_overflow() {
        let pulled = Cell::new(0);
        let it = (0..10).inspect(|_| pulled.set(pulled.get() + 1));
        assert!(TrivialVec::<i32, 3>::try_from_iter(it).is_err());
        assert_eq!(pulled.get(), 4);
    }

    #[test]
    fn test_collect_non_default_type() {
        let items = [NoDefault(1), NoDefault(2), NoDefault(3)];
        let v: TrivialVec<NoDefault, 4> = items.into_iter().collect();
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &items);
    }

    #[test]
    #[should_panic(expected = "extend: capacity exceeded (3 > 2)")]
    fn test_collect_overflow_is_fatal() {
        let _v: TrivialVec<i32, 2> = (0..3).collect();
    }

    #[test]
    fn test_extend_from_slice_and_try() {
        let mut v: TrivialVec<i32, 4> = TrivialVec::new();
        v.extend_from_slice(&[1, 2]);
        assert_eq!(v.try_extend_from_slice(&[3, 4, 5]), Err(Error::Full));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.try_extend_from_slice(&[3, 4]), Ok(()));
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
        assert!(v.is_full());
    }

    #[test]
    #[should_panic(expected = "extend_from_slice: capacity exceeded (5 > 4)")]
    fn test_extend_from_slice_overflow_is_fatal() {
        let mut v: TrivialVec<i32, 4> = TrivialVec::from_elem(2, 0);
        v.extend_from_slice(&[1, 2, 3]);
    }

    #[test]
    fn test_try_extend_from_iter_all_or_nothing() {
        let mut v: NonTrivialVec<Box<i32>, 3> = NonTrivialVec::new();
        v.push(Box::new(0));
        assert_eq!(v.try_extend_from_iter((1..4).map(Box::new)), Err(Error::Full));
        assert_eq!(v.len(), 1);
        assert_eq!(v.try_extend_from_iter((1..3).map(Box::new)), Ok(()));
        let vals: alloc::vec::Vec<i32> = v.iter().map(|b| **b).collect();
        assert_eq!(vals, [0, 1, 2]);
    }

    #[test]
    fn test_try_extend_from_iter_panic_restores() {
        let mut v: NonTrivialVec<String, 4> = NonTrivialVec::new();
        v.push(String::from("keep"));
        let res = catch_unwind(AssertUnwindSafe(|| {
            let _ = v.try_extend_from_iter((0..3).map(|i| {
                if i == 2 {
                    panic!("source failed");
                }
                alloc::format!("{i}")
            }));
        }));
        assert!(res.is_err());
        assert_eq!(v.as_slice(), ["keep"]);
    }
}
