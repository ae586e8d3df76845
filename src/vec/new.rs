// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::capacity_violation, storage::Storage, vec::FixedCapacityVec};

impl<S: Storage> FixedCapacityVec<S> {
    /// Constructs an empty vector.
    #[inline]
    pub fn new() -> Self {
        Self::from_storage(S::new())
    }

    /// Constructs a vector of `n` elements, the `i`-th being `f(i)`.
    ///
    /// If `f` panics, the elements built so far are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    #[track_caller]
    pub fn from_fn<F>(n: usize, f: F) -> Self
    where
        F: FnMut(usize) -> S::Item,
    {
        if n > S::CAPACITY {
            capacity_violation("from_fn", n, S::CAPACITY);
        }
        let mut v = Self::new();
        v.grow_with(n, f);
        v
    }

    /// Constructs a vector of `n` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    #[track_caller]
    pub fn from_elem(n: usize, value: S::Item) -> Self
    where
        S::Item: Clone,
    {
        if n > S::CAPACITY {
            capacity_violation("from_elem", n, S::CAPACITY);
        }
        let mut v = Self::new();
        v.resize(n, value);
        v
    }

    /// Constructs a vector of `n` default values.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    #[track_caller]
    pub fn from_default(n: usize) -> Self
    where
        S::Item: Default,
    {
        Self::from_fn(n, |_| Default::default())
    }
}

impl<S: Storage> Default for FixedCapacityVec<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::{EmptyVec, NonTrivialVec, TrivialVec};
    use alloc::{boxed::Box, string::String};

    #[test]
    fn test_from_default_value_initializes() {
        let v: TrivialVec<i32, 3> = TrivialVec::from_default(1);
        assert_eq!(v.first(), Some(&0));
        assert_eq!(v.last(), Some(&0));
        assert_eq!(v[0], 0);

        let b: NonTrivialVec<Box<i32>, 3> = NonTrivialVec::from_default(3);
        assert_eq!(b.len(), 3);
        assert!(b.iter().all(|x| **x == 0));
    }

    #[test]
    fn test_from_elem_and_from_fn() {
        let v: NonTrivialVec<String, 4> = NonTrivialVec::from_elem(3, String::from("x"));
        assert_eq!(v.as_slice(), ["x", "x", "x"]);

        let w: TrivialVec<usize, 5> = TrivialVec::from_fn(5, |i| i * i);
        assert_eq!(w.as_slice(), &[0, 1, 4, 9, 16]);
        assert!(w.is_full());
    }

    #[test]
    fn test_zero_length_constructors() {
        let v: TrivialVec<i32, 3> = TrivialVec::from_elem(0, 7);
        assert!(v.is_empty());
        let e: EmptyVec<i32> = EmptyVec::from_default(0);
        assert!(e.is_empty());
    }

    #[test]
    #[should_panic(expected = "from_elem: capacity exceeded (4 > 3)")]
    fn test_from_elem_past_capacity_panics() {
        let _: TrivialVec<i32, 3> = TrivialVec::from_elem(4, 1);
    }

    #[test]
    #[should_panic(expected = "from_fn: capacity exceeded")]
    fn test_from_fn_on_zero_capacity_panics() {
        let _: EmptyVec<i32> = EmptyVec::from_fn(1, |i| i as i32);
    }
}
