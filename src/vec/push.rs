// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{CapacityError, capacity_violation},
    storage::Storage,
    vec::FixedCapacityVec,
};

impl<S: Storage> FixedCapacityVec<S> {
    /// Appends `v` at index `len`.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[inline]
    #[track_caller]
    pub fn push(&mut self, v: S::Item) {
        if self.try_push(v).is_err() {
            capacity_violation("push", S::CAPACITY + 1, S::CAPACITY);
        }
    }

    /// Appends `v` if not full; otherwise hands `v` back in a [`CapacityError`].
    #[inline]
    pub fn try_push(&mut self, v: S::Item) -> Result<(), CapacityError<S::Item>> {
        let len = self.len();
        if len == S::CAPACITY {
            return Err(CapacityError::new(v));
        }
        // SAFETY: `len < CAPACITY`, so slot `len` exists and is dead; once
        // written it is live and may be counted.
        unsafe {
            self.storage.construct_at(len, v);
            self.storage.set_len(len + 1);
        }
        Ok(())
    }

    /// Appends the element built by `f`, which sees the current contents.
    ///
    /// Capacity is checked before `f` runs. Returns a reference to the new element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is full.
    #[track_caller]
    pub fn emplace_back<F>(&mut self, f: F) -> &mut S::Item
    where
        F: FnOnce(&[S::Item]) -> S::Item,
    {
        let len = self.len();
        if len == S::CAPACITY {
            capacity_violation("emplace_back", len + 1, S::CAPACITY);
        }
        let v = f(self.as_slice());
        // SAFETY: checked above; `f` only had shared access, so `len` is unchanged.
        unsafe {
            self.storage.construct_at(len, v);
            self.storage.set_len(len + 1);
        }
        &mut self.as_mut_slice()[len]
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub fn pop(&mut self) -> Option<S::Item> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        // SAFETY: slot `len - 1` is live; lowering `len` first hands ownership
        // of it to the read below.
        unsafe {
            self.storage.set_len(len - 1);
            Some(self.storage.slots().add(len - 1).read())
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::{EmptyVec, NonTrivialVec, TrivialVec};
    use alloc::{boxed::Box, string::String};

    #[derive(Debug, PartialEq)]
    struct NonCopyable {
        i: i32,
        d: f64,
    }

    #[test]
    fn test_push_up_to_capacity() {
        let mut v: TrivialVec<i32, 3> = TrivialVec::new();
        v.push(1);
        v.push(2);
        v.push(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(v.is_full());
        assert_eq!(v.try_push(4).unwrap_err().into_inner(), 4);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "push: capacity exceeded (4 > 3)")]
    fn test_push_past_capacity_is_fatal() {
        let mut v: TrivialVec<i32, 3> = TrivialVec::new();
        for i in 0..4 {
            v.push(i);
        }
    }

    #[test]
    #[should_panic(expected = "push: capacity exceeded")]
    fn test_push_into_zero_capacity_is_fatal() {
        let mut v: EmptyVec<i32> = EmptyVec::new();
        v.push(1);
    }

    #[test]
    fn test_push_pop_move_only() {
        let mut c: NonTrivialVec<Box<usize>, 6> = NonTrivialVec::new();
        for j in 0..5 {
            c.push(Box::new(j));
            assert_eq!(c.len(), j + 1);
            for (k, b) in c.iter().enumerate() {
                assert_eq!(**b, k);
            }
        }
        assert_eq!(c.pop().as_deref(), Some(&4));
        assert_eq!(c.len(), 4);
    }

    #[test]
    fn test_back_and_front_through_push_pop() {
        let mut c: TrivialVec<i32, 2> = TrivialVec::from_default(1);
        assert_eq!(c.last(), Some(&0));
        assert_eq!(c.first(), Some(&0));
        c.clear();
        c.push(1);
        assert_eq!((c.first(), c.last()), (Some(&1), Some(&1)));
        c.push(2);
        assert_eq!((c.first(), c.last()), (Some(&1), Some(&2)));
        assert_eq!(c.pop(), Some(2));
        assert_eq!((c.first(), c.last()), (Some(&1), Some(&1)));
        assert_eq!(c.pop(), Some(1));
        assert!(c.is_empty());
        assert_eq!(c.pop(), None);
    }

    #[test]
    fn test_emplace_back_builds_in_place() {
        let mut c: NonTrivialVec<NonCopyable, 2> = NonTrivialVec::new();
        c.emplace_back(|_| NonCopyable { i: 2, d: 3.5 });
        assert_eq!(c.len(), 1);
        assert_eq!(c.first(), Some(&NonCopyable { i: 2, d: 3.5 }));
        let back = c.emplace_back(|_| NonCopyable { i: 3, d: 4.5 });
        back.i += 10;
        assert_eq!(c.len(), 2);
        assert_eq!(c.first(), Some(&NonCopyable { i: 2, d: 3.5 }));
        assert_eq!(c.last(), Some(&NonCopyable { i: 13, d: 4.5 }));
    }

    #[test]
    fn test_emplace_back_reads_existing_elements() {
        let mut v: NonTrivialVec<String, 3> = NonTrivialVec::new();
        v.push(String::from("a"));
        v.emplace_back(|cur| cur[0].repeat(2));
        v.emplace_back(|cur| cur.concat());
        assert_eq!(v.as_slice(), ["a", "aa", "aaa"]);
    }

    #[test]
    #[should_panic(expected = "emplace_back: capacity exceeded (2 > 1)")]
    fn test_emplace_back_full_does_not_run_constructor() {
        let mut v: TrivialVec<i32, 1> = TrivialVec::new();
        v.push(1);
        v.emplace_back(|_| unreachable!("constructor must not run when full"));
    }
}
