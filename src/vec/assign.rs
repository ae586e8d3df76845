// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::capacity_violation,
    storage::Storage,
    vec::{FixedCapacityVec, extend::Rollback},
};

// Core imports
use core::mem;

impl<S: Storage> Clone for FixedCapacityVec<S>
where
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        let src = self.as_slice();
        let mut v = Self::new();
        v.grow_with(src.len(), |i| src[i].clone());
        v
    }

    /// Adjusts the length to `source.len()` first, then clone-assigns the
    /// elements both vectors share and clones the rest in.
    fn clone_from(&mut self, source: &Self) {
        self.assign_shared(source.as_slice());
    }
}

impl<S: Storage> FixedCapacityVec<S> {
    /// `src.len() <= CAPACITY` is checked by the caller.
    fn assign_shared(&mut self, src: &[S::Item])
    where
        S::Item: Clone,
    {
        self.truncate(src.len());
        let (shared, rest) = src.split_at(self.len());
        self.as_mut_slice().clone_from_slice(shared);
        self.extend_from_slice(rest);
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Existing elements are reused through `clone_from` where the lengths
    /// overlap.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > CAPACITY`; the vector is left unchanged.
    #[track_caller]
    pub fn assign_from_slice(&mut self, src: &[S::Item])
    where
        S::Item: Clone,
    {
        if src.len() > S::CAPACITY {
            capacity_violation("assign_from_slice", src.len(), S::CAPACITY);
        }
        self.assign_shared(src);
    }

    /// Replaces the contents with `n` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`; the vector is left unchanged.
    #[track_caller]
    pub fn assign_elem(&mut self, n: usize, value: S::Item)
    where
        S::Item: Clone,
    {
        if n > S::CAPACITY {
            capacity_violation("assign_elem", n, S::CAPACITY);
        }
        self.clear();
        self.resize(n, value);
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// # Panics
    ///
    /// Panics if the iterator yields more than `CAPACITY` items. The vector is
    /// then empty.
    #[track_caller]
    pub fn assign_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S::Item>,
    {
        self.clear();
        let guard = Rollback::new(self);
        for item in iter {
            if guard.vec.try_push(item).is_err() {
                drop(guard);
                capacity_violation("assign_iter", S::CAPACITY + 1, S::CAPACITY);
            }
        }
        guard.disarm();
    }

    /// Moves every element into a new vector, leaving `self` empty.
    ///
    /// A plain move (`let b = a;`) already transfers the contents and makes
    /// `a` unusable; `take` is for when the source must stay usable.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}
