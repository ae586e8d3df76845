// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{CapacityError, capacity_violation},
    storage::Storage,
    vec::{FixedCapacityVec, extend::Rollback},
};

// Core imports
use core::ptr;

impl<S: Storage> FixedCapacityVec<S> {
    #[track_caller]
    fn check_position(op: &'static str, index: usize, len: usize) {
        if index > len {
            panic!("{op} index {index} out of bounds (len {len})");
        }
    }

    #[track_caller]
    fn check_room(&self, op: &'static str, additional: usize) {
        let required = self.len() + additional;
        if required > S::CAPACITY {
            capacity_violation(op, required, S::CAPACITY);
        }
    }

    /// Shifts `[index, len)` one slot right and writes `value` at `index`.
    ///
    /// # Safety
    ///
    /// `index <= len < CAPACITY`.
    unsafe fn insert_unchecked(&mut self, index: usize, value: S::Item) {
        let len = self.len();
        // SAFETY: the shifted range `[index, len)` lands on `[index + 1, len + 1)`,
        // which is in bounds because `len < CAPACITY`; `ptr::copy` handles the
        // overlap. Slot `index` is then a stale copy and is overwritten without
        // a drop.
        unsafe {
            let p = self.storage.slots_mut().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
            self.storage.set_len(len + 1);
        }
    }

    /// Moves the `additional` elements most recently appended to `index`,
    /// shifting `[index, len - additional)` right.
    fn rotate_appended(&mut self, index: usize, additional: usize) -> usize {
        self.as_mut_slice()[index..].rotate_right(additional);
        index
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Returns `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: S::Item) -> usize {
        Self::check_position("insert", index, self.len());
        self.check_room("insert", 1);
        // SAFETY: both preconditions were just checked.
        unsafe { self.insert_unchecked(index, value) };
        index
    }

    /// Inserts `value` at `index` if not full; otherwise hands `value` back.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: S::Item) -> Result<(), CapacityError<S::Item>> {
        Self::check_position("try_insert", index, self.len());
        if self.is_full() {
            return Err(CapacityError::new(value));
        }
        // SAFETY: both preconditions were just checked.
        unsafe { self.insert_unchecked(index, value) };
        Ok(())
    }

    /// Builds one element with `f` and inserts it at `index`.
    ///
    /// `f` sees the contents *before* anything shifts, so a new element may be
    /// derived from an existing one, including the one currently at `index`:
    ///
    /// ```
    /// use fixed_capacity_vec::TrivialVec;
    ///
    /// let mut v: TrivialVec<i32, 4> = TrivialVec::from([1, 2, 3, 0]);
    /// v.truncate(3);
    /// v.emplace(0, |cur| cur[cur.len() - 1]);
    /// assert_eq!(v.as_slice(), &[3, 1, 2, 3]);
    /// ```
    ///
    /// Returns `index`. Capacity is checked before `f` runs.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the vector is full.
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, f: F) -> usize
    where
        F: FnOnce(&[S::Item]) -> S::Item,
    {
        Self::check_position("emplace", index, self.len());
        self.check_room("emplace", 1);
        let value = f(self.as_slice());
        // SAFETY: checked above; `f` only had shared access.
        unsafe { self.insert_unchecked(index, value) };
        index
    }

    /// Inserts `n` clones of `value` at `index`.
    ///
    /// Returns `index`. If a clone panics, the vector is left as before the call.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if `len + n > CAPACITY`.
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, n: usize, value: S::Item) -> usize
    where
        S::Item: Clone,
    {
        Self::check_position("insert_n", index, self.len());
        self.check_room("insert_n", n);
        self.grow_with(n, |_| value.clone());
        self.rotate_appended(index, n)
    }

    /// Inserts clones of `src` at `index`, in order.
    ///
    /// Returns `index`. If a clone panics, the vector is left as before the call.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if `len + src.len() > CAPACITY`.
    #[track_caller]
    pub fn insert_slice(&mut self, index: usize, src: &[S::Item]) -> usize
    where
        S::Item: Clone,
    {
        Self::check_position("insert_slice", index, self.len());
        self.check_room("insert_slice", src.len());
        let base = self.len();
        self.grow_with(src.len(), |i| src[i - base].clone());
        self.rotate_appended(index, src.len())
    }

    /// Inserts the items of `iter` at `index`, in iteration order.
    ///
    /// Returns `index`. If the iterator panics, the vector is left as before the call.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or if the iterator yields more items than fit;
    /// in the latter case the items already taken are dropped first.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, index: usize, iter: I) -> usize
    where
        I: IntoIterator<Item = S::Item>,
    {
        let len = self.len();
        Self::check_position("insert_iter", index, len);
        let guard = Rollback::new(self);
        for item in iter {
            if guard.vec.try_push(item).is_err() {
                drop(guard);
                capacity_violation("insert_iter", S::CAPACITY + 1, S::CAPACITY);
            }
        }
        let added = guard.vec.len() - len;
        guard.disarm();
        self.rotate_appended(index, added)
    }
}
