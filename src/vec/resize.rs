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

/// Slots written during one growth call.
///
/// Until `finish`, the storage's `len` stays at `base`; if the guard is
/// dropped early (a constructor panicked), exactly the slots this call wrote
/// are destroyed and the vector is back to its pre-call state.
struct GrowGuard<'a, S: Storage> {
    storage: &'a mut S,
    base: usize,
    written: usize,
}

impl<S: Storage> GrowGuard<'_, S> {
    fn finish(self) {
        let new_len = self.base + self.written;
        // SAFETY: slots `[base, base + written)` were written by this guard and
        // `[0, base)` were already live.
        unsafe { self.storage.set_len(new_len) };
        mem::forget(self);
    }
}

impl<S: Storage> Drop for GrowGuard<'_, S> {
    fn drop(&mut self) {
        // SAFETY: these slots were written by this guard and are not yet
        // covered by `len`.
        unsafe {
            self.storage
                .destroy_range(self.base, self.base + self.written)
        }
    }
}

impl<S: Storage> FixedCapacityVec<S> {
    /// Appends `additional` elements built by `f(index)` in ascending order.
    ///
    /// Callers check capacity first.
    pub(crate) fn grow_with<F>(&mut self, additional: usize, mut f: F)
    where
        F: FnMut(usize) -> S::Item,
    {
        let base = self.len();
        debug_assert!(additional <= S::CAPACITY - base);
        let mut guard = GrowGuard {
            storage: &mut self.storage,
            base,
            written: 0,
        };
        while guard.written < additional {
            let index = guard.base + guard.written;
            let value = f(index);
            // SAFETY: `index < base + additional <= CAPACITY` and the slot is dead.
            unsafe { guard.storage.construct_at(index, value) };
            guard.written += 1;
        }
        guard.finish();
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    ///
    /// Removed elements are dropped in ascending order.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len >= len {
            return;
        }
        // SAFETY: `len` is lowered first, so a panicking destructor cannot cause
        // the tail to be dropped twice.
        unsafe {
            self.storage.set_len(new_len);
            self.storage.destroy_range(new_len, len);
        }
    }

    /// Drops every element; `len` becomes 0.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > CAPACITY`.
    #[track_caller]
    pub fn resize(&mut self, new_len: usize, value: S::Item)
    where
        S::Item: Clone,
    {
        if new_len > S::CAPACITY {
            capacity_violation("resize", new_len, S::CAPACITY);
        }
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.grow_with(new_len - len - 1, |_| value.clone());
        self.push(value);
    }

    /// Resizes to `new_len`, filling with `f()` when growing.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > CAPACITY`.
    #[track_caller]
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> S::Item,
    {
        if new_len > S::CAPACITY {
            capacity_violation("resize_with", new_len, S::CAPACITY);
        }
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
        } else {
            self.grow_with(new_len - len, |_| f());
        }
    }

    /// Resizes to `new_len`, filling with `T::default()` when growing.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > CAPACITY`.
    #[track_caller]
    pub fn resize_default(&mut self, new_len: usize)
    where
        S::Item: Default,
    {
        self.resize_with(new_len, Default::default);
    }

    /// Fallible variant of [`resize`](Self::resize).
    ///
    /// Returns [`Error::Full`] if `new_len > CAPACITY`, leaving the vector unchanged.
    #[inline]
    pub fn try_resize(&mut self, new_len: usize, value: S::Item) -> Result<(), Error>
    where
        S::Item: Clone,
    {
        if new_len > S::CAPACITY {
            return Err(Error::Full);
        }
        self.resize(new_len, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        Error,
        vec::{NonTrivialVec, TrivialVec},
    };
    use alloc::{boxed::Box, rc::Rc, string::String};
    use core::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_resize_copyable() {
        let mut a: TrivialVec<i32, 10> = TrivialVec::from_elem(10, 5);
        assert!(a.iter().all(|&x| x == 5));
        a.resize(5, 0);
        assert_eq!(a.len(), 5);
        a.resize_default(9);
        assert_eq!(a[4], 5);
        assert!(a[5..9].iter().all(|&x| x == 0));
        a.resize(10, 3);
        assert_eq!(a[4], 5);
        assert_eq!(a[8], 0);
        assert_eq!(a[9], 3);
        a.resize(5, 2);
        assert_eq!(a.as_slice(), &[5, 5, 5, 5, 5]);
    }

    #[test]
    fn test_resize_move_only() {
        let mut a: NonTrivialVec<Box<i32>, 10> = NonTrivialVec::from_default(10);
        a.resize_default(5);
        assert_eq!(a.len(), 5);
        a.resize_with(9, || Box::new(1));
        assert_eq!(a.len(), 9);
        assert_eq!(*a[8], 1);
        assert_eq!(a.capacity(), 10);
    }

    #[test]
    fn test_resize_clones_all_but_last() {
        struct Counted(Rc<Cell<usize>>);
        impl Clone for Counted {
            fn clone(&self) -> Self {
                self.0.set(self.0.get() + 1);
                Counted(Rc::clone(&self.0))
            }
        }

        let clones = Rc::new(Cell::new(0));
        let mut v: NonTrivialVec<Counted, 4> = NonTrivialVec::new();
        v.resize(4, Counted(Rc::clone(&clones)));
        assert_eq!(v.len(), 4);
        assert_eq!(clones.get(), 3);
    }

    #[test]
    fn test_resize_to_same_len_is_noop() {
        let mut v: NonTrivialVec<String, 3> = NonTrivialVec::from_elem(2, String::from("a"));
        v.resize(2, String::from("b"));
        assert_eq!(v.as_slice(), ["a", "a"]);
    }

    #[test]
    fn test_try_resize_err_is_noop() {
        let mut v: TrivialVec<i32, 2> = TrivialVec::from_elem(1, 1);
        assert_eq!(v.try_resize(3, 9), Err(Error::Full));
        assert_eq!(v.as_slice(), &[1]);
        assert_eq!(v.try_resize(2, 9), Ok(()));
        assert_eq!(v.as_slice(), &[1, 9]);
    }

    #[test]
    #[should_panic(expected = "resize: capacity exceeded (4 > 3)")]
    fn test_resize_past_capacity_panics() {
        let mut v: TrivialVec<i32, 3> = TrivialVec::new();
        v.resize(4, 0);
    }

    #[test]
    fn test_truncate_and_clear_drop_tail_once() {
        let drops = Rc::new(Cell::new(0));
        struct D(Rc<Cell<usize>>);
        impl Drop for D {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let mut v: NonTrivialVec<D, 5> = NonTrivialVec::from_fn(5, |_| D(Rc::clone(&drops)));
        v.truncate(7);
        assert_eq!(drops.get(), 0);
        v.truncate(3);
        assert_eq!(drops.get(), 2);
        v.clear();
        assert_eq!(drops.get(), 5);
        v.clear();
        assert_eq!(drops.get(), 5);
        assert!(v.is_empty());
    }

    #[test]
    fn test_failed_growth_rolls_back_only_this_call() {
        let live = Rc::new(Cell::new(0usize));
        struct Live(Rc<Cell<usize>>);
        impl Live {
            fn new(c: &Rc<Cell<usize>>) -> Self {
                c.set(c.get() + 1);
                Live(Rc::clone(c))
            }
        }
        impl Drop for Live {
            fn drop(&mut self) {
                self.0.set(self.0.get() - 1);
            }
        }

        let mut v: NonTrivialVec<Live, 8> = NonTrivialVec::from_fn(2, |_| Live::new(&live));
        assert_eq!(live.get(), 2);

        let mut built = 0;
        let res = catch_unwind(AssertUnwindSafe(|| {
            v.resize_with(6, || {
                if built == 3 {
                    panic!("constructor failed");
                }
                built += 1;
                Live::new(&live)
            });
        }));
        assert!(res.is_err());
        assert_eq!(v.len(), 2);
        assert_eq!(live.get(), 2);
        drop(v);
        assert_eq!(live.get(), 0);
    }
}
