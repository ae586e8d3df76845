// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    storage::Storage,
    vec::{FixedCapacityVec, resolve_range},
};

// Core imports
use core::{ops::RangeBounds, ptr};

/// Closes the gap left by an erased range once its elements are destroyed,
/// even if one of their destructors panics.
struct CloseGap<'a, S: Storage> {
    storage: &'a mut S,
    start: usize,
    end: usize,
    len: usize,
}

impl<S: Storage> Drop for CloseGap<'_, S> {
    fn drop(&mut self) {
        let tail = self.len - self.end;
        // SAFETY: `[end, len)` is live and `[start, end)` has been destroyed;
        // the tail moves down over the dead slots.
        unsafe {
            let base = self.storage.slots_mut();
            ptr::copy(base.add(self.end), base.add(self.start), tail);
            self.storage.set_len(self.start + tail);
        }
    }
}

/// Compacts the survivors of `retain` when dropped.
///
/// While the guard is alive the storage's `len` is 0, so a panic in the
/// predicate or a destructor cannot expose a hole.
struct RetainGuard<'a, S: Storage> {
    storage: &'a mut S,
    processed: usize,
    deleted: usize,
    len: usize,
}

impl<S: Storage> Drop for RetainGuard<'_, S> {
    fn drop(&mut self) {
        // SAFETY: `[processed, len)` is live and still unvisited; it moves down
        // next to the kept prefix `[0, processed - deleted)`.
        unsafe {
            if self.deleted > 0 {
                let base = self.storage.slots_mut();
                ptr::copy(
                    base.add(self.processed),
                    base.add(self.processed - self.deleted),
                    self.len - self.processed,
                );
            }
            self.storage.set_len(self.len - self.deleted);
        }
    }
}

impl<S: Storage> FixedCapacityVec<S> {
    /// Removes and returns the element at `index`, shifting subsequent
    /// elements left.
    ///
    /// # Safety
    ///
    /// `index < len`.
    unsafe fn take_at(&mut self, index: usize) -> S::Item {
        let len = self.len();
        // SAFETY: the value is read out before its slot is overwritten by the
        // shift; `len` then drops by one so the stale last slot is dead.
        unsafe {
            let p = self.storage.slots_mut().add(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            self.storage.set_len(len - 1);
            out
        }
    }

    /// Drops the element at `index` and shifts the rest left.
    ///
    /// Returns `index`, which now names the element that followed the erased
    /// one (or `len` if it was the last).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len();
        if index >= len {
            panic!("erase index {index} out of bounds (len {len})");
        }
        // SAFETY: bounds checked; the vector is consistent before the value drops.
        drop(unsafe { self.take_at(index) });
        index
    }

    /// Drops the elements in `range` and shifts the tail left.
    ///
    /// Returns the range's start. An empty range is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len();
        let (start, end) = resolve_range("erase_range", range, len);
        if start == end {
            return start;
        }
        // SAFETY: `len` is lowered to `start` before anything drops; the guard
        // restores the tail whether or not a destructor panics.
        unsafe {
            self.storage.set_len(start);
            let gap = CloseGap {
                storage: &mut self.storage,
                start,
                end,
                len,
            };
            gap.storage.destroy_range(start, end);
        }
        start
    }

    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<S::Item> {
        if index >= self.len() {
            return None;
        }
        // SAFETY: bounds checked.
        Some(unsafe { self.take_at(index) })
    }

    /// Like [`remove`](Self::remove), but reports [`Error::OutOfBounds`].
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<S::Item, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Removes and returns the element at `index` by moving the last element
    /// into its place.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<S::Item> {
        let len = self.len();
        if index >= len {
            return None;
        }
        let last = len - 1;
        // SAFETY: both `index` and `last` are live; the last slot is dead once
        // `len` drops.
        unsafe {
            let base = self.storage.slots_mut();
            let out = ptr::read(base.add(index));
            if index != last {
                ptr::copy_nonoverlapping(base.add(last), base.add(index), 1);
            }
            self.storage.set_len(last);
            Some(out)
        }
    }

    /// Like [`swap_remove`](Self::swap_remove), but reports [`Error::OutOfBounds`].
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<S::Item, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }

    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element once, in order. Rejected
    /// elements are dropped in place.
    pub fn retain<F: FnMut(&S::Item) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](Self::retain), but the predicate may mutate the elements.
    pub fn retain_mut<F: FnMut(&mut S::Item) -> bool>(&mut self, mut f: F) {
        let len = self.len();
        // SAFETY: the guard takes over the live range and restores `len`.
        unsafe { self.storage.set_len(0) };
        let mut g = RetainGuard {
            storage: &mut self.storage,
            processed: 0,
            deleted: 0,
            len,
        };
        while g.processed < g.len {
            let i = g.processed;
            // SAFETY: `i < len`, so the slot is live and not yet moved.
            let cur = unsafe { &mut *g.storage.slots_mut().add(i) };
            if !f(cur) {
                g.processed += 1;
                g.deleted += 1;
                // SAFETY: counted as processed first, so the guard never touches it again.
                unsafe { g.storage.destroy_range(i, i + 1) };
                continue;
            }
            if g.deleted > 0 {
                // SAFETY: the destination `i - deleted` is a dead slot.
                unsafe {
                    let base = g.storage.slots_mut();
                    ptr::copy_nonoverlapping(base.add(i), base.add(i - g.deleted), 1);
                }
            }
            g.processed += 1;
        }
    }
}
