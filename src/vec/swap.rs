// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::ptr;

impl<S: Storage> FixedCapacityVec<S> {
    /// Exchanges the contents of `self` and `other` element by element.
    ///
    /// The common prefix is swapped in place; the excess of the longer vector
    /// is moved across. No element is cloned or dropped.
    pub fn swap_with(&mut self, other: &mut Self) {
        let (a, b) = (self.len(), other.len());
        let common = a.min(b);
        self.as_mut_slice()[..common].swap_with_slice(&mut other.as_mut_slice()[..common]);
        if a > b {
            move_tail(self, other, b, a);
        } else if b > a {
            move_tail(other, self, a, b);
        }
    }
}

/// Moves `from[start..end)` to `to[start..end)`; `to.len() == start` on entry.
fn move_tail<S: Storage>(
    from: &mut FixedCapacityVec<S>,
    to: &mut FixedCapacityVec<S>,
    start: usize,
    end: usize,
) {
    debug_assert_eq!(to.len(), start);
    // SAFETY: `from` gives up the range before `to` claims it; the target
    // slots are dead and in bounds since `end <= CAPACITY`.
    unsafe {
        from.storage.set_len(start);
        ptr::copy_nonoverlapping(
            from.storage.slots().add(start),
            to.storage.slots_mut().add(start),
            end - start,
        );
        to.storage.set_len(end);
    }
}

/// Exchanges the contents of two vectors of the same type.
///
/// Same as [`FixedCapacityVec::swap_with`].
#[inline]
pub fn swap<S: Storage>(a: &mut FixedCapacityVec<S>, b: &mut FixedCapacityVec<S>) {
    a.swap_with(b);
}
