// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::ptr;

impl<S: Storage> FixedCapacityVec<S> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`, moved over.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len();
        if at > len {
            return Err(Error::OutOfBounds);
        }

        let tail_len = len - at;
        let mut other = Self::new();
        // SAFETY: `self` gives up `[at, len)` before the bits move, so each
        // element has exactly one owner throughout.
        unsafe {
            self.storage.set_len(at);
            ptr::copy_nonoverlapping(
                self.storage.slots().add(at),
                other.storage.slots_mut(),
                tail_len,
            );
            other.storage.set_len(tail_len);
        }
        Ok(other)
    }
}
