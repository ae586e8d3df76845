// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<S: Storage> FixedCapacityVec<S> {
    /// Converts to `[T; M]` when `len == M`, otherwise returns [`Error::InvalidLen`].
    ///
    /// The common case is a full vector with `M == CAPACITY`. On error the
    /// vector is dropped along with its elements.
    ///
    /// ```
    /// use fixed_capacity_vec::NonTrivialVec;
    ///
    /// let v: NonTrivialVec<String, 2> = ["a".to_owned(), "b".to_owned()].into();
    /// let [a, b] = v.try_into_array().unwrap();
    /// assert_eq!((a.as_str(), b.as_str()), ("a", "b"));
    /// ```
    #[inline]
    pub fn try_into_array<const M: usize>(self) -> Result<[S::Item; M], Error> {
        if self.len() != M {
            return Err(Error::InvalidLen);
        }
        let this = ManuallyDrop::new(self);
        // SAFETY: slots `[0, M)` are live and contiguous; ownership moves into
        // the array and the storage is never dropped.
        Ok(unsafe { ptr::read(this.storage.slots().cast::<[S::Item; M]>()) })
    }
}
