// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::storage::{Storage, StorageKind};

// Core imports
use core::{fmt, marker::PhantomData, ptr::NonNull};

/// Storage with no slots. Zero-sized; its length is always 0.
pub struct EmptyStorage<T> {
    _marker: PhantomData<T>,
}

impl<T> EmptyStorage<T> {
    /// The only value of this type.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for EmptyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for EmptyStorage<T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for EmptyStorage<T> {}

impl<T> fmt::Debug for EmptyStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EmptyStorage")
    }
}

// SAFETY: there are no slots; the dangling pointer is aligned and non-null,
// which is all a zero-length slice needs, and `len` is pinned to 0.
unsafe impl<T> Storage for EmptyStorage<T> {
    type Item = T;
    const CAPACITY: usize = 0;
    const KIND: StorageKind = StorageKind::Empty;

    #[inline]
    fn new() -> Self {
        EmptyStorage::new()
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert_eq!(len, 0, "EmptyStorage has no slots");
    }

    #[inline]
    fn slots(&self) -> *const T {
        NonNull::dangling().as_ptr()
    }

    #[inline]
    fn slots_mut(&mut self) -> *mut T {
        NonNull::dangling().as_ptr()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::EmptyStorage;
    use crate::storage::Storage;
    use alloc::string::String;
    use core::mem::size_of;

    #[test]
    fn test_empty_storage_is_zero_sized() {
        assert_eq!(size_of::<EmptyStorage<u64>>(), 0);
        assert_eq!(size_of::<EmptyStorage<String>>(), 0);
    }

    #[test]
    fn test_empty_storage_views() {
        let mut s: EmptyStorage<String> = EmptyStorage::new();
        assert_eq!(s.len(), 0);
        assert!(s.as_slice().is_empty());
        assert!(s.as_mut_slice().is_empty());
        assert!(s.data().is_null());
        assert!(!s.slots().is_null());
    }
}
