// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are live `T` values, each dropped exactly once:
//   either by the owner that takes it out, or by `destroy_range`, or by `Drop`.
// - Elements in `buf[len..N]` are dead and must never be read as `T`.

// Crate imports
use crate::storage::{Storage, StorageKind};

// Core imports
use core::{fmt, mem::MaybeUninit};

/// Storage for elements of any type.
///
/// Every slot becomes live through an explicit write and dead through an
/// explicit `drop_in_place`. Dropping the storage drops the live prefix in
/// ascending index order.
pub struct NonTrivialStorage<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> NonTrivialStorage<T, N> {
    /// An empty storage.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Count of live slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T, const N: usize> Default for NonTrivialStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for NonTrivialStorage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonTrivialStorage")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T, const N: usize> Drop for NonTrivialStorage<T, N> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        // SAFETY: `buf[..len]` was live and `len` is already 0, so nothing can
        // observe or drop these slots again.
        unsafe { self.destroy_range(0, len) }
    }
}

// SAFETY: `buf` is `N` inline slots; `len` is kept `<= N` by `set_len`'s
// contract; only `buf[..len]` is exposed as `T`.
unsafe impl<T, const N: usize> Storage for NonTrivialStorage<T, N> {
    type Item = T;
    const CAPACITY: usize = N;
    const KIND: StorageKind = StorageKind::NonTrivial;

    #[inline]
    fn new() -> Self {
        NonTrivialStorage::new()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= N);
        self.len = len;
    }

    #[inline]
    fn slots(&self) -> *const T {
        self.buf.as_ptr().cast()
    }

    #[inline]
    fn slots_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast()
    }

    #[inline]
    unsafe fn construct_at(&mut self, index: usize, value: T) {
        self.buf[index].write(value);
    }
}
