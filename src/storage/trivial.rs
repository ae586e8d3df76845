// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read as `T`.
// - Dropping or overwriting a slot never needs a destructor (`T: Copy`).

// Crate imports
use crate::storage::{Storage, StorageKind};

// Core imports
use core::{fmt, mem::MaybeUninit, ptr, slice};

/// Storage for `Copy` elements.
///
/// The storage is itself `Copy` and has no destructor, and its inherent API
/// is `const`, so a whole vector of trivial elements can be built and queried
/// at compile time:
///
/// ```
/// use fixed_capacity_vec::TrivialStorage;
///
/// const S: TrivialStorage<i32, 10> = TrivialStorage::from_slice(&[1, 2, 3, 4]);
/// const _: () = assert!(S.len() == 4);
/// const THIRD: i32 = *S.as_slice().last().unwrap();
/// assert_eq!(THIRD, 4);
/// ```
#[derive(Clone, Copy)]
pub struct TrivialStorage<T: Copy, const N: usize> {
    buf: [MaybeUninit<T>; N],
    len: usize,
}

impl<T: Copy, const N: usize> TrivialStorage<T, N> {
    /// An empty storage.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [MaybeUninit::uninit(); N],
            len: 0,
        }
    }

    /// Copies `src` into slots `[0, src.len())`.
    ///
    /// # Panics
    ///
    /// Panics (or fails to compile, in a `const` context) if `src.len() > N`.
    pub const fn from_slice(src: &[T]) -> Self {
        assert!(src.len() <= N, "TrivialStorage::from_slice: capacity exceeded");
        let mut out = Self::new();
        while out.len < src.len() {
            out.buf[out.len] = MaybeUninit::new(src[out.len]);
            out.len += 1;
        }
        out
    }

    /// Always `N`.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
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

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Live prefix as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Live prefix as a mutable slice.
    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub const fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            // SAFETY: `i < len`, so the slot is initialized.
            Some(unsafe { self.buf[i].assume_init_ref() })
        } else {
            None
        }
    }

    /// Pointer to slot 0, or null when `N == 0`.
    #[inline]
    pub const fn data(&self) -> *const T {
        if N == 0 {
            ptr::null()
        } else {
            self.buf.as_ptr().cast::<T>()
        }
    }

    /// Appends `v`.
    ///
    /// # Panics
    ///
    /// Panics if the storage is full.
    #[inline]
    pub const fn push(&mut self, v: T) {
        assert!(self.len < N, "TrivialStorage::push: capacity exceeded");
        self.buf[self.len] = MaybeUninit::new(v);
        self.len += 1;
    }

    /// Removes and returns the last element, if any.
    #[inline]
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was the last live one before the decrement.
        Some(unsafe { self.buf[self.len].assume_init() })
    }

    /// Shrinks to `new_len`; a no-op if `new_len >= len`. No slot is touched.
    #[inline]
    pub const fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Sets the length to `new_len`, filling newly exposed slots with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `new_len > N`.
    pub const fn resize(&mut self, new_len: usize, value: T) {
        assert!(new_len <= N, "TrivialStorage::resize: capacity exceeded");
        while self.len < new_len {
            self.buf[self.len] = MaybeUninit::new(value);
            self.len += 1;
        }
        self.len = new_len;
    }

    /// Sets the length to 0.
    #[inline]
    pub const fn clear(&mut self) {
        self.len = 0;
    }
}

impl<T: Copy, const N: usize> Default for TrivialStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for TrivialStorage<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrivialStorage")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

// SAFETY: `buf` is `N` inline slots; `len` is kept `<= N` by every method and
// `set_len`'s contract; only `buf[..len]` is exposed as `T`.
unsafe impl<T: Copy, const N: usize> Storage for TrivialStorage<T, N> {
    type Item = T;
    const CAPACITY: usize = N;
    const KIND: StorageKind = StorageKind::Trivial;

    #[inline]
    fn new() -> Self {
        TrivialStorage::new()
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
}

#[cfg(test)]
mod tests {
    // Imports
    use super::TrivialStorage;
    use crate::storage::Storage;

    const FOUR: TrivialStorage<i32, 10> = TrivialStorage::from_slice(&[1, 2, 3, 4]);

    const BUILT: TrivialStorage<u8, 4> = {
        let mut s = TrivialStorage::new();
        s.push(7);
        s.push(8);
        s.push(9);
        let _ = s.pop();
        s.resize(4, 1);
        s.truncate(3);
        s
    };

    #[test]
    fn test_const_construction_from_slice() {
        const LEN: usize = FOUR.len();
        assert_eq!(LEN, 4);
        assert_eq!(FOUR.as_slice(), &[1, 2, 3, 4]);
        assert_eq!(FOUR.capacity(), 10);
        assert!(!FOUR.is_full());
    }

    #[test]
    fn test_const_mutation_sequence() {
        const FIRST: u8 = match BUILT.get(0) {
            Some(v) => *v,
            None => 0,
        };
        assert_eq!(FIRST, 7);
        assert_eq!(BUILT.as_slice(), &[7, 8, 1]);
        assert_eq!(BUILT.get(3), None);
    }

    #[test]
    fn test_is_copy_and_copies_are_independent() {
        let mut a: TrivialStorage<i32, 3> = TrivialStorage::from_slice(&[1, 2]);
        let b = a;
        a.as_mut_slice()[0] = 10;
        a.push(3);
        assert_eq!(a.as_slice(), &[10, 2, 3]);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_truncate_and_clear_only_move_len() {
        let mut s: TrivialStorage<i32, 5> = TrivialStorage::from_slice(&[1, 2, 3, 4, 5]);
        s.truncate(9);
        assert_eq!(s.len(), 5);
        s.truncate(2);
        assert_eq!(s.as_slice(), &[1, 2]);
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn test_resize_fills_new_slots() {
        let mut s: TrivialStorage<i32, 5> = TrivialStorage::from_slice(&[1]);
        s.resize(4, 9);
        assert_eq!(s.as_slice(), &[1, 9, 9, 9]);
        s.resize(2, 0);
        assert_eq!(s.as_slice(), &[1, 9]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_push_past_capacity_panics() {
        let mut s: TrivialStorage<i32, 1> = TrivialStorage::from_slice(&[1]);
        s.push(2);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_from_slice_past_capacity_panics() {
        let _ = TrivialStorage::<i32, 2>::from_slice(&[1, 2, 3]);
    }

    #[test]
    fn test_trait_view_matches_inherent_view() {
        let s: TrivialStorage<i32, 4> = TrivialStorage::from_slice(&[4, 5]);
        assert_eq!(Storage::as_slice(&s), s.as_slice());
        assert_eq!(Storage::len(&s), 2);
        assert_eq!(Storage::data(&s), s.data());
        let z: TrivialStorage<i32, 0> = TrivialStorage::new();
        assert!(z.data().is_null());
    }
}
