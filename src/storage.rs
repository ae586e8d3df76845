// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw-slot storage backends and the compile-time selector that picks one.
//!
//! A storage owns `CAPACITY` inline slots and a live count `len`. It knows
//! nothing about shifting or element order; that is the job of
//! [`FixedCapacityVec`](crate::FixedCapacityVec). Three backends exist:
//!
//! - [`EmptyStorage`]: capacity 0, zero-sized, `data()` is null.
//! - [`TrivialStorage`]: `T: Copy`, itself `Copy`, no destructor, and usable
//!   in `const` contexts.
//! - [`NonTrivialStorage`]: any `T`; every slot transition goes through an
//!   explicit write or `drop_in_place`, and the live prefix is dropped when
//!   the storage is.
//!
//! [`StorageKind::select`] is the selector. It is a `const fn`, so every
//! branch taken on [`Storage::SELECTED`] or [`Storage::NEEDS_DROP`] folds away
//! at monomorphization.

mod empty;
mod non_trivial;
mod trivial;

pub use empty::EmptyStorage;
pub use non_trivial::NonTrivialStorage;
pub use trivial::TrivialStorage;

// Core imports
use core::{mem::needs_drop, ptr, slice};

/// The three storage strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    /// No slots at all.
    Empty,
    /// Slots are plain bits: no destructor runs when one goes dead.
    Trivial,
    /// Slots hold values whose destruction has side effects.
    NonTrivial,
}

impl StorageKind {
    /// Picks the strategy for `capacity` elements of `T`.
    ///
    /// `Empty` when `capacity == 0`, `Trivial` when `T` has no drop glue,
    /// `NonTrivial` otherwise. Moves and copies in Rust are always bitwise, so
    /// drop glue is the only property that matters.
    ///
    /// ```
    /// use fixed_capacity_vec::StorageKind;
    ///
    /// const K: StorageKind = StorageKind::select::<u32>(4);
    /// assert_eq!(K, StorageKind::Trivial);
    /// assert_eq!(StorageKind::select::<String>(4), StorageKind::NonTrivial);
    /// assert_eq!(StorageKind::select::<String>(0), StorageKind::Empty);
    /// ```
    #[must_use]
    pub const fn select<T>(capacity: usize) -> Self {
        if capacity == 0 {
            Self::Empty
        } else if needs_drop::<T>() {
            Self::NonTrivial
        } else {
            Self::Trivial
        }
    }
}

/// Inline slot storage backing a [`FixedCapacityVec`](crate::FixedCapacityVec).
///
/// # Safety
///
/// Implementors must guarantee that:
///
/// - `slots()`/`slots_mut()` point at `CAPACITY` contiguous, properly aligned
///   slots of `Item` (a dangling, aligned, non-null pointer when
///   `CAPACITY == 0`), stable for as long as the storage is not moved;
/// - `len()` never exceeds `CAPACITY` and slots `[0, len)` hold live values;
/// - slots `[len, CAPACITY)` are never read as `Item`.
pub unsafe trait Storage: Sized {
    /// Element type.
    type Item;

    /// Number of slots.
    const CAPACITY: usize;

    /// The strategy this backend implements.
    const KIND: StorageKind;

    /// What [`StorageKind::select`] picks for this element type and capacity.
    const SELECTED: StorageKind = StorageKind::select::<Self::Item>(Self::CAPACITY);

    /// Whether dead slots need an explicit destructor call.
    const NEEDS_DROP: bool = matches!(Self::SELECTED, StorageKind::NonTrivial);

    /// An empty storage.
    fn new() -> Self;

    /// Count of live slots.
    fn len(&self) -> usize;

    /// Sets the count of live slots without touching any slot.
    ///
    /// # Safety
    ///
    /// `len <= CAPACITY`, and slots `[0, len)` must hold live values.
    unsafe fn set_len(&mut self, len: usize);

    /// Pointer to slot 0.
    fn slots(&self) -> *const Self::Item;

    /// Mutable pointer to slot 0.
    fn slots_mut(&mut self) -> *mut Self::Item;

    /// Pointer to slot 0, or null when there are no slots.
    #[inline]
    fn data(&self) -> *const Self::Item {
        if Self::CAPACITY == 0 {
            ptr::null()
        } else {
            self.slots()
        }
    }

    /// Live prefix as a slice.
    #[inline]
    fn as_slice(&self) -> &[Self::Item] {
        // SAFETY: by the trait contract `slots()` is valid for `len()` live values.
        unsafe { slice::from_raw_parts(self.slots(), self.len()) }
    }

    /// Live prefix as a mutable slice.
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [Self::Item] {
        let len = self.len();
        // SAFETY: as above, and `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.slots_mut(), len) }
    }

    /// Writes `value` into slot `index`. Does not change `len`.
    ///
    /// # Safety
    ///
    /// `index < CAPACITY` and the slot must be dead; a live value there would
    /// be overwritten without being dropped.
    #[inline]
    unsafe fn construct_at(&mut self, index: usize, value: Self::Item) {
        debug_assert!(index < Self::CAPACITY);
        // SAFETY: `index` is in bounds per the caller.
        unsafe { ptr::write(self.slots_mut().add(index), value) }
    }

    /// Destroys slots `[start, end)` in ascending order. Does not change `len`.
    ///
    /// If a destructor panics, the remaining slots of the range are still
    /// destroyed before the panic propagates.
    ///
    /// # Safety
    ///
    /// `start <= end <= CAPACITY`, every slot in the range must be live, and
    /// none of them may be read again as `Item`.
    #[inline]
    unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= Self::CAPACITY);
        if Self::NEEDS_DROP {
            // SAFETY: the range is in bounds and live per the caller.
            unsafe {
                let first = self.slots_mut().add(start);
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
            }
        }
    }
}
