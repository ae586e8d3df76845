// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedCapacityVec` type and its inherent API.
//!
//! `FixedCapacityVec<S>` is a fixed-capacity vector over an inline
//! [`Storage`]. The storage owns the raw slots and the live count; this type
//! owns element order: shifting on insert/erase, growth and shrinkage, copy
//! and move of whole sequences, comparison and iteration.
//!
//! No heap allocations are performed.

mod assign;
mod drain;
mod erase;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod push;
mod resize;
mod split_off;
mod swap;

pub use drain::Drain;
pub use swap::swap;

// Crate imports
use crate::storage::{EmptyStorage, NonTrivialStorage, Storage, StorageKind, TrivialStorage};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, Deref, DerefMut, RangeBounds},
};

/// A fixed-capacity vector whose elements live inline in `S`.
///
/// `FixedCapacityVec<S>` holds exactly one storage by value and tracks a
/// logical length `len ∈ 0..=S::CAPACITY`. It never reallocates, never
/// allocates, and never grows past its capacity.
///
/// Pick the storage with the aliases:
///
/// - [`TrivialVec<T, N>`] for `T: Copy`. The vector is then `Copy` itself and
///   can be built in `const` contexts through [`TrivialStorage`].
/// - [`NonTrivialVec<T, N>`] for any `T`, including move-only types and types
///   with destructors.
/// - [`EmptyVec<T>`] for capacity 0. The vector is zero-sized.
///
/// [`StorageKind::select`] reports which of the three a given element type
/// and capacity call for, but the type system does not enforce it:
/// `TrivialVec<T, 0>` and `NonTrivialVec<T, 0>` compile and work, yet still
/// occupy a `usize` for the length. Only `EmptyVec<T>` takes no space.
///
/// # Layout and invariants
///
/// - Slots `[0, len)` hold live elements; slots `[len, CAPACITY)` are never
///   read as `T`.
/// - Every live element is dropped exactly once: when it is removed, when the
///   vector shrinks past it, or when the vector is dropped.
/// - Every public method leaves these invariants intact, including when an
///   element's `Clone`, a user closure, or a destructor panics.
///
/// # Capacity violations
///
/// Operations that would exceed the capacity come in two flavors:
///
/// - **Fatal** (`push`, `insert`, `emplace`, `resize`, `extend`, ...): the
///   violation is reported and the call panics. The vector is never silently
///   truncated.
/// - **Fallible** (`try_push`, `try_insert`, `try_resize`,
///   `try_extend_from_slice`, `try_extend_from_iter`, `try_from_iter`,
///   `TryFrom<&[T]>`): return an error and leave the vector unchanged.
///
/// # Positions
///
/// Positions are plain `usize` indices. Operations that insert or erase
/// return the index of the first inserted element, or of the element that now
/// follows the erased range.
///
/// # Examples
///
/// ```rust
/// use fixed_capacity_vec::NonTrivialVec;
///
/// let mut v: NonTrivialVec<String, 4> = NonTrivialVec::new();
/// v.push("b".to_owned());
/// v.insert(0, "a".to_owned());
/// v.emplace_back(|cur| format!("{}{}", cur[0], cur[1]));
/// assert_eq!(v.as_slice(), ["a", "b", "ab"]);
/// assert_eq!(v.try_push("x".to_owned()).is_ok(), true);
/// assert_eq!(v.try_push("y".to_owned()).unwrap_err().into_inner(), "y");
/// ```
pub struct FixedCapacityVec<S> {
    pub(crate) storage: S,
}

/// A vector of `Copy` elements.
pub type TrivialVec<T, const N: usize> = FixedCapacityVec<TrivialStorage<T, N>>;

/// A vector of elements of any type.
pub type NonTrivialVec<T, const N: usize> = FixedCapacityVec<NonTrivialStorage<T, N>>;

/// A vector that can never hold an element.
///
/// This is the only zero-capacity vector that occupies no memory.
/// `TrivialVec<T, 0>` and `NonTrivialVec<T, 0>` still compile and behave the
/// same, but each keeps its length field. [`StorageKind::select`] reports
/// [`StorageKind::Empty`] for them without enforcing the choice.
pub type EmptyVec<T> = FixedCapacityVec<EmptyStorage<T>>;

impl<S: Storage> FixedCapacityVec<S> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = S::CAPACITY;

    /// Wraps an existing storage. Usable in `const` contexts.
    #[inline]
    pub const fn from_storage(storage: S) -> Self {
        Self { storage }
    }

    /// The backing storage.
    #[inline]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Unwraps the backing storage.
    #[inline]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// The strategy [`StorageKind::select`] picks for this element type and capacity.
    #[inline]
    pub const fn selected_kind() -> StorageKind {
        S::SELECTED
    }

    /// Returns the capacity of this vector (always `CAPACITY`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        S::CAPACITY
    }

    /// Returns the current logical length (`0..=CAPACITY`).
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `len == CAPACITY`.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == S::CAPACITY
    }

    /// Returns `CAPACITY - len`, the number of additional elements that can be pushed.
    #[inline]
    pub fn spare_capacity(&self) -> usize {
        S::CAPACITY - self.len()
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[S::Item] {
        self.storage.as_slice()
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S::Item] {
        self.storage.as_mut_slice()
    }

    /// Returns a raw pointer to slot 0, or null when `CAPACITY == 0`.
    ///
    /// Only the first `len` slots hold elements; reading past them is
    /// undefined behavior.
    #[inline]
    pub fn as_ptr(&self) -> *const S::Item {
        self.storage.data()
    }

    /// Returns a mutable raw pointer to slot 0, or null when `CAPACITY == 0`.
    ///
    /// Writing past `len` does not change the logical contents.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut S::Item {
        if S::CAPACITY == 0 {
            core::ptr::null_mut()
        } else {
            self.storage.slots_mut()
        }
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&S::Item> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut S::Item> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, S::Item> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, S::Item> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&S::Item> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&S::Item> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut S::Item> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut S::Item> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &S::Item) -> bool
    where
        S::Item: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

/// Resolves `range` against `len`, panicking like slice indexing on an
/// inverted or out-of-bounds range, or on a bound one past `usize::MAX`.
#[track_caller]
pub(crate) fn resolve_range<R: RangeBounds<usize>>(
    op: &'static str,
    range: R,
    len: usize,
) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => match i.checked_add(1) {
            Some(start) => start,
            None => panic!("{op} range start overflows usize"),
        },
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => match i.checked_add(1) {
            Some(end) => end,
            None => panic!("{op} range end overflows usize"),
        },
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };

    if start > end {
        panic!("{op} range start > end: {start} > {end}");
    }
    if end > len {
        panic!("{op} range end {end} exceeds length {len}");
    }
    (start, end)
}

impl<S: Storage> fmt::Debug for FixedCapacityVec<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedCapacityVec")
            .field("len", &self.len())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<S: Storage> PartialEq for FixedCapacityVec<S>
where
    S::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<S: Storage> Eq for FixedCapacityVec<S> where S::Item: Eq {}
impl<S: Storage> Ord for FixedCapacityVec<S>
where
    S::Item: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<S: Storage> PartialOrd for FixedCapacityVec<S>
where
    S::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<S: Storage> Hash for FixedCapacityVec<S>
where
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Copy, const N: usize> Copy for FixedCapacityVec<TrivialStorage<T, N>> {}
impl<T: Copy> Copy for FixedCapacityVec<EmptyStorage<T>> {}

impl<S: Storage> Deref for FixedCapacityVec<S> {
    type Target = [S::Item];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<S: Storage> DerefMut for FixedCapacityVec<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<S: Storage> AsRef<[S::Item]> for FixedCapacityVec<S> {
    fn as_ref(&self) -> &[S::Item] {
        self.as_slice()
    }
}
impl<S: Storage> AsMut<[S::Item]> for FixedCapacityVec<S> {
    fn as_mut(&mut self) -> &mut [S::Item] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<S: Storage> Borrow<[S::Item]> for FixedCapacityVec<S> {
    fn borrow(&self) -> &[S::Item] {
        self.as_slice()
    }
}
impl<S: Storage> BorrowMut<[S::Item]> for FixedCapacityVec<S> {
    fn borrow_mut(&mut self) -> &mut [S::Item] {
        self.as_mut_slice()
    }
}
