// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Read-only fixed-capacity vectors.
//!
//! A [`Frozen`] is filled exactly once, when it is built, and exposes only
//! shared access afterwards: it derefs to `[T]` but not mutably, and has no
//! insert, erase, assign or resize entry points.

// Crate imports
use crate::{
    storage::{Storage, TrivialStorage},
    vec::FixedCapacityVec,
};

// Core imports
use core::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    slice,
};

/// A [`FixedCapacityVec`] whose elements can no longer change.
///
/// Build one from a finished vector, a slice, a repeated value or an
/// iterator. With [`TrivialStorage`] it can be built in a `const`:
///
/// ```
/// use fixed_capacity_vec::{FixedCapacityVec, Frozen, TrivialStorage};
///
/// const PRIMES: Frozen<TrivialStorage<u8, 8>> =
///     Frozen::new(FixedCapacityVec::from_storage(TrivialStorage::from_slice(&[2, 3, 5, 7])));
///
/// assert_eq!(PRIMES.len(), 4);
/// assert_eq!(PRIMES[3], 7);
/// ```
pub struct Frozen<S> {
    vec: FixedCapacityVec<S>,
}

impl<S: Storage> Frozen<S> {
    /// Freezes `vec`. Usable in `const` contexts.
    #[inline]
    pub const fn new(vec: FixedCapacityVec<S>) -> Self {
        Self { vec }
    }

    /// Clones `src` into a new frozen vector.
    ///
    /// # Panics
    ///
    /// Panics if `src.len() > CAPACITY`.
    #[track_caller]
    pub fn from_slice(src: &[S::Item]) -> Self
    where
        S::Item: Clone,
    {
        let mut vec = FixedCapacityVec::new();
        vec.extend_from_slice(src);
        Self { vec }
    }

    /// `n` clones of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    #[track_caller]
    pub fn from_elem(n: usize, value: S::Item) -> Self
    where
        S::Item: Clone,
    {
        Self {
            vec: FixedCapacityVec::from_elem(n, value),
        }
    }

    /// The fixed capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        S::CAPACITY
    }

    /// The frozen vector, read-only.
    #[inline]
    pub const fn as_vec(&self) -> &FixedCapacityVec<S> {
        &self.vec
    }

    /// The backing storage, read-only.
    #[inline]
    pub const fn as_storage(&self) -> &S {
        self.vec.storage()
    }

    /// Gives the elements back as a mutable vector.
    #[inline]
    pub fn into_vec(self) -> FixedCapacityVec<S> {
        self.vec
    }
}

impl<S: Storage> From<FixedCapacityVec<S>> for Frozen<S> {
    fn from(vec: FixedCapacityVec<S>) -> Self {
        Self { vec }
    }
}

/// Fatal on overflow, like collecting into [`FixedCapacityVec`].
impl<S: Storage> FromIterator<S::Item> for Frozen<S> {
    #[track_caller]
    fn from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Self {
        Self {
            vec: FixedCapacityVec::from_iter(iter),
        }
    }
}

impl<S: Storage> Deref for Frozen<S> {
    type Target = [S::Item];
    fn deref(&self) -> &[S::Item] {
        self.vec.as_slice()
    }
}

impl<S: Storage> AsRef<[S::Item]> for Frozen<S> {
    fn as_ref(&self) -> &[S::Item] {
        self
    }
}

impl<S: Storage> Borrow<[S::Item]> for Frozen<S> {
    fn borrow(&self) -> &[S::Item] {
        self
    }
}

impl<'a, S: Storage> IntoIterator for &'a Frozen<S> {
    type Item = &'a S::Item;
    type IntoIter = slice::Iter<'a, S::Item>;
    fn into_iter(self) -> Self::IntoIter {
        self.vec.iter()
    }
}

impl<S: Storage> Clone for Frozen<S>
where
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            vec: self.vec.clone(),
        }
    }
}

impl<T: Copy, const N: usize> Copy for Frozen<TrivialStorage<T, N>> {}

impl<S: Storage> fmt::Debug for Frozen<S>
where
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Frozen").field(&self.vec.as_slice()).finish()
    }
}

impl<S: Storage> PartialEq for Frozen<S>
where
    S::Item: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.vec == other.vec
    }
}
impl<S: Storage> Eq for Frozen<S> where S::Item: Eq {}
impl<S: Storage> PartialEq<FixedCapacityVec<S>> for Frozen<S>
where
    S::Item: PartialEq,
{
    fn eq(&self, other: &FixedCapacityVec<S>) -> bool {
        self.vec == *other
    }
}
impl<S: Storage> PartialOrd for Frozen<S>
where
    S::Item: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.vec.partial_cmp(&other.vec)
    }
}
impl<S: Storage> Ord for Frozen<S>
where
    S::Item: Ord,
{
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.vec.cmp(&other.vec)
    }
}
impl<S: Storage> Hash for Frozen<S>
where
    S::Item: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vec.hash(state)
    }
}
