// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedCapacityVec`](crate::FixedCapacityVec).
//!
//! `Index` and `IndexMut` forward to the live slice, so they mirror slice
//! behavior:
//! - panics on out-of-bounds;
//! - supports every [`SliceIndex`], including inclusive ranges;
//! - views are restricted to the initialized prefix `[0..len)`.

// Crate imports
use crate::{storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<S: Storage, I: SliceIndex<[S::Item]>> Index<I> for FixedCapacityVec<S> {
    type Output = I::Output;
    #[inline]
    fn index(&self, i: I) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<S: Storage, I: SliceIndex<[S::Item]>> IndexMut<I> for FixedCapacityVec<S> {
    #[inline]
    fn index_mut(&mut self, i: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}
