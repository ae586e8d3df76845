// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-capacity-vec`
//!
//! A `no_std`, fixed-capacity vector whose elements live inline, with the
//! storage strategy chosen at compile time from the element type.
//!
//! The core type, [`FixedCapacityVec<S>`], holds exactly one [`Storage`] by
//! value and tracks a logical length `len ∈ 0..=CAPACITY`. It provides the
//! familiar `Vec` surface (push, pop, insert, erase, resize, assign, swap,
//! iteration, comparison) without ever allocating or reallocating.
//!
//! ## Storage strategies
//!
//! [`StorageKind::select`] is a `const fn` that maps an element type and a
//! capacity to one of three backends:
//!
//! | condition                        | storage                   | alias                |
//! |----------------------------------|---------------------------|----------------------|
//! | capacity is 0                    | [`EmptyStorage<T>`]       | [`EmptyVec<T>`]      |
//! | element has no drop glue         | [`TrivialStorage<T, N>`]  | [`TrivialVec<T, N>`] |
//! | anything else                    | [`NonTrivialStorage<T, N>`] | [`NonTrivialVec<T, N>`] |
//!
//! - The empty storage is zero-sized and reports a null data pointer.
//! - The trivial storage is `Copy`, has no destructor, and has a `const fn`
//!   API, so whole vectors can be built at compile time and frozen with
//!   [`Frozen::new`].
//! - The non-trivial storage runs destructors for exactly the live prefix.
//!
//! Every backend implements [`Storage`], and the branch on
//! [`Storage::NEEDS_DROP`] folds away at compile time, so even a
//! `NonTrivialVec<i32, N>` never walks its elements to drop them.
//!
//! ## High-level semantics
//!
//! - Capacity is fixed at compile time (`FixedCapacityVec::<S>::CAPACITY`).
//! - Length is a logical prefix: only indices `< len` are initialized.
//! - No heap allocations are performed.
//! - Positions are `usize` indices; [`FixedCapacityVec::insert`] and
//!   [`FixedCapacityVec::erase`] return the index of the first inserted
//!   element, or of the element that followed the erased range.
//! - Operations that may exceed capacity come in two flavors:
//!   - **Fatal**: the violation is reported (through `log` when that feature
//!     is enabled) and the call panics (e.g. [`FixedCapacityVec::push`],
//!     [`FixedCapacityVec::insert`], [`FixedCapacityVec::emplace`],
//!     [`FixedCapacityVec::resize`], [`Extend`], [`FromIterator`]). Nothing is
//!     ever silently truncated.
//!   - **Fallible**: return [`Error::Full`] or a [`CapacityError`] carrying
//!     the rejected element, and leave the vector unchanged (e.g.
//!     [`FixedCapacityVec::try_push`], [`FixedCapacityVec::try_insert`],
//!     [`FixedCapacityVec::try_resize`], [`FixedCapacityVec::try_extend_from_iter`],
//!     [`FixedCapacityVec::try_from_iter`], [`TryFrom<&[T]>`]).
//! - Every element is dropped exactly once, also when a `Clone`, a closure or
//!   a destructor panics halfway through an operation.
//!
//! ## Range and indexing behavior
//!
//! Indexing (`v[i]`, `v[start..end]`, …) **panics** on out-of-bounds or
//! inverted ranges, exactly like built-in slices. [`FixedCapacityVec::drain`]
//! and [`FixedCapacityVec::erase_range`] panic the same way; an empty range is
//! a no-op.
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for [`FixedCapacityVec`] and
//!   [`Frozen`] as sequences. Deserializing more than `CAPACITY` elements is
//!   an error.
//! - `log`: fatal capacity violations are logged with `log::error!` before
//!   the panic.
//!
//! ## Example
//!
//! ```rust
//! use fixed_capacity_vec::{NonTrivialVec, TrivialVec};
//!
//! let mut v: TrivialVec<u8, 4> = TrivialVec::new();
//! v.push(1);
//! v.extend_from_slice(&[2, 3]);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert!(v.try_extend_from_slice(&[4, 5]).is_err());
//!
//! let mut names: NonTrivialVec<String, 3> = NonTrivialVec::new();
//! names.push("b".to_owned());
//! names.insert(0, "a".to_owned());
//! assert_eq!(names.erase(0), 0);
//! assert_eq!(names.as_slice(), ["b"]);
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod error;
mod frozen;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod storage;
mod vec;

// Public exports (crate API surface)
pub use error::{CapacityError, Error};
pub use frozen::Frozen;
pub use iter::IntoIter;
pub use storage::{EmptyStorage, NonTrivialStorage, Storage, StorageKind, TrivialStorage};
pub use vec::{Drain, EmptyVec, FixedCapacityVec, NonTrivialVec, TrivialVec, swap};
