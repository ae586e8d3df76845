// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedCapacityVec`.
//!
//! [`Error`] covers capacity and bounds conditions reported by the `try_*`
//! family. [`CapacityError`] is returned when a single element was rejected,
//! and hands that element back to the caller.
//!
//! Capacity violations in the non-`try_` API are not errors: they are fatal
//! and go through [`capacity_violation`].

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedCapacityVec`](crate::FixedCapacityVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity.
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// An operation required a specific length, which was not met.
    ///
    /// Currently used by [`FixedCapacityVec::try_into_array`](crate::FixedCapacityVec::try_into_array).
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}

/// The element a full vector refused to take.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T> {
    element: T,
}

impl<T> CapacityError<T> {
    pub(crate) const fn new(element: T) -> Self {
        Self { element }
    }

    /// Returns the rejected element.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError: ")?;
        fmt::Display::fmt(&Error::Full, f)
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Error::Full, f)
    }
}

impl<T> CoreError for CapacityError<T> {}

impl<T> From<CapacityError<T>> for Error {
    fn from(_: CapacityError<T>) -> Self {
        Error::Full
    }
}

/// Reports a write past the fixed capacity and aborts the operation.
///
/// Never returns. With the `log` feature the violation is logged first.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn capacity_violation(op: &'static str, required: usize, capacity: usize) -> ! {
    #[cfg(feature = "log")]
    log::error!("{op}: {required} elements requested, capacity is {capacity}");
    panic!("{op}: capacity exceeded ({required} > {capacity})")
}
