// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    storage::{NonTrivialStorage, Storage, TrivialStorage},
    vec::{FixedCapacityVec, NonTrivialVec, TrivialVec},
};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<S: Storage> FixedCapacityVec<S> {
    /// Moves a whole array in. `M == CAPACITY` for every caller.
    fn from_array<const M: usize>(src: [S::Item; M]) -> Self {
        debug_assert!(M <= S::CAPACITY);
        let src = ManuallyDrop::new(src);
        let mut v = Self::new();
        // SAFETY: `M` slots fit; ownership of every element moves from the
        // forgotten array into the slots.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr(), v.storage.slots_mut(), M);
            v.storage.set_len(M);
        }
        v
    }
}

impl<T, const N: usize> From<[T; N]> for NonTrivialVec<T, N> {
    fn from(src: [T; N]) -> Self {
        Self::from_array(src)
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for TrivialVec<T, N> {
    fn from(src: [T; N]) -> Self {
        Self::from_storage(TrivialStorage::from_slice(&src))
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for NonTrivialVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        Self::from_array(src.clone())
    }
}

impl<T: Copy, const N: usize> From<&[T; N]> for TrivialVec<T, N> {
    fn from(src: &[T; N]) -> Self {
        // For Copy types this is just a by-value copy of `[T; N]`.
        (*src).into()
    }
}

impl<T, const N: usize> From<NonTrivialStorage<T, N>> for NonTrivialVec<T, N> {
    fn from(storage: NonTrivialStorage<T, N>) -> Self {
        Self::from_storage(storage)
    }
}

impl<T: Copy, const N: usize> From<TrivialStorage<T, N>> for TrivialVec<T, N> {
    fn from(storage: TrivialStorage<T, N>) -> Self {
        Self::from_storage(storage)
    }
}

/// Clones `src` in if it fits, otherwise [`Error::Full`].
impl<S: Storage> TryFrom<&[S::Item]> for FixedCapacityVec<S>
where
    S::Item: Clone,
{
    type Error = Error;
    fn try_from(src: &[S::Item]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_slice(src)?;
        Ok(v)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        error::Error,
        storage::TrivialStorage,
        vec::{EmptyVec, NonTrivialVec, TrivialVec},
    };
    use alloc::{rc::Rc, string::String};

    #[test]
    fn test_from_array_moves_every_element() {
        let marker = Rc::new(());
        let v: NonTrivialVec<Rc<()>, 3> = [marker.clone(), marker.clone(), marker.clone()].into();
        assert_eq!(v.len(), 3);
        assert_eq!(Rc::strong_count(&marker), 4);
        drop(v);
        assert_eq!(Rc::strong_count(&marker), 1);
    }

    #[test]
    fn test_from_array_ref_and_trivial() {
        let words = [String::from("a"), String::from("b")];
        let v: NonTrivialVec<String, 2> = (&words).into();
        assert_eq!(v.as_slice(), &words);

        let t: TrivialVec<u16, 3> = (&[4, 5, 6]).into();
        assert!(t.is_full());
        assert_eq!(t.as_slice(), &[4, 5, 6]);
    }

    #[test]
    fn test_from_storage_conversion() {
        let mut s: TrivialStorage<i32, 4> = TrivialStorage::new();
        s.push(9);
        let v: TrivialVec<i32, 4> = s.into();
        assert_eq!(v.as_slice(), &[9]);
    }

    #[test]
    fn test_try_from_slice() {
        let v = TrivialVec::<i32, 3>::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(TrivialVec::<i32, 3>::try_from(&[1, 2, 3, 4][..]), Err(Error::Full));

        let e = EmptyVec::<i32>::try_from(&[][..]).unwrap();
        assert!(e.is_empty());
        assert_eq!(EmptyVec::<i32>::try_from(&[1][..]), Err(Error::Full));
    }
}
