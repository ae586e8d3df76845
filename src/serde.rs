// This file is part of fixed-capacity-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedCapacityVec`](crate::FixedCapacityVec) and
//! [`Frozen`](crate::Frozen).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence of at most `CAPACITY` elements. A
//!   longer sequence is an error; nothing is truncated.
//!
//! Elements are written into the storage as they are deserialized, so the
//! element type needs neither `Default` nor `Copy`.

// Crate imports
use crate::{frozen::Frozen, storage::Storage, vec::FixedCapacityVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<S> Serialize for FixedCapacityVec<S>
where
    S: Storage,
    S::Item: Serialize,
{
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<S>(PhantomData<S>);

impl<'de, S> de::Visitor<'de> for VecVisitor<S>
where
    S: Storage,
    S::Item: Deserialize<'de>,
{
    type Value = FixedCapacityVec<S>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", S::CAPACITY)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = FixedCapacityVec::<S>::new();
        while let Some(elem) = a.next_element::<S::Item>()? {
            out.try_push(elem).map_err(|_| {
                de::Error::custom(format_args!("too many elements (capacity {})", S::CAPACITY))
            })?;
        }
        Ok(out)
    }
}

impl<'de, S> Deserialize<'de> for FixedCapacityVec<S>
where
    S: Storage,
    S::Item: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<S>(PhantomData))
    }
}

impl<S> Serialize for Frozen<S>
where
    S: Storage,
    S::Item: Serialize,
{
    fn serialize<Z: Serializer>(&self, s: Z) -> Result<Z::Ok, Z::Error> {
        self.as_vec().serialize(s)
    }
}

impl<'de, S> Deserialize<'de> for Frozen<S>
where
    S: Storage,
    S::Item: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        FixedCapacityVec::<S>::deserialize(d).map(Frozen::from)
    }
}
