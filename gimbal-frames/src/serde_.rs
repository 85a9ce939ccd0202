//! `Rotation` serializes as its bare quaternion.
//!
//! The state tag is not written. A deserialized rotation starts
//! `NotNormalized`, so whatever was stored is validated again on first use.

use crate::quaternion::Quaternion;
use crate::rotation::Rotation;
use gimbal_core::Real;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Real + Serialize> Serialize for Rotation<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.quaternion.serialize(s)
    }
}

impl<'de, T: Real + Deserialize<'de>> Deserialize<'de> for Rotation<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let q = Quaternion::<T>::deserialize(d)?;
        Ok(Rotation::from_quaternion(q))
    }
}
