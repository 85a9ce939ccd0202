use super::Angle;
use crate::real::Real;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<T: Real + Serialize> Serialize for Angle<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.radians().serialize(s)
    }
}

impl<'de, T: Real + Deserialize<'de>> Deserialize<'de> for Angle<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = T::deserialize(d)?;
        Ok(Angle::from_radians(r))
    }
}
