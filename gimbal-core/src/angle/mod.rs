mod core;
mod inverse;
mod normalize;
mod ops;
#[cfg(feature = "serde")]
mod serde_;

pub use self::core::Angle;
pub use normalize::{normalize_2pi, normalize_pi_minus_pi};

pub use self::core::{deg, grad, rad};
