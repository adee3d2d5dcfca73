//! Stateless arithmetic on 2D and 3D vectors.
//!
//! Every operation takes its operands by value and returns a fresh result.
//! Degenerate inputs such as the zero vector produce NaN instead of an error;
//! the `try_` variants report them as [`VectorError`] where that matters.

mod error;
mod norm;
mod scalar;
mod vector;

#[cfg(feature = "serde-serialize")]
mod serde;

#[cfg(test)]
mod test_util;

pub use error::{Result, VectorError};

pub mod prelude {
    pub use crate::error::{Result, VectorError};
    pub use crate::norm::{angle, mag, mag_squared, normalize, try_angle, try_normalize};
    pub use crate::scalar::{create_clamp, Abs, Acos, Finite, Hypot, One, Real, Zero};
    pub use crate::vector::{
        add, approx_equal, create_scale, cross, diff, dot, equal, midpoint, multiply, negate,
        rotate_left, rotate_right, to_vec2, Vec2, Vec3, BASIS_X, BASIS_Y, BASIS_Z, ZERO,
    };
}
