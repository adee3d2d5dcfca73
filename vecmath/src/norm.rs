use crate::{
    error::{Result, VectorError},
    scalar::{create_clamp, Real},
    vector::{create_scale, dot, Vec3},
};

/// Euclidean length.
///
/// Composed from `hypot`, so components near the limits of the float range do not
/// overflow or underflow in an intermediate square.
pub fn mag<T: Real>(v: Vec3<T>) -> T {
    v.x.hypot(&v.y).hypot(&v.z)
}

pub fn mag_squared<T: Real>(v: Vec3<T>) -> T {
    dot(v, v)
}

/// Scales `v` to unit length.
///
/// The zero vector has no direction; normalizing it yields NaN in every
/// component. Use [`try_normalize`] to get an error instead.
pub fn normalize<T: Real>(v: Vec3<T>) -> Vec3<T> {
    create_scale(T::one() / mag(v))(v)
}

/// Like [`normalize`], but reports a degenerate input instead of returning NaN.
///
/// Fails with [`VectorError::ZeroMagnitude`] for the zero vector and with
/// [`VectorError::NonFinite`] when the magnitude or its reciprocal is not finite,
/// e.g. for subnormal components.
pub fn try_normalize<T: Real>(v: Vec3<T>) -> Result<Vec3<T>> {
    let m = check_magnitude(mag(v))?;
    let inv = check_finite(T::one() / m)?;
    Ok(create_scale(inv)(v))
}

/// Angle between `a` and `b` in radians, within `[0, π]`.
///
/// The cosine is clamped to `[-1, 1]` before `acos` to absorb rounding. The angle
/// against a zero vector is NaN.
///
/// ```
/// use vecmath::prelude::*;
///
/// assert_eq!(angle(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)), 0.0);
/// assert!(angle(ZERO, BASIS_X).is_nan());
/// ```
pub fn angle<T: Real>(a: Vec3<T>, b: Vec3<T>) -> T {
    angle_from_cosine(cosine(a, b, mag(a), mag(b)))
}

/// Like [`angle`], but fails instead of returning NaN.
///
/// Besides zero or non-finite magnitudes, the cosine itself must be finite: the
/// dot product or the product of the magnitudes can overflow or underflow even
/// when each magnitude is fine on its own.
pub fn try_angle<T: Real>(a: Vec3<T>, b: Vec3<T>) -> Result<T> {
    let mag_a = check_magnitude(mag(a))?;
    let mag_b = check_magnitude(mag(b))?;
    let cos = check_finite(cosine(a, b, mag_a, mag_b))?;
    Ok(angle_from_cosine(cos))
}

fn cosine<T: Real>(a: Vec3<T>, b: Vec3<T>, mag_a: T, mag_b: T) -> T {
    dot(a, b) / (mag_a * mag_b)
}

fn angle_from_cosine<T: Real>(cos: T) -> T {
    let clamp = create_clamp(-T::one(), T::one());
    clamp(cos).acos()
}

fn check_magnitude<T: Real>(m: T) -> Result<T> {
    let m = check_finite(m)?;
    if m == T::zero() {
        Err(VectorError::ZeroMagnitude)
    } else {
        Ok(m)
    }
}

fn check_finite<T: Real>(n: T) -> Result<T> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(VectorError::NonFinite)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use crate::test_util::VecCmp;
    use crate::vector::{BASIS_X, BASIS_Y, ZERO};

    use super::*;

    #[test]
    fn vec3_mag() {
        assert_eq!(mag(BASIS_X), 1.0);
        assert_eq!(mag(Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(mag(Vec3::new(2.0, 3.0, 6.0)), 7.0);
        assert_eq!(mag(ZERO), 0.0);
        assert_eq!(mag_squared(Vec3::new(1.0, 2.0, 3.0)), 14.0);
    }

    #[test]
    fn vec3_mag_extreme_components() {
        let big: f64 = mag(Vec3::new(1e200, 1e200, 0.0));
        assert!(big.is_finite());
        assert!((big / 1e200 - std::f64::consts::SQRT_2).abs() < 1e-12);

        let small: f64 = mag(Vec3::new(3e-200, 4e-200, 0.0));
        assert!(small > 0.0);
        assert!((small / 1e-200 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn vec3_normalize() {
        let is = normalize(Vec3::new(12.1, 234.1, -1234.5));
        let should = Vec3::new(
            0.00962947543657918,
            0.1863024958432385,
            -0.9824452418559502,
        );

        VecCmp::<f64>::DEFAULT.eq(is, should);
        assert_eq!(normalize(BASIS_X), BASIS_X);
    }

    #[test]
    fn vec3_normalize_unit_length() {
        let samples: [Vec3; 4] = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-6.0, 7.0, 0.2),
            Vec3::new(1e-150, 0.0, -1e-150),
            Vec3::new(0.0, 0.0, 1e250),
        ];

        for v in samples {
            assert!((mag(normalize(v)) - 1.0).abs() < 1e-12, "{}", v);
        }
    }

    #[test]
    fn vec3_normalize_zero_is_nan() {
        let n = normalize(ZERO);

        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn vec3_try_normalize() {
        assert_eq!(try_normalize(ZERO), Err(VectorError::ZeroMagnitude));
        assert_eq!(
            try_normalize(Vec3::new(f64::INFINITY, 0.0, 0.0)),
            Err(VectorError::NonFinite)
        );
        assert_eq!(
            try_normalize(Vec3::new(f64::NAN, 1.0, 0.0)),
            Err(VectorError::NonFinite)
        );
        assert_eq!(try_normalize(Vec3::new(0.0, 2.0, 0.0)), Ok(BASIS_Y));
    }

    #[test]
    fn vec3_try_normalize_subnormal() {
        let tiny: Vec3 = Vec3::new(5e-324, 0.0, 0.0);

        assert!(normalize(tiny).x.is_infinite());
        assert_eq!(try_normalize(tiny), Err(VectorError::NonFinite));
    }

    #[test]
    fn vec3_angle() {
        assert!((angle(BASIS_X, BASIS_Y) - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(angle(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 2.0, 3.0)), 0.0);
        assert_eq!(angle(BASIS_X, -BASIS_X), std::f64::consts::PI);
        assert!(angle(ZERO, BASIS_X).is_nan());
        assert!(angle(BASIS_X, ZERO).is_nan());
    }

    #[test]
    fn vec3_angle_clamps_rounding() {
        // dot / (mag * mag) rounds to just above 1 here
        let v: Vec3 = Vec3::new(3.0, 3.0, 3.0);

        let a = angle(v, v);
        assert!(!a.is_nan());
        assert!(a.abs() < 1e-6);
    }

    #[test]
    fn vec3_try_angle() {
        assert_eq!(try_angle(ZERO, BASIS_X), Err(VectorError::ZeroMagnitude));
        assert_eq!(try_angle(BASIS_X, ZERO), Err(VectorError::ZeroMagnitude));

        let a = try_angle(BASIS_X, BASIS_Y).unwrap_or(f64::NAN);
        assert!((a - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn vec3_try_angle_degenerate_cosine() {
        // dot and mag * mag both underflow to zero
        let tiny: Vec3 = Vec3::new(1e-200, 0.0, 0.0);
        assert!(angle(tiny, tiny).is_nan());
        assert_eq!(try_angle(tiny, tiny), Err(VectorError::NonFinite));

        // dot and mag * mag both overflow to infinity
        let huge: Vec3 = Vec3::new(1e200, 0.0, 0.0);
        assert!(angle(huge, huge).is_nan());
        assert_eq!(try_angle(huge, huge), Err(VectorError::NonFinite));

        assert_eq!(try_angle(huge, BASIS_Y), Ok(FRAC_PI_2));
    }

    #[test]
    fn vec3_f32() {
        let v: Vec3<f32> = Vec3::new(3.0, 0.0, 4.0);

        assert_eq!(mag(v), 5.0);
        VecCmp::<f32>::DEFAULT.eq(normalize(v), Vec3::new(0.6, 0.0, 0.8));
    }
}
