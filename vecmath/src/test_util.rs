use std::fmt;

use crate::scalar::Real;
use crate::vector::{Vec2, Vec3};

pub trait Components<T>: fmt::Display + Copy {
    fn components(self) -> Vec<T>;
}

impl<T: fmt::Display + Copy> Components<T> for Vec3<T> {
    fn components(self) -> Vec<T> {
        vec![self.x, self.y, self.z]
    }
}

impl<T: fmt::Display + Copy> Components<T> for Vec2<T> {
    fn components(self) -> Vec<T> {
        vec![self.x, self.y]
    }
}

#[derive(Debug, Clone)]
pub struct VecCmp<T> {
    error_margin: T,
}

impl<T: Real> VecCmp<T> {
    pub fn eq_margin<V>(&self, is: V, should: V, error_margin: T)
    where
        V: Components<T>,
    {
        for (idx, (v1, v2)) in is
            .components()
            .into_iter()
            .zip(should.components())
            .enumerate()
        {
            let diff_abs = (v1 - v2).abs();

            assert!(
                diff_abs <= error_margin,
                "is: {} should: {} (+- {:?}) @ {}",
                is,
                should,
                error_margin,
                idx
            );
        }
    }

    pub fn eq<V>(&self, is: V, should: V)
    where
        V: Components<T>,
    {
        self.eq_margin(is, should, self.error_margin)
    }
}

impl VecCmp<f32> {
    pub const DEFAULT: Self = Self { error_margin: 1e-6 };
}

impl VecCmp<f64> {
    pub const DEFAULT: Self = Self { error_margin: 1e-12 };
}

impl Default for VecCmp<f32> {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Default for VecCmp<f64> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
