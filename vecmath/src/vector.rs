use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use crate::scalar::{One, Real, Zero};

/// Two-dimensional vector.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec2<T = f64> {
    pub x: T,
    pub y: T,
}

/// Three-dimensional vector, a [`Vec2`] with a trailing `z` component.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vec3<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
pub const BASIS_X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
pub const BASIS_Y: Vec3 = rotate_right(BASIS_X);
pub const BASIS_Z: Vec3 = rotate_right(BASIS_Y);

impl<T> Vec2<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero())
    }

    pub fn unit_x() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::one(), T::zero())
    }

    pub fn unit_y() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::one())
    }

    /// Appends a `z` component. Inverse of [`to_vec2`].
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn splat(s: T) -> Self
    where
        T: Copy,
    {
        Self::new(s, s, s)
    }

    pub fn zero() -> Self
    where
        T: Zero,
    {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    pub fn unit_x() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::one(), T::zero(), T::zero())
    }

    pub fn unit_y() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::one(), T::zero())
    }

    pub fn unit_z() -> Self
    where
        T: Zero + One,
    {
        Self::new(T::zero(), T::zero(), T::one())
    }
}

impl<T: Real> Vec3<T> {
    pub fn dot(self, rhs: Self) -> T {
        dot(self, rhs)
    }

    pub fn cross(self, rhs: Self) -> Self {
        cross(self, rhs)
    }

    pub fn mag(self) -> T {
        crate::norm::mag(self)
    }

    pub fn normalize(self) -> Self {
        crate::norm::normalize(self)
    }
}

/// Component-wise addition.
///
/// ```
/// use vecmath::prelude::*;
///
/// assert_eq!(add(Vec3::new(1, 2, 3), Vec3::new(6, 5, 4)), Vec3::new(7, 7, 7));
/// ```
pub fn add<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Add<T, Output = T>,
{
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// Component-wise product. `b` acts as a per-axis scaling of `a`.
pub fn multiply<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Mul<T, Output = T>,
{
    Vec3::new(a.x * b.x, a.y * b.y, a.z * b.z)
}

/// Returns a function that scales a vector uniformly by `s`.
///
/// ```
/// use vecmath::prelude::*;
///
/// let double = create_scale(2.0);
/// assert_eq!(double(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(2.0, 4.0, 6.0));
/// ```
pub fn create_scale<T>(s: T) -> impl Fn(Vec3<T>) -> Vec3<T>
where
    T: Copy + Mul<T, Output = T>,
{
    move |v| multiply(v, Vec3::splat(s))
}

pub fn negate<T>(v: Vec3<T>) -> Vec3<T>
where
    T: Copy + One + Neg<Output = T> + Mul<T, Output = T>,
{
    create_scale(-T::one())(v)
}

/// `a - b`, expressed as `a + (-b)`.
pub fn diff<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Copy + One + Neg<Output = T> + Add<T, Output = T> + Mul<T, Output = T>,
{
    add(a, negate(b))
}

pub fn dot<T>(a: Vec3<T>, b: Vec3<T>) -> T
where
    T: Add<T, Output = T> + Mul<T, Output = T>,
{
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product. Zero for parallel operands.
pub fn cross<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Copy + Sub<T, Output = T> + Mul<T, Output = T>,
{
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Average of `a` and `b`, i.e. the point halfway between their tips.
pub fn midpoint<T>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T>
where
    T: Copy + One + Add<T, Output = T> + Mul<T, Output = T> + Div<T, Output = T>,
{
    let half = T::one() / (T::one() + T::one());
    create_scale(half)(add(a, b))
}

/// Exact component-wise equality. No tolerance is applied, see [`approx_equal`].
pub fn equal<T: PartialEq>(a: Vec3<T>, b: Vec3<T>) -> bool {
    a.x == b.x && a.y == b.y && a.z == b.z
}

/// True when every component differs by at most `epsilon`.
pub fn approx_equal<T: Real>(a: Vec3<T>, b: Vec3<T>, epsilon: T) -> bool {
    let d = diff(a, b);
    d.x.abs() <= epsilon && d.y.abs() <= epsilon && d.z.abs() <= epsilon
}

/// Shifts every component one place to the left; `x` wraps to the end.
///
/// ```
/// use vecmath::prelude::*;
///
/// assert_eq!(rotate_left(Vec3::new(1, 2, 3)), Vec3::new(2, 3, 1));
/// ```
pub const fn rotate_left<T: Copy>(v: Vec3<T>) -> Vec3<T> {
    Vec3::new(v.y, v.z, v.x)
}

/// Shifts every component one place to the right; `z` wraps to the start.
///
/// ```
/// use vecmath::prelude::*;
///
/// assert_eq!(rotate_right(Vec3::new(1, 2, 3)), Vec3::new(3, 1, 2));
/// ```
pub const fn rotate_right<T: Copy>(v: Vec3<T>) -> Vec3<T> {
    Vec3::new(v.z, v.x, v.y)
}

/// Drops the `z` component.
pub fn to_vec2<T>(v: Vec3<T>) -> Vec2<T> {
    Vec2::new(v.x, v.y)
}

impl<T> Add<Vec3<T>> for Vec3<T>
where
    T: Add<T, Output = T>,
{
    type Output = Vec3<T>;

    fn add(self, rhs: Vec3<T>) -> Self::Output {
        add(self, rhs)
    }
}

impl<T> Sub<Vec3<T>> for Vec3<T>
where
    T: Copy + One + Neg<Output = T> + Add<T, Output = T> + Mul<T, Output = T>,
{
    type Output = Vec3<T>;

    fn sub(self, rhs: Vec3<T>) -> Self::Output {
        diff(self, rhs)
    }
}

impl<T> Neg for Vec3<T>
where
    T: Copy + One + Neg<Output = T> + Mul<T, Output = T>,
{
    type Output = Vec3<T>;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}

impl<T> Mul<Vec3<T>> for Vec3<T>
where
    T: Mul<T, Output = T>,
{
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Self::Output {
        multiply(self, rhs)
    }
}

macro_rules! impl_vec3_scale {
    ( $( $num:ty )+ ) => {
        $(
            impl Mul<$num> for Vec3<$num> {
                type Output = Vec3<$num>;

                fn mul(self, rhs: $num) -> Self::Output {
                    create_scale(rhs)(self)
                }
            }

            impl Mul<Vec3<$num>> for $num {
                type Output = Vec3<$num>;

                fn mul(self, rhs: Vec3<$num>) -> Self::Output {
                    create_scale(self)(rhs)
                }
            }
        )+
    };
}

impl_vec3_scale! { i8 i16 i32 i64 i128 isize f32 f64 }

impl<T> Add<Vec2<T>> for Vec2<T>
where
    T: Add<T, Output = T>,
{
    type Output = Vec2<T>;

    fn add(self, rhs: Vec2<T>) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T> Sub<Vec2<T>> for Vec2<T>
where
    T: Sub<T, Output = T>,
{
    type Output = Vec2<T>;

    fn sub(self, rhs: Vec2<T>) -> Self::Output {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T> Neg for Vec2<T>
where
    T: Neg<Output = T>,
{
    type Output = Vec2<T>;

    fn neg(self) -> Self::Output {
        Vec2::new(-self.x, -self.y)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> From<Vec3<T>> for Vec2<T> {
    fn from(v: Vec3<T>) -> Self {
        to_vec2(v)
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
