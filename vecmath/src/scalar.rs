use std::{
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

pub trait Zero {
    fn zero() -> Self;
}

pub trait One {
    fn one() -> Self;
}

pub trait Abs {
    type Output;

    fn abs(&self) -> Self::Output;
}

pub trait Hypot {
    type Output;

    fn hypot(&self, other: &Self) -> Self::Output;
}

pub trait Acos {
    type Output;

    fn acos(&self) -> Self::Output;
}

pub trait Finite {
    fn is_finite(&self) -> bool;
}

/// Component type for the operations that need a square root or an inverse cosine.
pub trait Real:
    Copy
    + fmt::Debug
    + PartialOrd
    + Zero
    + One
    + Abs<Output = Self>
    + Hypot<Output = Self>
    + Acos<Output = Self>
    + Finite
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Div<Self, Output = Self>
    + Neg<Output = Self>
{
}

macro_rules! impl_nums_zero {
    ( $( $num:ty )+ ) => {
        $(
            impl Zero for $num {
                fn zero() -> Self {
                    0 as $num
                }
            }
        )+
    };
}

macro_rules! impl_nums_one {
    ( $( $num:ty )+ ) => {
        $(
            impl One for $num {
                fn one() -> Self {
                    1 as $num
                }
            }
        )+
    };
}

macro_rules! impl_inums_abs {
    ( $( $num:ty )+ ) => {
        $(
            impl Abs for $num {
                type Output = Self;

                fn abs(&self) -> Self::Output {
                    (*self).abs()
                }
            }
        )+
    };
}

macro_rules! impl_float_real {
    ( $( $float:ty )+ ) => {
        $(
            impl Hypot for $float {
                type Output = Self;

                fn hypot(&self, other: &Self) -> Self::Output {
                    (*self).hypot(*other)
                }
            }

            impl Acos for $float {
                type Output = Self;

                fn acos(&self) -> Self::Output {
                    (*self).acos()
                }
            }

            impl Finite for $float {
                fn is_finite(&self) -> bool {
                    (*self).is_finite()
                }
            }

            impl Real for $float {}
        )+
    };
}

impl_nums_zero! { u8 u16 u32 u64 u128 usize }
impl_nums_zero! { i8 i16 i32 i64 i128 isize }
impl_nums_zero! { f32 f64 }

impl_nums_one! { u8 u16 u32 u64 u128 usize }
impl_nums_one! { i8 i16 i32 i64 i128 isize }
impl_nums_one! { f32 f64 }

impl_inums_abs! { i8 i16 i32 i64 i128 isize f32 f64 }

impl_float_real! { f32 f64 }

/// Returns a function that restricts its argument to `[min, max]`.
///
/// Equivalent to `min(max(n, min), max)`, except that NaN is passed through
/// instead of being replaced by a bound. With `min > max` every input maps to `max`.
///
/// ```
/// use vecmath::prelude::*;
///
/// let clamp = create_clamp(-1.0, 1.0);
/// assert_eq!(clamp(5.0), 1.0);
/// assert_eq!(clamp(-5.0), -1.0);
/// assert!(clamp(f64::NAN).is_nan());
/// ```
pub fn create_clamp<T>(min: T, max: T) -> impl Fn(T) -> T
where
    T: Copy + PartialOrd + fmt::Debug,
{
    if min > max {
        log::warn!("Clamp bounds are inverted: `{:?}` > `{:?}`", min, max);
    }

    move |n| {
        let n = if n < min { min } else { n };
        if n > max {
            max
        } else {
            n
        }
    }
}
