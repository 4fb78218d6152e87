/*
    Elementary functions
*/

//! Elementary functions over any [`FloatKind`].
//!
//! The generic functions here dispatch to the per-format kernels in
//! [`f32`](crate::elementary::f32) and [`f64`](crate::elementary::f64),
//! which are `const fn` and can be called directly when a constant is
//! needed.

pub mod f32;
pub mod f64;
mod reduce;

use num_traits::Float;

use crate::classify::{is_inf, is_nan, is_zero};
use crate::decompose::{abs, frexp, scale_by_n};
use crate::FloatKind;

/// Converts `x` from degrees to radians.
#[inline]
pub fn deg2rad<T: FloatKind>(x: T) -> T {
    x * T::DEG_TO_RAD
}

/// Converts `x` from radians to degrees.
#[inline]
pub fn rad2deg<T: FloatKind>(x: T) -> T {
    x * T::RAD_TO_DEG
}

/// Returns the correctly rounded square root of `x`.
#[inline]
pub fn sqrt<T: FloatKind>(x: T) -> T {
    Float::sqrt(x)
}

/// Returns the base-2 logarithm of `x`.
///
/// Zeros yield `-inf`, negative values and NaNs yield a NaN.
#[inline]
pub fn log2<T: FloatKind>(x: T) -> T {
    x.log2_kernel()
}

/// Returns the sine of `x` in radians.
///
/// Infinities and NaNs yield a NaN.
#[inline]
pub fn sin<T: FloatKind>(x: T) -> T {
    x.sin_kernel()
}

/// Returns `sqrt(a^2 + b^2)` without undue overflow or underflow.
///
/// An infinite argument yields `+inf` even if the other argument
/// is a NaN.
pub fn hypot<T: FloatKind>(a: T, b: T) -> T {
    euclidean_norm(&[a, b])
}

/// Returns `sqrt(a^2 + b^2 + c^2)` without undue overflow or underflow.
///
/// An infinite argument yields `+inf` even if another argument
/// is a NaN.
pub fn hypot3<T: FloatKind>(a: T, b: T, c: T) -> T {
    euclidean_norm(&[a, b, c])
}

// Squares of magnitudes in [2^-limit, 2^limit] neither overflow nor
// lose bits to underflow, for any of the summed terms that matter.
fn safe_exponent_limit<T: FloatKind>() -> i32 {
    T::EXPONENT_BIAS / 2 - 2
}

fn euclidean_norm<T: FloatKind>(values: &[T]) -> T {
    if values.iter().any(|v| is_inf(*v)) {
        return T::infinity();
    }
    if values.iter().any(|v| is_nan(*v)) {
        return T::nan();
    }

    let largest = values.iter().map(|v| abs(*v)).fold(T::zero(), |m, v| if v > m { v } else { m });
    if is_zero(largest) {
        return T::zero();
    }

    let (_, exponent) = frexp(largest);
    if exponent.abs() < safe_exponent_limit::<T>() {
        return sqrt(values.iter().fold(T::zero(), |sum, v| sum + *v * *v));
    }

    // bring the largest magnitude into [0.5, 1) by an exact power of two
    trace!("rescaling euclidean norm by 2^{}", -exponent);
    let sum = values
        .iter()
        .map(|v| scale_by_n(*v, -exponent))
        .fold(T::zero(), |sum, v| sum + v * v);
    scale_by_n(sqrt(sum), exponent)
}
