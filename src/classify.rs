/*
    Classification
*/

use crate::{FloatKind, FloatingPointView};

/// Returns true if `x` is a NaN of either sign.
#[inline]
pub fn is_nan<T: FloatKind>(x: T) -> bool {
    FloatingPointView::new(x).is_nan()
}

/// Returns true if `x` is an infinity of either sign.
#[inline]
pub fn is_inf<T: FloatKind>(x: T) -> bool {
    FloatingPointView::new(x).is_inf()
}

/// Returns true if `x` is a zero of either sign.
#[inline]
pub fn is_zero<T: FloatKind>(x: T) -> bool {
    FloatingPointView::new(x).is_zero()
}

/// Returns true if `x` is neither an infinity nor a NaN.
#[inline]
pub fn is_finite<T: FloatKind>(x: T) -> bool {
    FloatingPointView::new(x).is_finite()
}

/// Returns the raw sign bit of `x`.
///
/// This is set for `-0.0` and for NaNs with the sign bit set,
/// neither of which is negative in the numerical sense.
#[inline]
pub fn sign_bit<T: FloatKind>(x: T) -> bool {
    FloatingPointView::new(x).sign()
}
