/*
    Decomposition
*/

use num_traits::Zero;

use crate::{FloatKind, FloatingPointView};

/// Returns the absolute value of `x` by clearing its sign bit.
/// NaN payloads are preserved.
#[inline]
pub fn abs<T: FloatKind>(x: T) -> T {
    T::from_raw(x.to_raw() & !T::SIGN_MASK)
}

/// Returns a value with the magnitude of `magnitude` and the
/// sign bit of `sign`.
#[inline]
pub fn copy_sign<T: FloatKind>(magnitude: T, sign: T) -> T {
    T::from_raw((magnitude.to_raw() & !T::SIGN_MASK) | (sign.to_raw() & T::SIGN_MASK))
}

/// Splits `x` into a mantissa and a power of two.
///
/// For finite non-zero `x`, returns `(m, e)` with `0.5 <= |m| < 1`,
/// `m` carrying the sign of `x`, and `x == m * 2^e` exactly.
/// Subnormals are normalized first. Zeros are returned unchanged
/// with an exponent of 0, as are infinities and NaNs.
pub fn frexp<T: FloatKind>(x: T) -> (T, i32) {
    let view = FloatingPointView::new(x);
    match view.normalized() {
        Some((exponent, significand)) => {
            // leading one at FRACTION_WIDTH; a biased exponent of
            // `bias - 1` places the result in [0.5, 1)
            let mantissa = FloatingPointView::<T>::compose(
                view.sign(),
                (T::EXPONENT_BIAS - 1) as u32,
                significand & T::FRACTION_MASK,
            );
            (mantissa.value(), exponent + 1)
        }
        None if view.is_inf_or_nan() => (x + x, 0),
        None => (x, 0),
    }
}

/// Splits `x` into its fractional and integral parts, returned in
/// that order. Both parts carry the sign of `x` and their sum is `x`.
///
/// Infinities return a signed zero fractional part and the infinity
/// as the integral part. NaNs return the NaN in both parts.
pub fn modf<T: FloatKind>(x: T) -> (T, T) {
    let view = FloatingPointView::new(x);
    let sign = view.sign();
    let zero = FloatingPointView::<T>::zero(sign).value();

    if view.is_nan() {
        return (x + x, x + x);
    }
    if view.is_inf() {
        return (zero, x);
    }

    let exponent = view.exponent();
    if exponent < 0 {
        // |x| < 1
        (x, zero)
    } else if exponent >= T::FRACTION_WIDTH as i32 {
        // no fraction bits
        (zero, x)
    } else {
        let mask = T::FRACTION_MASK >> exponent as usize;
        let raw = view.raw();
        if raw & mask == T::Bits::zero() {
            (zero, x)
        } else {
            let integral = T::from_raw(raw & !mask);
            (x - integral, integral)
        }
    }
}

/// Returns `x * 2^n`, computed without intermediate overflow or
/// underflow and rounded once.
#[inline]
pub fn scale_by_n<T: FloatKind>(x: T, n: i32) -> T {
    x.scale_kernel(n)
}
