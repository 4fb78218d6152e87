/*
    Rounding to integral values
*/

use num_traits::{One, Zero};

use crate::{FloatKind, FloatingPointView};

/// Rounding modes for rounding to an integral value.
///
/// The first two modes round to the nearest integer and differ
/// only in how they break ties; the remaining modes are directed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round to nearest, ties to the even integer.
    NearestEven,
    /// Round to nearest, ties away from zero.
    NearestAway,
    /// Round toward positive infinity.
    ToPositive,
    /// Round toward negative infinity.
    ToNegative,
    /// Round toward zero.
    ToZero,
}

/// Directions a magnitude can be rounded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundingDirection {
    ToZero,
    AwayZero,
    ToEven,
}

impl RoundingMode {
    /// Translates a `RoundingMode` and sign bit to a `RoundingDirection`
    /// and a boolean indicating if the direction only specifies tie-breaking behavior.
    pub fn direction(&self, sign: bool) -> (bool, RoundingDirection) {
        match (self, sign) {
            (RoundingMode::NearestEven, _) => (true, RoundingDirection::ToEven),
            (RoundingMode::NearestAway, _) => (true, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, false) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToPositive, true) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, false) => (false, RoundingDirection::ToZero),
            (RoundingMode::ToNegative, true) => (false, RoundingDirection::AwayZero),
            (RoundingMode::ToZero, _) => (false, RoundingDirection::ToZero),
        }
    }
}

// Returns true if the rounding information implies the integer
// magnitude should be incremented by 1.
//  `lsb`: least significant bit of the truncated integer
//  `half_bit`: first bit below the binary point
//  `sticky_bit`: OR of every bit below `half_bit`
fn round_requires_increment(
    sign: bool,
    lsb: bool,
    half_bit: bool,
    sticky_bit: bool,
    rm: RoundingMode,
) -> bool {
    match rm.direction(sign) {
        (true, RoundingDirection::ToEven) => {
            // tie => increment if lsb since we want it to be 0
            half_bit && (sticky_bit || lsb)
        }
        (true, RoundingDirection::AwayZero) => {
            // tie requires increment
            half_bit
        }
        (false, RoundingDirection::AwayZero) => {
            // increment if not exact
            half_bit || sticky_bit
        }
        _ => false,
    }
}

/// Rounds `x` to an integral value in the format of `x` using the
/// rounding mode `rm`.
///
/// NaNs, infinities, zeros and values without fraction bits are
/// returned unchanged. Otherwise the result carries the sign of `x`,
/// so rounding a small negative value toward zero yields `-0.0`.
pub fn round_to_integral<T: FloatKind>(x: T, rm: RoundingMode) -> T {
    let view = FloatingPointView::new(x);
    if view.is_inf_or_nan() || view.is_zero() {
        return x;
    }

    let sign = view.sign();
    let exponent = view.exponent();
    if exponent >= T::FRACTION_WIDTH as i32 {
        // already integral
        return x;
    }

    if exponent < 0 {
        // magnitude below 1: the integer part is 0
        let half_bit = exponent == -1;
        let sticky_bit = exponent < -1 || view.fraction() != T::Bits::zero();
        return if round_requires_increment(sign, false, half_bit, sticky_bit, rm) {
            FloatingPointView::<T>::one(sign).value()
        } else {
            FloatingPointView::<T>::zero(sign).value()
        };
    }

    // 0 <= exponent < FRACTION_WIDTH: the low `trim` bits are fractional
    let trim = (T::FRACTION_WIDTH as i32 - exponent) as usize;
    let one = T::Bits::one();
    let frac_mask = (one << trim) - one;
    let raw = view.raw();
    if raw & frac_mask == T::Bits::zero() {
        return x;
    }

    let half_mask = one << (trim - 1);
    let half_bit = raw & half_mask != T::Bits::zero();
    let sticky_bit = raw & (half_mask - one) != T::Bits::zero();
    let lsb = (view.significand() >> trim) & one == one;

    let truncated = raw & !frac_mask;
    if round_requires_increment(sign, lsb, half_bit, sticky_bit, rm) {
        // a carry out of the fraction field bumps the exponent
        T::from_raw(truncated + (one << trim))
    } else {
        T::from_raw(truncated)
    }
}

/// Rounds `x` toward negative infinity.
#[inline]
pub fn floor<T: FloatKind>(x: T) -> T {
    round_to_integral(x, RoundingMode::ToNegative)
}

/// Rounds `x` toward positive infinity.
#[inline]
pub fn ceil<T: FloatKind>(x: T) -> T {
    round_to_integral(x, RoundingMode::ToPositive)
}

/// Rounds `x` toward zero.
#[inline]
pub fn trunc<T: FloatKind>(x: T) -> T {
    round_to_integral(x, RoundingMode::ToZero)
}

/// Rounds `x` to the nearest integer, breaking ties away from zero.
#[inline]
pub fn round<T: FloatKind>(x: T) -> T {
    round_to_integral(x, RoundingMode::NearestAway)
}

/// Rounds `x` to the nearest integer, breaking ties to the even integer.
#[inline]
pub fn round_even<T: FloatKind>(x: T) -> T {
    round_to_integral(x, RoundingMode::NearestEven)
}
