/*
    Adjacent representable values
*/

use num_traits::One;

use crate::{FloatKind, FloatingPointView};

// Steps a non-zero, non-NaN encoding one unit away from or
// toward zero. Sign-magnitude order means moving away from zero
// is an increment of the raw bits for either sign.
#[inline]
fn step<T: FloatKind>(view: FloatingPointView<T>, away_from_zero: bool) -> T {
    let raw = view.raw();
    if away_from_zero {
        T::from_raw(raw + T::Bits::one())
    } else {
        T::from_raw(raw - T::Bits::one())
    }
}

/// Returns the representable value next to `x` in the direction of `towards`.
///
/// If either argument is a NaN, a NaN is returned. If `x == towards`,
/// `towards` is returned, so `next_after(0.0, -0.0)` is `-0.0`.
/// Stepping off a zero yields the subnormal of smallest magnitude
/// with the sign of the direction.
pub fn next_after<T: FloatKind>(x: T, towards: T) -> T {
    let view = FloatingPointView::new(x);
    if view.is_nan() || FloatingPointView::new(towards).is_nan() {
        return x + towards;
    }
    if x == towards {
        return towards;
    }
    if view.is_zero() {
        return FloatingPointView::<T>::min_subnormal(towards < x).value();
    }
    step(view, (towards > x) != view.sign())
}

/// Returns the smallest representable value greater than `x`.
///
/// `next_up(+inf)` is `+inf`, `next_up(-inf)` is the most negative
/// finite value and both zeros step to the smallest positive subnormal.
pub fn next_up<T: FloatKind>(x: T) -> T {
    let view = FloatingPointView::new(x);
    if view.is_nan() {
        return x + x;
    }
    if view.is_inf() && !view.sign() {
        return x;
    }
    if view.is_zero() {
        return FloatingPointView::<T>::min_subnormal(false).value();
    }
    step(view, !view.sign())
}

/// Returns the largest representable value less than `x`.
///
/// `next_down(-inf)` is `-inf`, `next_down(+inf)` is the largest
/// finite value and both zeros step to the smallest negative subnormal.
pub fn next_down<T: FloatKind>(x: T) -> T {
    -next_up(-x)
}

/// Returns the number of representable values between `a` and `b`,
/// counting one of the endpoints. Both zeros count as the same value.
/// The result is wrapped in an option since NaNs have no position.
pub fn ulp_distance<T: FloatKind>(a: T, b: T) -> Option<u64> {
    let (a, b) = (FloatingPointView::new(a), FloatingPointView::new(b));
    if a.is_nan() || b.is_nan() {
        return None;
    }
    Some(ordinal(a).abs_diff(ordinal(b)))
}

// Maps an encoding onto a line where adjacent values differ by one.
fn ordinal<T: FloatKind>(view: FloatingPointView<T>) -> i64 {
    let magnitude = T::widen(view.raw() & !T::SIGN_MASK) as i64;
    if view.sign() {
        -magnitude
    } else {
        magnitude
    }
}
