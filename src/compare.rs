/*
    Comparison and selection
*/

use num_traits::{Float, NumCast, One};

use crate::{decompose::abs, FloatKind, FloatingPointView};

/// Absolute tolerance used by `are_nearly_equal`.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

/// Returns the smaller of `first` and `second`.
///
/// A NaN operand is treated as missing: the other operand is
/// returned, and `second` is returned when both are NaNs.
/// `-0.0` is ordered below `+0.0`.
/// These are the `fmin`/`fmax` semantics, chosen over a plain
/// `second < first` selection so the result does not depend on
/// argument order or float width.
pub fn min<T: FloatKind>(first: T, second: T) -> T {
    let (a, b) = (FloatingPointView::new(first), FloatingPointView::new(second));
    if a.is_nan() {
        second
    } else if b.is_nan() || first < second {
        first
    } else if second < first {
        second
    } else if a.sign() {
        first
    } else {
        second
    }
}

/// Returns the larger of `first` and `second`.
///
/// A NaN operand is treated as missing: the other operand is
/// returned, and `second` is returned when both are NaNs.
/// `+0.0` is ordered above `-0.0`.
/// These are the `fmin`/`fmax` semantics, chosen over a plain
/// `second < first` selection so the result does not depend on
/// argument order or float width.
pub fn max<T: FloatKind>(first: T, second: T) -> T {
    let (a, b) = (FloatingPointView::new(first), FloatingPointView::new(second));
    if a.is_nan() {
        second
    } else if b.is_nan() || first > second {
        first
    } else if second > first {
        second
    } else if a.sign() {
        second
    } else {
        first
    }
}

/// Returns the smallest of `values` under the ordering of `min`,
/// or `None` if `values` is empty.
pub fn min_of<T: FloatKind>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(min)
}

/// Returns the largest of `values` under the ordering of `max`,
/// or `None` if `values` is empty.
pub fn max_of<T: FloatKind>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(max)
}

/// Returns true if `first` and `second` differ by at most `DEFAULT_TOLERANCE`.
#[inline]
pub fn are_nearly_equal<T: FloatKind>(first: T, second: T) -> bool {
    let tolerance = <T as NumCast>::from(DEFAULT_TOLERANCE).unwrap_or_else(T::epsilon);
    are_nearly_equal_within(first, second, tolerance)
}

/// Returns true if `first` and `second` differ by at most `tolerance`.
/// NaNs are never nearly equal to anything.
#[inline]
pub fn are_nearly_equal_within<T: FloatKind>(first: T, second: T, tolerance: T) -> bool {
    abs(first - second) <= tolerance
}

/// Returns true if `first` and `second` have the same encoding.
///
/// Unlike `==`, this distinguishes `-0.0` from `+0.0` and is
/// reflexive for NaNs with the same payload.
#[inline]
pub fn is_same_value<T: FloatKind>(first: T, second: T) -> bool {
    first.to_raw() == second.to_raw()
}

/// Returns `-1.0`, `+1.0` or a zero depending on `x`.
///
/// Zeros are returned unchanged, keeping their sign, and NaNs
/// propagate.
pub fn signum<T: FloatKind>(x: T) -> T {
    let view = FloatingPointView::new(x);
    if view.is_nan() || view.is_zero() {
        x
    } else if view.sign() {
        -T::one()
    } else {
        T::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_max_numbers() {
        assert_eq!(min(1.0f64, 2.0), 1.0);
        assert_eq!(max(1.0f64, 2.0), 2.0);
        assert_eq!(min(-3.0f32, 2.0), -3.0);
        assert_eq!(max(-3.0f32, -2.0), -2.0);
        assert_eq!(max(f64::NEG_INFINITY, f64::MIN), f64::MIN);
    }

    #[test]
    fn min_max_zeros() {
        assert_eq!(min(0.0f64, -0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(min(-0.0f64, 0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(max(-0.0f64, 0.0).to_bits(), 0);
        assert_eq!(max(0.0f32, -0.0).to_bits(), 0);
    }

    #[test]
    fn min_max_nans() {
        assert_eq!(min(f64::NAN, 1.0), 1.0);
        assert_eq!(min(1.0, f64::NAN), 1.0);
        assert_eq!(max(f32::NAN, -1.0), -1.0);
        assert!(max(f64::NAN, f64::NAN).is_nan());
    }

    #[test]
    fn min_max_ignore_argument_order() {
        let values = [f64::NAN, -0.0, 0.0, -1.5, 2.0, f64::INFINITY];
        for &a in &values {
            for &b in &values {
                if a.is_nan() && b.is_nan() {
                    continue;
                }
                assert!(is_same_value(min(a, b), min(b, a)), "min failed: {:e} {:e}", a, b);
                assert!(is_same_value(max(a, b), max(b, a)), "max failed: {:e} {:e}", a, b);
                assert!(is_same_value(min(a as f32, b as f32), min(a, b) as f32), "min failed: {:e} {:e}", a, b);
            }
        }
    }

    #[test]
    fn folds() {
        assert_eq!(min_of(&[3.0f64, -1.0, f64::NAN, 2.0]), Some(-1.0));
        assert_eq!(max_of(&[3.0f32, -1.0, 7.5]), Some(7.5));
        assert_eq!(min_of::<f64>(&[]), None);
    }

    #[test]
    fn nearly_equal() {
        assert!(are_nearly_equal(1.0f64, 1.00005));
        assert!(!are_nearly_equal(1.0f64, 1.001));
        assert!(are_nearly_equal(0.5f32, 0.50009));
        assert!(!are_nearly_equal(f64::NAN, f64::NAN));
        assert!(are_nearly_equal_within(100.0f64, 101.0, 1.5));
    }

    #[test]
    fn same_value() {
        assert!(is_same_value(1.0f64, 1.0));
        assert!(!is_same_value(0.0f64, -0.0));
        assert!(is_same_value(f32::NAN, f32::NAN));
        assert!(!is_same_value(1.0f32, 1.0000001));
    }

    #[test]
    fn signum_values() {
        assert_eq!(signum(-4.5f64), -1.0);
        assert_eq!(signum(1e-310f64), 1.0);
        assert_eq!(signum(-0.0f32).to_bits(), (-0.0f32).to_bits());
        assert!(signum(f64::NAN).is_nan());
    }
}
