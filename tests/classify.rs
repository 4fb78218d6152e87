mod common;

use common::*;
use float_prim::*;

#[test]
fn classify_f64() {
    for fp in special_f64().into_iter().chain(finite_f64()) {
        assert_eq!(is_nan(fp), fp.is_nan(), "is_nan failed: {:e}", fp);
        assert_eq!(is_inf(fp), fp.is_infinite(), "is_inf failed: {:e}", fp);
        assert_eq!(is_zero(fp), fp == 0.0, "is_zero failed: {:e}", fp);
        assert_eq!(is_finite(fp), fp.is_finite(), "is_finite failed: {:e}", fp);
        assert_eq!(sign_bit(fp), fp.is_sign_negative(), "sign_bit failed: {:e}", fp);
    }
}

#[test]
fn classify_f32() {
    for fp in special_f32().into_iter().chain(finite_f32()) {
        assert_eq!(is_nan(fp), fp.is_nan(), "is_nan failed: {:e}", fp);
        assert_eq!(is_inf(fp), fp.is_infinite(), "is_inf failed: {:e}", fp);
        assert_eq!(is_zero(fp), fp == 0.0, "is_zero failed: {:e}", fp);
        assert_eq!(is_finite(fp), fp.is_finite(), "is_finite failed: {:e}", fp);
        assert_eq!(sign_bit(fp), fp.is_sign_negative(), "sign_bit failed: {:e}", fp);
    }
}

#[test]
fn compare_values() {
    assert!(is_same_value(-0.0f64, -0.0));
    assert!(!is_same_value(0.0f64, -0.0));
    assert!(is_same_value(f32::NAN, f32::NAN));
    assert!(!is_same_value(f64::NAN, -f64::NAN));

    assert!(are_nearly_equal(1.0f64, 1.00005));
    assert!(!are_nearly_equal(1.0f32, 1.001));
    assert!(!are_nearly_equal(f64::NAN, f64::NAN));
    assert!(are_nearly_equal_within(100.0f64, 100.4, 0.5));

    assert_eq!(min(f64::NAN, 1.0), 1.0);
    assert_eq!(max(2.0f32, f32::NAN), 2.0);
    assert!(is_same_value(min(0.0f64, -0.0), -0.0));
    assert!(is_same_value(max(-0.0f32, 0.0), 0.0));
    assert_eq!(min_of(&[3.0f64, f64::NAN, -7.5, 2.0]), Some(-7.5));
    assert_eq!(max_of::<f32>(&[]), None);
}
