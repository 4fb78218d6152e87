mod common;

use common::*;
use float_prim::*;

#[test]
fn frexp_f64() {
    for fp in special_f64().into_iter().chain(finite_f64()) {
        let (m, e) = frexp(fp);
        let (lm, le) = libm_frexp(fp);
        assert_eq!(e, le, "frexp failed (exponent): {:e}", fp);
        if fp.is_nan() {
            assert!(m.is_nan(), "frexp failed (mantissa): {:e}", fp);
        } else {
            assert_eq!(m.to_bits(), lm.to_bits(), "frexp failed (mantissa): {:e}", fp);
            assert_eq!(scale_by_n(m, e).to_bits(), fp.to_bits(), "frexp failed (reconstruct): {:e}", fp);
        }
    }
}

#[test]
fn frexp_f32() {
    for fp in special_f32().into_iter().chain(finite_f32()) {
        let (m, e) = frexp(fp);
        let (lm, le) = libm_frexpf(fp);
        assert_eq!(e, le, "frexp failed (exponent): {:e}", fp);
        if fp.is_nan() {
            assert!(m.is_nan(), "frexp failed (mantissa): {:e}", fp);
        } else {
            assert_eq!(m.to_bits(), lm.to_bits(), "frexp failed (mantissa): {:e}", fp);
        }
    }
}

#[test]
fn modf_f64() {
    for fp in special_f64().into_iter().chain(finite_f64()) {
        let (frac, int) = modf(fp);
        let (lfrac, lint) = libm_modf(fp);
        if fp.is_nan() {
            assert!(frac.is_nan() && int.is_nan(), "modf failed (nan): {:e}", fp);
        } else {
            assert_eq!(frac.to_bits(), lfrac.to_bits(), "modf failed (fraction): {:e}", fp);
            assert_eq!(int.to_bits(), lint.to_bits(), "modf failed (integral): {:e}", fp);
        }
    }
}

#[test]
fn modf_f32() {
    for fp in special_f32().into_iter().chain(finite_f32()) {
        let (frac, int) = modf(fp);
        let (lfrac, lint) = libm_modff(fp);
        if fp.is_nan() {
            assert!(frac.is_nan() && int.is_nan(), "modf failed (nan): {:e}", fp);
        } else {
            assert_eq!(frac.to_bits(), lfrac.to_bits(), "modf failed (fraction): {:e}", fp);
            assert_eq!(int.to_bits(), lint.to_bits(), "modf failed (integral): {:e}", fp);
        }
    }
}

#[test]
fn abs_and_copy_sign() {
    for fp in special_f64().into_iter().chain(finite_f64()) {
        assert_eq!(abs(fp).to_bits(), fp.abs().to_bits(), "abs failed: {:e}", fp);
        assert_eq!(copy_sign(2.0, fp).to_bits(), 2.0f64.copysign(fp).to_bits(), "copy_sign failed: {:e}", fp);
    }
    for fp in special_f32().into_iter().chain(finite_f32()) {
        assert_eq!(abs(fp).to_bits(), fp.abs().to_bits(), "abs failed: {:e}", fp);
    }
}

#[test]
fn scale_by_n_rounds_once() {
    assert_eq!(scale_by_n(1.0f64, 1023), 2f64.powi(1023));
    assert_eq!(scale_by_n(1.0f64, 1024), f64::INFINITY);
    assert_eq!(scale_by_n(1.0f64, -1074), 5e-324);
    assert_eq!(scale_by_n(1.0f64, -1075).to_bits(), 0);
    assert_eq!(scale_by_n(1.5f64, -1074), 1e-323);
    assert_eq!(scale_by_n(-3.0f32, -2), -0.75);
    assert_eq!(scale_by_n(f32::from_bits(1), 276), f32::from_bits(0x7f00_0000));
}
