/*
    Shared fixtures for integration tests
*/

#![allow(dead_code)]

use std::os::raw::c_int;

// The C math library is linked by `std` on every supported platform.
#[cfg_attr(target_os = "linux", link(name = "m"))]
extern "C" {
    fn frexp(x: f64, exp: *mut c_int) -> f64;
    fn frexpf(x: f32, exp: *mut c_int) -> f32;
    fn modf(x: f64, iptr: *mut f64) -> f64;
    fn modff(x: f32, iptr: *mut f32) -> f32;
    fn nextafter(x: f64, y: f64) -> f64;
    fn nextafterf(x: f32, y: f32) -> f32;
}

pub fn libm_frexp(x: f64) -> (f64, i32) {
    let mut exp: c_int = 0;
    let m = unsafe { frexp(x, &mut exp) };
    (m, exp)
}

pub fn libm_frexpf(x: f32) -> (f32, i32) {
    let mut exp: c_int = 0;
    let m = unsafe { frexpf(x, &mut exp) };
    (m, exp)
}

pub fn libm_modf(x: f64) -> (f64, f64) {
    let mut int = 0.0;
    let frac = unsafe { modf(x, &mut int) };
    (frac, int)
}

pub fn libm_modff(x: f32) -> (f32, f32) {
    let mut int = 0.0;
    let frac = unsafe { modff(x, &mut int) };
    (frac, int)
}

pub fn libm_nextafter(x: f64, y: f64) -> f64 {
    unsafe { nextafter(x, y) }
}

pub fn libm_nextafterf(x: f32, y: f32) -> f32 {
    unsafe { nextafterf(x, y) }
}

/// Distinguished values every operation is checked against.
pub fn special_f64() -> Vec<f64> {
    vec![
        f64::NAN,
        -f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        0.0,
        -0.0,
        f64::MIN,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::MAX,
        f64::EPSILON,
        f64::from_bits(1),
        -f64::from_bits(1),
        f64::from_bits(0x000f_ffff_ffff_ffff),
    ]
}

/// Distinguished values every operation is checked against.
pub fn special_f32() -> Vec<f32> {
    vec![
        f32::NAN,
        -f32::NAN,
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.0,
        -0.0,
        f32::MIN,
        f32::MIN_POSITIVE,
        -f32::MIN_POSITIVE,
        f32::MAX,
        f32::EPSILON,
        f32::from_bits(1),
        -f32::from_bits(1),
        f32::from_bits(0x007f_ffff),
    ]
}

/// Ordinary finite values, including ties and values near powers of two.
pub fn finite_f64() -> Vec<f64> {
    vec![
        1.0,
        -1.0,
        0.5,
        -0.5,
        1.5,
        -1.5,
        2.5,
        -2.5,
        0.49999999999999994,
        -0.49999999999999994,
        0.9999999999999999,
        1.0000000000000002,
        3.141592653589793,
        -2.718281828459045,
        123456.789,
        -987654321.125,
        4503599627370495.5,
        -4503599627370497.0,
        9007199254740994.0,
        1e-300,
        -1e-310,
        1e300,
        0.1,
        -0.7,
    ]
}

/// Ordinary finite values, including ties and values near powers of two.
pub fn finite_f32() -> Vec<f32> {
    vec![
        1.0,
        -1.0,
        0.5,
        -0.5,
        1.5,
        -2.5,
        0.99999994,
        1.0000001,
        3.1415927,
        -2.7182817,
        12345.678,
        -8388607.5,
        8388609.0,
        1e-38,
        -1e-40,
        1e38,
        0.1,
        -0.7,
    ]
}
