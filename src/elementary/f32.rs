/*
    Kernels for binary32
*/

//! Compile-time evaluable kernels for `f32`.
//!
//! The sine is evaluated in `f64` and rounded once, which leaves the
//! result within one unit in the last place.

use super::reduce::rem_pio2_large;

const TWO25: f32 = 3.3554432e+07;
const TWOM25: f32 = 2.9802322388e-08;
const HUGE: f32 = 1.0e+30;
const TINY: f32 = 1.0e-30;

#[inline(always)]
const fn word(x: f32) -> i32 {
    x.to_bits() as i32
}

#[inline(always)]
const fn from_word(w: i32) -> f32 {
    f32::from_bits(w as u32)
}

#[inline(always)]
const fn copy_sign(magnitude: f32, sign: f32) -> f32 {
    const SIGN: u32 = 1 << 31;
    f32::from_bits((magnitude.to_bits() & !SIGN) | (sign.to_bits() & SIGN))
}

/// Returns `x * 2^n`, rounded once.
pub const fn scale_by_n(x: f32, n: i32) -> f32 {
    let mut x = x;
    let mut k = ((word(x) & 0x7f80_0000) >> 23) as i64;
    if k == 0 {
        if word(x) & 0x7fff_ffff == 0 {
            // +-0
            return x;
        }
        x *= TWO25;
        k = ((word(x) & 0x7f80_0000) >> 23) as i64 - 25;
        if n < -50000 {
            return TINY * x;
        }
    }
    if k == 0xff {
        // inf or NaN
        return x + x;
    }

    k += n as i64;
    if k > 0xfe {
        return HUGE * copy_sign(HUGE, x);
    }
    if k > 0 {
        return from_word((word(x) & 0x807f_ffff_u32 as i32) | ((k as i32) << 23));
    }
    if k <= -25 {
        return if n > 50000 {
            HUGE * copy_sign(HUGE, x)
        } else {
            TINY * copy_sign(TINY, x)
        };
    }

    // subnormal result
    k += 25;
    from_word((word(x) & 0x807f_ffff_u32 as i32) | ((k as i32) << 23)) * TWOM25
}

/// Converts degrees to radians.
pub const fn deg2rad(x: f32) -> f32 {
    x * (std::f64::consts::FRAC_PI_4 / 45.0) as f32
}

/// Converts radians to degrees.
pub const fn rad2deg(x: f32) -> f32 {
    x * (45.0 / std::f64::consts::FRAC_PI_4) as f32
}

//
//  Base-2 logarithm
//

const IVLN2HI: f32 = 1.4428711;
const IVLN2LO: f32 = -0.00017605285;

const LG1: f32 = 0.6666666;
const LG2: f32 = 0.40000972;
const LG3: f32 = 0.28498787;
const LG4: f32 = 0.24279079;

const fn log1p_core(f: f32) -> f32 {
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * LG4);
    let t2 = z * (LG1 + w * LG3);
    let r = t2 + t1;
    let hfsq = 0.5 * f * f;
    s * (hfsq + r)
}

/// Returns the base-2 logarithm of `x`.
///
/// `log2(+-0)` is `-inf`, negative arguments yield a NaN and
/// `log2(+inf)` is `+inf`.
pub const fn log2(x: f32) -> f32 {
    let mut x = x;
    let mut hx = word(x);

    let mut k: i32 = 0;
    if hx < 0x0080_0000 {
        // x < 2^-126
        if hx & 0x7fff_ffff == 0 {
            return f32::NEG_INFINITY;
        }
        if hx < 0 {
            return (x - x) / 0.0;
        }
        // subnormal, scale up
        k -= 25;
        x *= TWO25;
        hx = word(x);
    }
    if hx >= 0x7f80_0000 {
        return x + x;
    }
    if hx == 0x3f80_0000 {
        return 0.0;
    }

    k += (hx >> 23) - 127;
    hx &= 0x007f_ffff;
    let i = (hx + 0x4a_fb0d) & 0x80_0000;
    x = from_word(hx | (i ^ 0x3f80_0000));
    k += i >> 23;
    let y = k as f32;
    let f = x - 1.0;
    let hfsq = 0.5 * f * f;
    let r = log1p_core(f);

    let hi = from_word(word(f - hfsq) & 0xffff_f000_u32 as i32);
    let lo = (f - hi) - hfsq + r;
    (lo + hi) * IVLN2LO + lo * IVLN2HI + hi * IVLN2HI + y
}

//
//  Sine
//

const S1: f64 = -0.16666666641626524;
const S2: f64 = 0.008333329385889463;
const S3: f64 = -0.00019839334836096632;
const S4: f64 = 2.718311493989822e-06;

const C0: f64 = -0.499999997251031;
const C1: f64 = 0.04166662332373906;
const C2: f64 = -0.001388676377460993;
const C3: f64 = 2.439044879627741e-05;

const S1PIO2: f64 = 1.0 * std::f64::consts::FRAC_PI_2;
const S2PIO2: f64 = 2.0 * std::f64::consts::FRAC_PI_2;
const S3PIO2: f64 = 3.0 * std::f64::consts::FRAC_PI_2;
const S4PIO2: f64 = 4.0 * std::f64::consts::FRAC_PI_2;

// sin(x) on [-pi/4, pi/4].
const fn sin_core(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = S3 + z * S4;
    let s = z * x;
    ((x + s * (S1 + z * S2)) + s * w * r) as f32
}

// cos(x) on [-pi/4, pi/4].
const fn cos_core(x: f64) -> f32 {
    let z = x * x;
    let w = z * z;
    let r = C2 + z * C3;
    (((1.0 + z * C0) + w * C1) + (w * z) * r) as f32
}

const TOINT: f64 = 1.5 / f64::EPSILON;
const INVPIO2: f64 = 6.36619772367581382433e-01;
const PIO2_1: f64 = 1.57079631090164184570e+00;
const PIO2_1T: f64 = 1.58932547735281966916e-08;

// Returns `(n, y)` with `x - n*pi/2 = y` and `|y| <= pi/4`.
const fn rem_pio2(x: f32) -> (i32, f64) {
    let hx = word(x);
    let ix = hx & 0x7fff_ffff;

    if ix < 0x4dc9_0fdb {
        // |x| ~< 2^28 * pi/2
        let f = x as f64 * INVPIO2 + TOINT - TOINT;
        let n = f as i32;
        let r = x as f64 - f * PIO2_1;
        let w = f * PIO2_1T;
        return (n, r - w);
    }
    if ix >= 0x7f80_0000 {
        return (0, (x - x) as f64);
    }

    let e0 = (ix >> 23) - 150;
    let z = from_word(ix - (e0 << 23));
    let tx = [z as f64, 0.0, 0.0];
    let (n, y, _) = rem_pio2_large(&tx, 1, e0, false);
    if hx < 0 {
        (-n, -y)
    } else {
        (n, y)
    }
}

/// Returns the sine of `x` in radians.
///
/// `sin(+-inf)` and `sin(NaN)` are NaN.
pub const fn sin(x: f32) -> f32 {
    let hx = word(x);
    let ix = hx & 0x7fff_ffff;
    let xd = x as f64;

    if ix <= 0x3f49_0fda {
        // |x| ~<= pi/4
        if ix < 0x3980_0000 {
            // |x| < 2^-12
            return x;
        }
        return sin_core(xd);
    }
    if ix <= 0x407b_53d1 {
        // |x| ~<= 5pi/4
        if ix <= 0x4016_cbe3 {
            return if hx > 0 {
                cos_core(xd - S1PIO2)
            } else {
                -cos_core(xd + S1PIO2)
            };
        }
        return sin_core((if hx > 0 { S2PIO2 } else { -S2PIO2 }) - xd);
    }
    if ix <= 0x40e2_31d5 {
        // |x| ~<= 9pi/4
        if ix <= 0x40af_eddf {
            return if hx > 0 {
                -cos_core(xd - S3PIO2)
            } else {
                cos_core(xd + S3PIO2)
            };
        }
        return sin_core(xd + (if hx > 0 { -S4PIO2 } else { S4PIO2 }));
    }
    if ix >= 0x7f80_0000 {
        return x - x;
    }

    let (n, y) = rem_pio2(x);
    match n & 3 {
        0 => sin_core(y),
        1 => cos_core(y),
        2 => sin_core(-y),
        _ => -cos_core(y),
    }
}
