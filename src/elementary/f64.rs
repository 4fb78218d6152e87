/*
    Kernels for binary64
*/

//! Compile-time evaluable kernels for `f64`.
//!
//! Every function in this module is a `const fn` and can be used to
//! initialize constants. The algorithms operate on the bit pattern
//! in the manner of fdlibm, which keeps the results identical to
//! the C math library on the inputs it is checked against.

use super::reduce::rem_pio2_large;

const TWO54: f64 = 1.80143985094819840000e+16;
const TWOM54: f64 = 5.55111512312578270212e-17;
const HUGE: f64 = 1.0e+300;
const TINY: f64 = 1.0e-300;

// Upper 32 bits as a signed integer, so negative values compare below zero.
#[inline(always)]
const fn high_word(x: f64) -> i32 {
    (x.to_bits() >> 32) as i32
}

#[inline(always)]
const fn low_word(x: f64) -> u32 {
    x.to_bits() as u32
}

#[inline(always)]
const fn with_high_word(x: f64, high: i32) -> f64 {
    f64::from_bits(((high as u32 as u64) << 32) | low_word(x) as u64)
}

#[inline(always)]
const fn copy_sign(magnitude: f64, sign: f64) -> f64 {
    const SIGN: u64 = 1 << 63;
    f64::from_bits((magnitude.to_bits() & !SIGN) | (sign.to_bits() & SIGN))
}

/// Returns `x * 2^n`, rounded once.
pub const fn scale_by_n(x: f64, n: i32) -> f64 {
    let mut x = x;
    let mut k = ((high_word(x) & 0x7ff0_0000) >> 20) as i64;
    if k == 0 {
        if x.to_bits() << 1 == 0 {
            // +-0
            return x;
        }
        x *= TWO54;
        k = ((high_word(x) & 0x7ff0_0000) >> 20) as i64 - 54;
        if n < -50000 {
            return TINY * x;
        }
    }
    if k == 0x7ff {
        // inf or NaN
        return x + x;
    }

    k += n as i64;
    if k > 0x7fe {
        return HUGE * copy_sign(HUGE, x);
    }
    if k > 0 {
        return with_high_word(x, (high_word(x) & 0x800f_ffff_u32 as i32) | ((k as i32) << 20));
    }
    if k <= -54 {
        return if n > 50000 {
            HUGE * copy_sign(HUGE, x)
        } else {
            TINY * copy_sign(TINY, x)
        };
    }

    // subnormal result
    k += 54;
    with_high_word(x, (high_word(x) & 0x800f_ffff_u32 as i32) | ((k as i32) << 20)) * TWOM54
}

/// Converts degrees to radians.
pub const fn deg2rad(x: f64) -> f64 {
    x * (std::f64::consts::FRAC_PI_4 / 45.0)
}

/// Converts radians to degrees.
pub const fn rad2deg(x: f64) -> f64 {
    x * (45.0 / std::f64::consts::FRAC_PI_4)
}

//
//  Base-2 logarithm
//

const IVLN2HI: f64 = 1.44269504072144627571e+00;
const IVLN2LO: f64 = 1.67517131648865118353e-10;

const LG1: f64 = 6.666666666666735130e-01;
const LG2: f64 = 3.999999999940941908e-01;
const LG3: f64 = 2.857142874366239149e-01;
const LG4: f64 = 2.222219843214978396e-01;
const LG5: f64 = 1.818357216161805012e-01;
const LG6: f64 = 1.531383769920937332e-01;
const LG7: f64 = 1.479819860511658591e-01;

// Returns `log(1 + f) - f + f*f/2` for `sqrt(2)/2 - 1 <= f <= sqrt(2) - 1`.
const fn log1p_core(f: f64) -> f64 {
    let s = f / (2.0 + f);
    let z = s * s;
    let w = z * z;
    let t1 = w * (LG2 + w * (LG4 + w * LG6));
    let t2 = z * (LG1 + w * (LG3 + w * (LG5 + w * LG7)));
    let r = t2 + t1;
    let hfsq = 0.5 * f * f;
    s * (hfsq + r)
}

/// Returns the base-2 logarithm of `x`.
///
/// `log2(+-0)` is `-inf`, negative arguments yield a NaN and
/// `log2(+inf)` is `+inf`.
pub const fn log2(x: f64) -> f64 {
    let mut x = x;
    let mut hx = high_word(x);
    let lx = low_word(x);

    let mut k: i32 = 0;
    if hx < 0x0010_0000 {
        // x < 2^-1022
        if ((hx & 0x7fff_ffff) as u32 | lx) == 0 {
            return f64::NEG_INFINITY;
        }
        if hx < 0 {
            return (x - x) / 0.0;
        }
        // subnormal, scale up
        k -= 54;
        x *= TWO54;
        hx = high_word(x);
    }
    if hx >= 0x7ff0_0000 {
        return x + x;
    }
    if hx == 0x3ff0_0000 && lx == 0 {
        return 0.0;
    }

    k += (hx >> 20) - 1023;
    hx &= 0x000f_ffff;
    // normalize x or x/2 into [sqrt(2)/2, sqrt(2))
    let i = (hx + 0x95f64) & 0x10_0000;
    x = with_high_word(x, hx | (i ^ 0x3ff0_0000));
    k += i >> 20;
    let y = k as f64;
    let f = x - 1.0;
    let hfsq = 0.5 * f * f;
    let r = log1p_core(f);

    // f - hfsq split so that hi*IVLN2HI is exact
    let hi = f64::from_bits((f - hfsq).to_bits() & 0xffff_ffff_0000_0000);
    let lo = (f - hi) - hfsq + r;
    let mut val_hi = hi * IVLN2HI;
    let mut val_lo = (lo + hi) * IVLN2LO + lo * IVLN2HI;

    let w = y + val_hi;
    val_lo += (y - w) + val_hi;
    val_hi = w;
    val_lo + val_hi
}

//
//  Sine
//

const S1: f64 = -1.66666666666666324348e-01;
const S2: f64 = 8.33333333332248946124e-03;
const S3: f64 = -1.98412698298579493134e-04;
const S4: f64 = 2.75573137070700676789e-06;
const S5: f64 = -2.50507602534068634195e-08;
const S6: f64 = 1.58969099521155010221e-10;

const C1: f64 = 4.16666666666666019037e-02;
const C2: f64 = -1.38888888888741095749e-03;
const C3: f64 = 2.48015872894767294178e-05;
const C4: f64 = -2.75573143513906633035e-07;
const C5: f64 = 2.08757232129817482790e-09;
const C6: f64 = -1.13596475577881948265e-11;

// sin(x + y) on [-pi/4, pi/4] where `y` is the tail of `x`.
// `has_tail` is false when `y` is known to be zero.
const fn sin_core(x: f64, y: f64, has_tail: bool) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = S2 + z * (S3 + z * S4) + z * w * (S5 + z * S6);
    let v = z * x;
    if has_tail {
        x - ((z * (0.5 * y - v * r) - y) - v * S1)
    } else {
        x + v * (S1 + z * r)
    }
}

// cos(x + y) on [-pi/4, pi/4] where `y` is the tail of `x`.
const fn cos_core(x: f64, y: f64) -> f64 {
    let z = x * x;
    let w = z * z;
    let r = z * (C1 + z * (C2 + z * C3)) + w * w * (C4 + z * (C5 + z * C6));
    let hz = 0.5 * z;
    let w = 1.0 - hz;
    w + (((1.0 - w) - hz) + (z * r - x * y))
}

const TOINT: f64 = 1.5 / f64::EPSILON;
const INVPIO2: f64 = 6.36619772367581382433e-01;
const PIO2_1: f64 = 1.57079632673412561417e+00;
const PIO2_1T: f64 = 6.07710050650619224932e-11;
const PIO2_2: f64 = 6.07710050630396597660e-11;
const PIO2_2T: f64 = 2.02226624879595063154e-21;
const PIO2_3: f64 = 2.02226624871116645580e-21;
const PIO2_3T: f64 = 8.47842766036889956997e-32;

// Subtracts `n * pi/2` for a small `n` using the 33+53 bit split of pi/2.
const fn reduce_by_quadrants(x: f64, n: i32) -> (i32, f64, f64) {
    let m = n as f64;
    if x > 0.0 {
        let z = x - m * PIO2_1;
        let y0 = z - m * PIO2_1T;
        (n, y0, (z - y0) - m * PIO2_1T)
    } else {
        let z = x + m * PIO2_1;
        let y0 = z + m * PIO2_1T;
        (-n, y0, (z - y0) + m * PIO2_1T)
    }
}

// Cody-Waite reduction with up to three parts of pi/2.
const fn reduce_medium(x: f64, ix: i32) -> (i32, f64, f64) {
    let f = x * INVPIO2 + TOINT - TOINT;
    let n = f as i32;
    let mut r = x - f * PIO2_1;
    let mut w = f * PIO2_1T;
    let j = ix >> 20;
    let mut y0 = r - w;
    let i = j - ((high_word(y0) >> 20) & 0x7ff);
    if i > 16 {
        // second iteration, good to 118 bits
        let t = r;
        w = f * PIO2_2;
        r = t - w;
        w = f * PIO2_2T - ((t - r) - w);
        y0 = r - w;
        let i = j - ((high_word(y0) >> 20) & 0x7ff);
        if i > 49 {
            // third iteration, good to 151 bits
            let t = r;
            w = f * PIO2_3;
            r = t - w;
            w = f * PIO2_3T - ((t - r) - w);
            y0 = r - w;
        }
    }
    (n, y0, (r - y0) - w)
}

// Returns `(n, y0, y1)` with `x - n*pi/2 = y0 + y1` and `|y0| <= pi/4`.
const fn rem_pio2(x: f64) -> (i32, f64, f64) {
    let hx = high_word(x);
    let ix = hx & 0x7fff_ffff;

    // |x| ~<= 5pi/4, except near pi/2 and pi where cancellation needs the medium path
    if ix <= 0x400f_6a7a && (ix & 0xf_ffff) != 0x9_21fb {
        return reduce_by_quadrants(x, if ix <= 0x4002_d97c { 1 } else { 2 });
    }
    // |x| ~<= 9pi/4, except near 3pi/2 and 2pi
    if ix > 0x400f_6a7a && ix <= 0x401c_463b {
        if ix <= 0x4015_fdbc {
            if ix != 0x4012_d97c {
                return reduce_by_quadrants(x, 3);
            }
        } else if ix != 0x4019_21fb {
            return reduce_by_quadrants(x, 4);
        }
    }
    // |x| ~< 2^20 * pi/2
    if ix < 0x4139_21fb {
        return reduce_medium(x, ix);
    }
    if ix >= 0x7ff0_0000 {
        let y = x - x;
        return (0, y, y);
    }

    // split |x| * 2^-e0 into three 24-bit chunks
    let e0 = (ix >> 20) - 1046;
    let mut z = f64::from_bits(((((ix - (e0 << 20)) as u32) as u64) << 32) | low_word(x) as u64);
    let mut tx = [0.0; 3];
    let mut i = 0;
    while i < 2 {
        tx[i] = (z as i32) as f64;
        z = (z - tx[i]) * super::reduce::TWO24;
        i += 1;
    }
    tx[2] = z;
    let mut nx = 3;
    while nx > 1 && tx[nx - 1] == 0.0 {
        nx -= 1;
    }

    let (n, y0, y1) = rem_pio2_large(&tx, nx, e0, true);
    if hx < 0 {
        (-n, -y0, -y1)
    } else {
        (n, y0, y1)
    }
}

/// Returns the sine of `x` in radians.
///
/// `sin(+-inf)` and `sin(NaN)` are NaN.
pub const fn sin(x: f64) -> f64 {
    let ix = high_word(x) & 0x7fff_ffff;

    if ix <= 0x3fe9_21fb {
        // |x| ~<= pi/4
        if ix < 0x3e50_0000 {
            // |x| < 2^-26
            return x;
        }
        return sin_core(x, 0.0, false);
    }
    if ix >= 0x7ff0_0000 {
        return x - x;
    }

    let (n, y0, y1) = rem_pio2(x);
    match n & 3 {
        0 => sin_core(y0, y1, true),
        1 => cos_core(y0, y1),
        2 => -sin_core(y0, y1, true),
        _ => -cos_core(y0, y1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOG2_OF_8: f64 = log2(8.0);
    const SIN_OF_SMALL: f64 = sin(deg2rad(0.001));
    const HALF_MIN: f64 = scale_by_n(f64::MIN_POSITIVE, -1);

    #[test]
    fn const_evaluation() {
        assert_eq!(LOG2_OF_8, 3.0);
        assert_eq!(SIN_OF_SMALL, 1.7453292519057202e-05);
        assert_eq!(HALF_MIN, f64::MIN_POSITIVE / 2.0);
    }

    #[test]
    fn log2_special_values() {
        assert_eq!(log2(0.0), f64::NEG_INFINITY);
        assert_eq!(log2(-0.0), f64::NEG_INFINITY);
        assert!(log2(-1.0).is_nan());
        assert!(log2(f64::NEG_INFINITY).is_nan());
        assert_eq!(log2(f64::INFINITY), f64::INFINITY);
        assert_eq!(log2(1.0).to_bits(), 0);
        assert_eq!(log2(f64::from_bits(1)), -1074.0);
        assert_eq!(log2(0.5), -1.0);
    }

    #[test]
    fn sin_quadrants() {
        assert_eq!(sin(0.0).to_bits(), 0);
        assert_eq!(sin(-0.0).to_bits(), (-0.0f64).to_bits());
        assert_eq!(sin(1e-10), 1e-10);
        assert!(sin(f64::INFINITY).is_nan());
        assert!(sin(f64::NAN).is_nan());
        assert_eq!(sin(std::f64::consts::FRAC_PI_2), 1.0);
        assert_eq!(sin(-std::f64::consts::FRAC_PI_2), -1.0);
    }

    #[test]
    fn quadrant_reduction() {
        let (n, y0, _) = rem_pio2(std::f64::consts::PI);
        assert_eq!(n, 2);
        assert!(y0.abs() < 1e-15);
        let (n, _, _) = rem_pio2(-3.0 * std::f64::consts::FRAC_PI_2 - 0.1);
        assert_eq!(n & 3, 1);
    }
}
