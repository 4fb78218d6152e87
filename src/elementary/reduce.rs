/*
    Argument reduction by pi/2 for large arguments
*/

use super::f64::scale_by_n;

pub(super) const TWO24: f64 = 1.67772160000000000000e+07;
const TWON24: f64 = 5.96046447753906250000e-08;

// 2/pi in 24-bit chunks, most significant first.
const IPIO2: [i32; 66] = [
    0xA2F983, 0x6E4E44, 0x1529FC, 0x2757D1, 0xF534DD, 0xC0DB62, 0x95993C, 0x439041, 0xFE5163,
    0xABDEBB, 0xC561B7, 0x246E3A, 0x424DD2, 0xE00649, 0x2EEA09, 0xD1921C, 0xFE1DEB, 0x1CB129,
    0xA73EE8, 0x8235F5, 0x2EBB44, 0x84E99C, 0x7026B4, 0x5F7E41, 0x3991D6, 0x398353, 0x39F49C,
    0x845F8B, 0xBDF928, 0x3B1FF8, 0x97FFDE, 0x05980F, 0xEF2F11, 0x8B5A0A, 0x6D1F6D, 0x367ECF,
    0x27CB09, 0xB74F46, 0x3F669E, 0x5FEA2D, 0x7527BA, 0xC7EBE5, 0xF17B3D, 0x0739F7, 0x8A5292,
    0xEA6BFB, 0x5FB11F, 0x8D5D08, 0x560330, 0x46FC7B, 0x6BABF0, 0xCFBC20, 0x9AF436, 0x1DA9E3,
    0x91615E, 0xE61B08, 0x659985, 0x5F14A0, 0x68408D, 0xFFD880, 0x4D7327, 0x310606, 0x1556CA,
    0x73A8C9, 0x60E27B, 0xC08C6B,
];

// pi/2 in 24-bit chunks stored as doubles.
const PIO2: [f64; 8] = [
    1.57079625129699707031e+00,
    7.54978941586159635335e-08,
    5.39030252995776476554e-15,
    3.28200341580791294123e-22,
    1.27065575308067607349e-29,
    1.22933308981111328932e-36,
    2.73370053816464559624e-44,
    2.16741683877804819444e-51,
];

// Sum of x[j] * f[jx + i - j] over the input chunks.
#[inline(always)]
const fn convolve(x: &[f64; 3], f: &[f64; 20], jx: usize, i: usize) -> f64 {
    let mut fw = 0.0;
    let mut j = 0;
    while j <= jx {
        fw += x[j] * f[jx + i - j];
        j += 1;
    }
    fw
}

/// Reduces `x * 2^e0` modulo pi/2 using as many bits of 2/pi as the
/// magnitude requires.
///
/// `x` holds `nx` non-negative 24-bit chunks of the argument, most
/// significant first, with `x[0] >= 1`. Returns the quadrant modulo 8
/// and the remainder as a head and a tail. A single-part remainder,
/// selected by `two_part == false`, is accurate enough for `f32`
/// callers and leaves the tail at zero.
pub(crate) const fn rem_pio2_large(x: &[f64; 3], nx: usize, e0: i32, two_part: bool) -> (i32, f64, f64) {
    let jk: usize = if two_part { 4 } else { 3 };
    let jp = jk;

    // jv indexes the first chunk of 2/pi that matters, 3 > q0
    let jx = nx - 1;
    let jv = if e0 > 3 { ((e0 - 3) / 24) as usize } else { 0 };
    let mut q0 = e0 - 24 * (jv as i32 + 1);

    let mut f = [0.0f64; 20];
    let mut q = [0.0f64; 20];
    let mut fq = [0.0f64; 20];
    let mut iq = [0i32; 20];

    // f[0..=jx+jk] = IPIO2[jv-jx..=jv+jk]
    let mut i = 0;
    while i <= jx + jk {
        let j = jv as isize - jx as isize + i as isize;
        f[i] = if j < 0 { 0.0 } else { IPIO2[j as usize] as f64 };
        i += 1;
    }

    let mut i = 0;
    while i <= jk {
        q[i] = convolve(x, &f, jx, i);
        i += 1;
    }

    let mut jz = jk;
    let mut z;
    let mut n;
    let mut ih;
    loop {
        // distill q[] into iq[] in reverse
        let mut i = 0;
        let mut j = jz;
        z = q[jz];
        while j > 0 {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[i] = (z - TWO24 * fw) as i32;
            z = q[j - 1] + fw;
            i += 1;
            j -= 1;
        }

        // integer part modulo 8; z is non-negative here
        z = scale_by_n(z, q0);
        z -= 8.0 * (((z * 0.125) as i64) as f64);
        n = z as i32;
        z -= n as f64;
        ih = 0;
        if q0 > 0 {
            // iq[jz-1] holds integer bits
            let i = iq[jz - 1] >> (24 - q0);
            n += i;
            iq[jz - 1] -= i << (24 - q0);
            ih = iq[jz - 1] >> (23 - q0);
        } else if q0 == 0 {
            ih = iq[jz - 1] >> 23;
        } else if z >= 0.5 {
            ih = 2;
        }

        if ih > 0 {
            // q > 0.5: take 1 - q and round the quadrant up
            n += 1;
            let mut carry = 0;
            let mut i = 0;
            while i < jz {
                let j = iq[i];
                if carry == 0 {
                    if j != 0 {
                        carry = 1;
                        iq[i] = 0x100_0000 - j;
                    }
                } else {
                    iq[i] = 0xff_ffff - j;
                }
                i += 1;
            }
            if q0 == 1 {
                iq[jz - 1] &= 0x7f_ffff;
            } else if q0 == 2 {
                iq[jz - 1] &= 0x3f_ffff;
            }
            if ih == 2 {
                z = 1.0 - z;
                if carry != 0 {
                    z -= scale_by_n(1.0, q0);
                }
            }
        }

        // an exact zero may just mean too few chunks of 2/pi were used
        if z == 0.0 {
            let mut j = 0;
            let mut i = jz;
            while i > jk {
                i -= 1;
                j |= iq[i];
            }
            if j == 0 {
                let mut k = 1;
                while k < jk && iq[jk - k] == 0 {
                    k += 1;
                }
                let mut i = jz + 1;
                while i <= jz + k {
                    f[jx + i] = IPIO2[jv + i] as f64;
                    q[i] = convolve(x, &f, jx, i);
                    i += 1;
                }
                jz += k;
                continue;
            }
        }
        break;
    }

    // chop off zero terms
    if z == 0.0 {
        jz -= 1;
        q0 -= 24;
        while iq[jz] == 0 {
            jz -= 1;
            q0 -= 24;
        }
    } else {
        // break z into 24-bit chunks if necessary
        z = scale_by_n(z, -q0);
        if z >= TWO24 {
            let fw = ((TWON24 * z) as i32) as f64;
            iq[jz] = (z - TWO24 * fw) as i32;
            jz += 1;
            q0 += 24;
            iq[jz] = fw as i32;
        } else {
            iq[jz] = z as i32;
        }
    }

    // chunks back to floating-point values
    let mut fw = scale_by_n(1.0, q0);
    let mut i = jz + 1;
    while i > 0 {
        i -= 1;
        q[i] = fw * iq[i] as f64;
        fw *= TWON24;
    }

    // fq[jz-i] = PIO2[0..=jp] * q[i..]
    let mut i = jz + 1;
    while i > 0 {
        i -= 1;
        let mut fw = 0.0;
        let mut k = 0;
        while k <= jp && k <= jz - i {
            fw += PIO2[k] * q[i + k];
            k += 1;
        }
        fq[jz - i] = fw;
    }

    // compress fq[] into the result
    let mut fw = 0.0;
    let mut i = jz + 1;
    while i > 0 {
        i -= 1;
        fw += fq[i];
    }
    let y0 = if ih == 0 { fw } else { -fw };
    if !two_part {
        return (n & 7, y0, 0.0);
    }

    let mut fw = fq[0] - fw;
    let mut i = 1;
    while i <= jz {
        fw += fq[i];
        i += 1;
    }
    let y1 = if ih == 0 { fw } else { -fw };
    (n & 7, y0, y1)
}
