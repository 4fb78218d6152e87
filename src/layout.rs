/*
    Bit layout of the IEEE-754 binary formats
*/

use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::num::ParseIntError;

use num_traits::{Float, Num, PrimInt, Unsigned};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A binary floating-point format described by its encoding.
///
/// An encoded value is split into three disjoint fields, from most
/// significant to least significant:
///  - a single sign bit,
///  - a biased exponent field of `EXPONENT_WIDTH` bits, and
///  - a trailing fraction field of `FRACTION_WIDTH` bits.
///
/// `SIGN_MASK | EXPONENT_MASK | FRACTION_MASK` covers every bit of
/// `Bits` exactly once. The trait is sealed: only `f32` and `f64`
/// implement it.
pub trait FloatKind: Float + Debug + Default + Send + Sync + sealed::Sealed + 'static {
    /// The unsigned integer with the same width as the format.
    type Bits: PrimInt
        + Unsigned
        + Num<FromStrRadixErr = ParseIntError>
        + Debug
        + LowerHex
        + Hash
        + Send
        + Sync;

    /// Bitwidth of the trailing fraction field.
    const FRACTION_WIDTH: u32;

    /// Bitwidth of the exponent field.
    const EXPONENT_WIDTH: u32;

    /// Bitwidth of the representation.
    const STORAGE_WIDTH: u32;

    /// The exponent field bias.
    const EXPONENT_BIAS: i32;

    /// The all-ones exponent field value shared by infinities and NaNs.
    const MAX_EXPONENT_VALUE: u32;

    /// Mask of the trailing fraction field.
    const FRACTION_MASK: Self::Bits;

    /// Mask of the exponent field.
    const EXPONENT_MASK: Self::Bits;

    /// Mask of the sign bit.
    const SIGN_MASK: Self::Bits;

    /// Multiplier converting degrees to radians.
    const DEG_TO_RAD: Self;

    /// Multiplier converting radians to degrees.
    const RAD_TO_DEG: Self;

    /// Reinterprets the value as its bit pattern.
    fn to_raw(self) -> Self::Bits;

    /// Reinterprets a bit pattern as a value.
    fn from_raw(raw: Self::Bits) -> Self;

    /// Zero-extends a bit pattern to 64 bits.
    fn widen(raw: Self::Bits) -> u64;

    /// Truncates a 64-bit integer to the width of the format.
    fn narrow(raw: u64) -> Self::Bits;

    #[doc(hidden)]
    fn scale_kernel(self, n: i32) -> Self;

    #[doc(hidden)]
    fn log2_kernel(self) -> Self;

    #[doc(hidden)]
    fn sin_kernel(self) -> Self;
}

macro_rules! float_kind_impl {
    ($t: ident, $bits: ident, $fraction: expr, $exponent: expr, $deg_to_rad: expr, $rad_to_deg: expr) => {
        impl FloatKind for $t {
            type Bits = $bits;

            const FRACTION_WIDTH: u32 = $fraction;
            const EXPONENT_WIDTH: u32 = $exponent;
            const STORAGE_WIDTH: u32 = $bits::BITS;
            const EXPONENT_BIAS: i32 = (1 << ($exponent - 1)) - 1;
            const MAX_EXPONENT_VALUE: u32 = (1 << $exponent) - 1;
            const FRACTION_MASK: $bits = (1 << $fraction) - 1;
            const EXPONENT_MASK: $bits = ((1 << $exponent) - 1) << $fraction;
            const SIGN_MASK: $bits = 1 << ($bits::BITS - 1);
            const DEG_TO_RAD: $t = $deg_to_rad;
            const RAD_TO_DEG: $t = $rad_to_deg;

            #[inline(always)]
            fn to_raw(self) -> $bits {
                self.to_bits()
            }

            #[inline(always)]
            fn from_raw(raw: $bits) -> $t {
                $t::from_bits(raw)
            }

            #[inline(always)]
            fn widen(raw: $bits) -> u64 {
                raw as u64
            }

            #[inline(always)]
            fn narrow(raw: u64) -> $bits {
                raw as $bits
            }

            #[inline]
            fn scale_kernel(self, n: i32) -> $t {
                crate::elementary::$t::scale_by_n(self, n)
            }

            #[inline]
            fn log2_kernel(self) -> $t {
                crate::elementary::$t::log2(self)
            }

            #[inline]
            fn sin_kernel(self) -> $t {
                crate::elementary::$t::sin(self)
            }
        }
    };
}

float_kind_impl!(
    f32,
    u32,
    23,
    8,
    (std::f64::consts::FRAC_PI_4 / 45.0) as f32,
    (45.0 / std::f64::consts::FRAC_PI_4) as f32
);
float_kind_impl!(
    f64,
    u64,
    52,
    11,
    std::f64::consts::FRAC_PI_4 / 45.0,
    45.0 / std::f64::consts::FRAC_PI_4
);

#[cfg(test)]
mod tests {
    use num_traits::{Bounded, Zero};

    use super::*;

    fn check_layout<T: FloatKind>() {
        let all = T::SIGN_MASK | T::EXPONENT_MASK | T::FRACTION_MASK;
        assert_eq!(all, T::Bits::max_value(), "layout masks must cover every bit");
        assert_eq!(T::SIGN_MASK & T::EXPONENT_MASK, T::Bits::zero());
        assert_eq!(T::SIGN_MASK & T::FRACTION_MASK, T::Bits::zero());
        assert_eq!(T::EXPONENT_MASK & T::FRACTION_MASK, T::Bits::zero());
        assert_eq!(1 + T::EXPONENT_WIDTH + T::FRACTION_WIDTH, T::STORAGE_WIDTH);
        assert_eq!(T::MAX_EXPONENT_VALUE as i32, 2 * T::EXPONENT_BIAS + 1);
    }

    #[test]
    fn masks_partition_the_encoding() {
        check_layout::<f32>();
        check_layout::<f64>();
    }

    #[test]
    fn parameters() {
        assert_eq!(f32::FRACTION_WIDTH, 23);
        assert_eq!(f32::EXPONENT_WIDTH, 8);
        assert_eq!(f32::EXPONENT_BIAS, 127);
        assert_eq!(f32::MAX_EXPONENT_VALUE, 0xff);
        assert_eq!(f32::EXPONENT_MASK, 0x7f80_0000);

        assert_eq!(f64::FRACTION_WIDTH, 52);
        assert_eq!(f64::EXPONENT_WIDTH, 11);
        assert_eq!(f64::EXPONENT_BIAS, 1023);
        assert_eq!(f64::MAX_EXPONENT_VALUE, 0x7ff);
        assert_eq!(f64::EXPONENT_MASK, 0x7ff0_0000_0000_0000);
        assert_eq!(f64::SIGN_MASK, 0x8000_0000_0000_0000);
    }

    #[test]
    fn raw_round_trip() {
        assert_eq!(<f64 as FloatKind>::to_raw(1.0), 0x3ff0_0000_0000_0000);
        assert_eq!(<f32 as FloatKind>::from_raw(0x3f80_0000), 1.0f32);
        assert_eq!(f32::widen(0xffff_ffff), 0xffff_ffff_u64);
        assert_eq!(f32::narrow(0x1_0000_0001), 1);
    }
}
