/*
    Decoded view of an encoded floating-point value
*/

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use bitvec::field::BitField;
use bitvec::prelude::{BitSlice, Lsb0};
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::FloatKind;

/// Bit vector type used to exchange encoded values.
/// Index `0` is the least significant bit of the encoding.
pub type BitVec = bitvec::prelude::BitVec<u32, Lsb0>;

/// A floating-point value viewed through its encoding.
///
/// The view holds nothing but the raw bit pattern of a value of
/// type `T`; every field is decoded on demand. Every bit pattern of
/// `T::Bits` is a legal view, and composing the decoded sign,
/// biased exponent and fraction yields back the raw bits exactly.
pub struct FloatingPointView<T: FloatKind> {
    raw: T::Bits,
}

// Constructors
impl<T: FloatKind> FloatingPointView<T> {
    /// Creates a view of `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { raw: value.to_raw() }
    }

    /// Creates a view of the value encoded by `raw`.
    #[inline]
    pub fn from_raw(raw: T::Bits) -> Self {
        Self { raw }
    }

    /// Creates a view from its three fields.
    /// Bits of `biased_exponent` and `fraction` outside their field
    /// widths are discarded.
    pub fn compose(sign: bool, biased_exponent: u32, fraction: T::Bits) -> Self {
        let sign = if sign { T::SIGN_MASK } else { T::Bits::zero() };
        let exponent = (T::narrow(biased_exponent as u64) << T::FRACTION_WIDTH as usize) & T::EXPONENT_MASK;
        Self {
            raw: sign | exponent | (fraction & T::FRACTION_MASK),
        }
    }

    /// Returns a zero with a particular sign.
    pub fn zero(sign: bool) -> Self {
        Self::compose(sign, 0, T::Bits::zero())
    }

    /// Returns a one with a particular sign.
    pub fn one(sign: bool) -> Self {
        Self::compose(sign, T::EXPONENT_BIAS as u32, T::Bits::zero())
    }

    /// Returns the subnormal number of smallest magnitude with a particular sign.
    pub fn min_subnormal(sign: bool) -> Self {
        Self::compose(sign, 0, T::Bits::one())
    }

    /// Returns the subnormal number of largest magnitude with a particular sign.
    pub fn max_subnormal(sign: bool) -> Self {
        Self::compose(sign, 0, T::FRACTION_MASK)
    }

    /// Returns the normal number of smallest magnitude with a particular sign.
    pub fn min_normal(sign: bool) -> Self {
        Self::compose(sign, 1, T::Bits::zero())
    }

    /// Returns the finite number of largest magnitude with a particular sign.
    pub fn max_normal(sign: bool) -> Self {
        Self::compose(sign, T::MAX_EXPONENT_VALUE - 1, T::FRACTION_MASK)
    }

    /// Returns an infinity with a particular sign.
    pub fn infinity(sign: bool) -> Self {
        Self::compose(sign, T::MAX_EXPONENT_VALUE, T::Bits::zero())
    }

    /// Returns the canonical quiet NaN with a particular sign.
    pub fn quiet_nan(sign: bool) -> Self {
        Self::compose(sign, T::MAX_EXPONENT_VALUE, Self::quiet_bit())
    }

    // The most significant fraction bit, set for quiet NaNs.
    #[inline]
    fn quiet_bit() -> T::Bits {
        T::Bits::one() << (T::FRACTION_WIDTH - 1) as usize
    }

    // The implicit leading significand bit of normal numbers.
    #[inline]
    fn implicit_bit() -> T::Bits {
        T::Bits::one() << T::FRACTION_WIDTH as usize
    }
}

// Field accessors
impl<T: FloatKind> FloatingPointView<T> {
    /// Returns the raw bit pattern.
    #[inline]
    pub fn raw(&self) -> T::Bits {
        self.raw
    }

    /// Returns the viewed value.
    #[inline]
    pub fn value(&self) -> T {
        T::from_raw(self.raw)
    }

    /// Returns the sign bit. This is set for negative zero
    /// and for NaNs with the sign bit set.
    #[inline]
    pub fn sign(&self) -> bool {
        self.raw & T::SIGN_MASK != T::Bits::zero()
    }

    /// Returns the exponent field as stored.
    #[inline]
    pub fn biased_exponent(&self) -> u32 {
        T::widen((self.raw & T::EXPONENT_MASK) >> T::FRACTION_WIDTH as usize) as u32
    }

    /// Returns the biased exponent less the bias.
    /// Zeros and subnormals report `-EXPONENT_BIAS`.
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.biased_exponent() as i32 - T::EXPONENT_BIAS
    }

    /// Returns the exponent that scales the significand.
    /// This differs from `exponent` only for zeros and subnormals,
    /// which report `1 - EXPONENT_BIAS`.
    pub fn explicit_exponent(&self) -> i32 {
        if self.biased_exponent() == 0 {
            1 - T::EXPONENT_BIAS
        } else {
            self.exponent()
        }
    }

    /// Returns the trailing fraction field.
    #[inline]
    pub fn fraction(&self) -> T::Bits {
        self.raw & T::FRACTION_MASK
    }

    /// Returns the fraction with the implicit leading bit prepended
    /// for normal numbers. Zeros, subnormals, infinities and NaNs
    /// return the fraction field unchanged.
    pub fn significand(&self) -> T::Bits {
        if self.is_normal() {
            self.fraction() | Self::implicit_bit()
        } else {
            self.fraction()
        }
    }

    /// Returns the exponent and significand of this value with the
    /// leading one at bit `FRACTION_WIDTH`, so that the magnitude is
    /// `significand * 2^(exponent - FRACTION_WIDTH)`.
    /// Subnormals are shifted until the leading bit is set.
    /// The result is wrapped in an option since zeros, infinities
    /// and NaNs have no such form.
    pub fn normalized(&self) -> Option<(i32, T::Bits)> {
        if self.is_zero() || self.is_inf_or_nan() {
            return None;
        }

        let mut exponent = self.explicit_exponent();
        let mut significand = self.significand();
        let implicit = Self::implicit_bit();
        while significand & implicit == T::Bits::zero() {
            significand = significand << 1;
            exponent -= 1;
        }
        Some((exponent, significand))
    }
}

// Classification
impl<T: FloatKind> FloatingPointView<T> {
    /// Returns true if this view encodes a zero of either sign.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.raw & !T::SIGN_MASK == T::Bits::zero()
    }

    /// Returns true if this view encodes a NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.biased_exponent() == T::MAX_EXPONENT_VALUE && self.fraction() != T::Bits::zero()
    }

    /// Returns true if this view encodes an infinity of either sign.
    #[inline]
    pub fn is_inf(&self) -> bool {
        self.biased_exponent() == T::MAX_EXPONENT_VALUE && self.fraction() == T::Bits::zero()
    }

    /// Returns true if this view encodes an infinity or a NaN.
    #[inline]
    pub fn is_inf_or_nan(&self) -> bool {
        self.biased_exponent() == T::MAX_EXPONENT_VALUE
    }

    /// Returns true if this view encodes a zero, subnormal or normal number.
    #[inline]
    pub fn is_finite(&self) -> bool {
        !self.is_inf_or_nan()
    }

    /// Returns true if this view encodes a subnormal number.
    #[inline]
    pub fn is_subnormal(&self) -> bool {
        self.biased_exponent() == 0 && self.fraction() != T::Bits::zero()
    }

    /// Returns true if this view encodes a normal number.
    #[inline]
    pub fn is_normal(&self) -> bool {
        let biased = self.biased_exponent();
        biased != 0 && biased != T::MAX_EXPONENT_VALUE
    }

    /// Returns true if this view encodes a quiet NaN.
    pub fn is_quiet_nan(&self) -> bool {
        self.is_nan() && self.fraction() & Self::quiet_bit() != T::Bits::zero()
    }

    /// Returns true if this view encodes a signaling NaN.
    pub fn is_signaling_nan(&self) -> bool {
        self.is_nan() && self.fraction() & Self::quiet_bit() == T::Bits::zero()
    }
}

// Bit vector conversions
impl<T: FloatKind> FloatingPointView<T> {
    /// Returns the encoding as a `BitVec` of `STORAGE_WIDTH` bits.
    pub fn to_bitvec(&self) -> BitVec {
        let mut bv = BitVec::repeat(false, T::STORAGE_WIDTH as usize);
        bv.store_le::<u64>(T::widen(self.raw));
        bv
    }
}

impl<T: FloatKind> TryFrom<&BitSlice<u32, Lsb0>> for FloatingPointView<T> {
    type Error = Error;

    fn try_from(bits: &BitSlice<u32, Lsb0>) -> Result<Self> {
        let expected = T::STORAGE_WIDTH as usize;
        if bits.len() != expected {
            debug!("rejected a bit vector of length {}, expected {}", bits.len(), expected);
            return Err(Error::InvalidWidth {
                expected,
                found: bits.len(),
            });
        }
        Ok(Self::from_raw(T::narrow(bits.load_le::<u64>())))
    }
}

impl<T: FloatKind> FromStr for FloatingPointView<T> {
    type Err = Error;

    /// Parses a `0x`-prefixed hexadecimal bit pattern.
    /// Underscores between digits are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .trim()
            .strip_prefix("0x")
            .or_else(|| s.trim().strip_prefix("0X"))
            .ok_or_else(|| Error::InvalidBitPattern(s.to_string()))?;
        let digits: String = digits.chars().filter(|c| *c != '_').collect();
        if digits.is_empty() {
            debug!("rejected an empty bit pattern: {:?}", s);
            return Err(Error::InvalidBitPattern(s.to_string()));
        }
        let raw = <T::Bits as num_traits::Num>::from_str_radix(&digits, 16)?;
        Ok(Self::from_raw(raw))
    }
}

impl<T: FloatKind> Clone for FloatingPointView<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FloatKind> Copy for FloatingPointView<T> {}

impl<T: FloatKind> PartialEq for FloatingPointView<T> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<T: FloatKind> Eq for FloatingPointView<T> {}

impl<T: FloatKind> Hash for FloatingPointView<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl<T: FloatKind> fmt::Debug for FloatingPointView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloatingPointView")
            .field("value", &self.value())
            .field("sign", &self.sign())
            .field("biased_exponent", &self.biased_exponent())
            .field("fraction", &format_args!("{:#x}", self.fraction()))
            .finish()
    }
}

impl<T: FloatKind> fmt::LowerHex for FloatingPointView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.raw, f)
    }
}
