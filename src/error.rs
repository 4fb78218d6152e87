/*
    Errors
*/

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised when an encoding is built from external input.
///
/// The numeric operations never fail: invalid and out-of-range
/// results are expressed in the floating-point value space.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A bit vector did not have the width of the format.
    #[error("expected a bit vector of length {expected}, received {found}")]
    InvalidWidth { expected: usize, found: usize },

    /// A bit pattern string was not `0x`-prefixed hexadecimal.
    #[error("invalid bit pattern {0:?}, expected a `0x`-prefixed hexadecimal string")]
    InvalidBitPattern(String),

    /// A bit pattern string had invalid digits or too many of them.
    #[error("invalid bit pattern digits: {0}")]
    ParseInt(#[from] ParseIntError),
}

/// Result alias for fallible conversions.
pub type Result<T> = std::result::Result<T, Error>;
