/*
    Top-level
*/

//! IEEE-754 floating-point primitives for `f32` and `f64`.
//!
//! Every operation works on the encoding of its arguments and returns
//! the same bits as the C math library on the values it is checked
//! against. The per-format kernels in [`elementary::f32`] and
//! [`elementary::f64`] are `const fn`.

#[cfg(feature = "logging")]
macro_rules! trace {
    ($($arg:tt)+) => { log::trace!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! trace {
    ($($arg:tt)+) => {};
}

#[cfg(feature = "logging")]
macro_rules! debug {
    ($($arg:tt)+) => { log::debug!($($arg)+) };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug {
    ($($arg:tt)+) => {};
}

mod adjacent;
mod classify;
mod compare;
mod decompose;
mod layout;
mod round;
mod view;

pub mod elementary;
pub mod error;

pub use adjacent::*;
pub use classify::*;
pub use compare::*;
pub use decompose::*;
pub use elementary::{deg2rad, hypot, hypot3, log2, rad2deg, sin, sqrt};
pub use error::Error;
pub use layout::FloatKind;
pub use round::*;
pub use view::*;
