#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
//! Exact decomposition and composition of IEEE 754 binary64 numbers
//!
//! Every finite double can be written as `mantissa * 2^exponent` with an
//! integer mantissa and an integer exponent. This crate converts between that
//! human readable form and the native `f64`.
//!
//! # Examples
//!
//! ```rust
//! use toolshed_binary64::{decode, encode, MantissaExponent};
//!
//! assert_eq!(encode(181, -2), Ok(45.25));
//! assert_eq!(decode(45.25), MantissaExponent::new(181, -2));
//!
//! // Integral values are shown with exponent zero
//! assert_eq!(decode(4.0), MantissaExponent::new(4, 0));
//! ```
//!
//! # Limitations
//!
//! - Subnormal numbers are not supported; they decode as zero and encoding a
//!   value below the normal range flushes to zero.
//! - Normalization truncates excess mantissa bits instead of rounding to
//!   nearest even.

mod bits;
mod codec;

pub use bits::Binary64;
pub use codec::{decode, encode, encode_or_nan, Binary64Error, MantissaExponent};
