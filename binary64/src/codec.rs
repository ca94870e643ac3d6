//! Conversion between `mantissa * 2^exponent` and binary64

use std::fmt;

use crate::bits::{Binary64, IMPLICIT_BIT, MANTISSA_BIAS, MAX_BIASED_EXPONENT, SIGNIFICANT_BITS};

/// Errors raised by [encode]
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binary64Error {
    /// The mantissa's magnitude does not fit into a signed 64-bit integer.
    ///
    /// This only happens for `i64::MIN`, whose negation overflows.
    #[error("magnitude of mantissa {0} is not representable")]
    UnrepresentableMagnitude(i64),
}

/// An exact decomposition `mantissa * 2^exponent` of a binary64 value
///
/// Displays as the two integers separated by a blank.
///
/// ```
/// use toolshed_binary64::MantissaExponent;
///
/// assert_eq!(MantissaExponent::new(-13, -2).to_string(), "-13 -2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MantissaExponent {
    /// Integer significand including the implicit bit, carrying the sign
    pub mantissa: i64,
    /// Power of two the mantissa is scaled by
    pub exponent: i32,
}

impl MantissaExponent {
    /// Construct from its two parts
    pub const fn new(mantissa: i64, exponent: i32) -> Self {
        Self { mantissa, exponent }
    }
}

impl fmt::Display for MantissaExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mantissa, self.exponent)
    }
}

impl From<f64> for MantissaExponent {
    fn from(value: f64) -> Self {
        decode(value)
    }
}

impl TryFrom<MantissaExponent> for f64 {
    type Error = Binary64Error;

    fn try_from(me: MantissaExponent) -> Result<Self, Self::Error> {
        encode(me.mantissa, me.exponent)
    }
}

/// Compute `mantissa * 2^exponent` as a binary64 value.
///
/// Mantissas wider than 53 bits lose their low bits by truncation; there is
/// no rounding to nearest. Results above the normal binary64 range become
/// infinity, results below it become zero (subnormals are never produced),
/// both carrying the mantissa's sign. A zero mantissa always yields `+0.0`.
///
/// # Errors
///
/// [Binary64Error::UnrepresentableMagnitude] if `mantissa == i64::MIN`.
///
/// # Examples
///
/// ```
/// use toolshed_binary64::{encode, Binary64Error};
///
/// assert_eq!(encode(4, 0), Ok(4.0));
/// assert_eq!(encode(2, 1), Ok(4.0));
/// assert_eq!(encode(1, 2), Ok(4.0));
/// assert_eq!(encode(-13, -2), Ok(-3.25));
///
/// assert_eq!(encode(1, 5000), Ok(f64::INFINITY));
/// assert_eq!(encode(-1, -5000).map(f64::to_bits), Ok((-0.0f64).to_bits()));
///
/// assert_eq!(
///     encode(i64::MIN, 0),
///     Err(Binary64Error::UnrepresentableMagnitude(i64::MIN))
/// );
/// ```
pub fn encode(mantissa: i64, exponent: i32) -> Result<f64, Binary64Error> {
    if mantissa == 0 {
        return Ok(0.0);
    }

    let sign = mantissa < 0;
    let magnitude = mantissa
        .checked_abs()
        .ok_or(Binary64Error::UnrepresentableMagnitude(mantissa))?
        .unsigned_abs();

    // Normalize to exactly SIGNIFICANT_BITS bits; excess low bits are cut off
    let width = u64::BITS - magnitude.leading_zeros();
    let (significand, exponent) = if width > SIGNIFICANT_BITS {
        let shift = width - SIGNIFICANT_BITS;
        (magnitude >> shift, i64::from(exponent) + i64::from(shift))
    } else {
        let shift = SIGNIFICANT_BITS - width;
        (magnitude << shift, i64::from(exponent) - i64::from(shift))
    };

    // Biased exponents 0 and 2047 are outside the normal range as well
    let biased = exponent + MANTISSA_BIAS;
    let fields = if biased >= i64::from(MAX_BIASED_EXPONENT) {
        Binary64::infinity(sign)
    } else if biased <= 0 {
        Binary64::zero(sign)
    } else {
        // 0 < biased < 2047 was checked right above
        Binary64::from_parts(sign, biased as u16, significand)
    };

    Ok(fields.to_f64())
}

/// Like [encode], but reports an unrepresentable magnitude as a quiet NaN
///
/// ```
/// use toolshed_binary64::encode_or_nan;
///
/// assert_eq!(encode_or_nan(-13, -2), -3.25);
/// assert!(encode_or_nan(i64::MIN, 0).is_nan());
/// ```
pub fn encode_or_nan(mantissa: i64, exponent: i32) -> f64 {
    encode(mantissa, exponent).unwrap_or(f64::NAN)
}

/// Split a binary64 value into `mantissa * 2^exponent`.
///
/// Trailing zero bits are removed from the mantissa as long as the exponent
/// is negative, so fractions get the unique odd mantissa while integers up to
/// 2^53 come out with exponent zero. Zero and subnormal inputs decode as
/// `(0, 0)`.
///
/// # Examples
///
/// ```
/// use toolshed_binary64::{decode, MantissaExponent};
///
/// assert_eq!(decode(4.0), MantissaExponent::new(4, 0));
/// assert_eq!(decode(-3.25), MantissaExponent::new(-13, -2));
/// assert_eq!(decode(0.5), MantissaExponent::new(1, -1));
/// assert_eq!(decode(-0.0), MantissaExponent::new(0, 0));
/// assert_eq!(decode(2f64.powi(60)), MantissaExponent::new(1 << 52, 8));
/// ```
pub fn decode(value: f64) -> MantissaExponent {
    let fields = Binary64::from_f64(value);
    if fields.biased_exponent() == 0 {
        return MantissaExponent::default();
    }

    let mut significand = fields.significand() | IMPLICIT_BIT;
    let mut exponent = i64::from(fields.biased_exponent()) - MANTISSA_BIAS;

    if exponent < 0 {
        let strip = significand
            .trailing_zeros()
            .min(exponent.unsigned_abs() as u32);
        significand >>= strip;
        exponent += i64::from(strip);
    }

    // significand < 2^53 and -1074 <= exponent <= 971, so neither cast truncates
    let mantissa = significand as i64;
    MantissaExponent {
        mantissa: if fields.sign() { -mantissa } else { mantissa },
        exponent: exponent as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(v: Result<f64, Binary64Error>) -> u64 {
        v.unwrap().to_bits()
    }

    #[test]
    fn encode_small_integers() {
        assert_eq!(encode(4, 0), Ok(4.0));
        assert_eq!(encode(2, 1), Ok(4.0));
        assert_eq!(encode(1, 2), Ok(4.0));
        assert_eq!(encode(-13, -2), Ok(-3.25));
        assert_eq!(encode(181, -2), Ok(45.25));
        assert_eq!(encode(1, -1), Ok(0.5));
    }

    #[test]
    fn encode_zero_ignores_exponent() {
        for e in [i32::MIN, -5000, 0, 17, i32::MAX] {
            assert_eq!(bits(encode(0, e)), 0.0f64.to_bits());
        }
    }

    #[test]
    fn encode_truncates_instead_of_rounding() {
        // 2^53 + 1 needs 54 bits; the trailing one is dropped
        assert_eq!(encode((1 << 53) + 1, 0), Ok(9007199254740992.0));
        // 2^54 - 1 would round up to 2^54 under round-to-nearest
        assert_eq!(encode((1 << 54) - 1, 0), Ok(18014398509481982.0));
        assert_eq!(encode(i64::MAX, 0), Ok(9223372036854774784.0));
        assert_eq!(encode(-i64::MAX, 0), Ok(-9223372036854774784.0));
    }

    #[test]
    fn encode_overflow_is_signed_infinity() {
        assert_eq!(encode(1, 1024), Ok(f64::INFINITY));
        assert_eq!(encode(-1, 1024), Ok(f64::NEG_INFINITY));
        assert_eq!(encode(3, i32::MAX), Ok(f64::INFINITY));
        assert_eq!(encode(i64::MAX, 1000), Ok(f64::INFINITY));
        // biased exponent 2047 with a nonzero fraction must not turn into NaN
        assert_eq!(encode(3, 1023), Ok(f64::INFINITY));
        // the largest finite value is still reachable
        assert_eq!(encode((1 << 53) - 1, 971), Ok(f64::MAX));
    }

    #[test]
    fn encode_underflow_is_signed_zero() {
        assert_eq!(bits(encode(1, -1100)), 0.0f64.to_bits());
        assert_eq!(bits(encode(-1, -1100)), (-0.0f64).to_bits());
        assert_eq!(bits(encode(-7, i32::MIN)), (-0.0f64).to_bits());
        // biased exponent 0 would be a subnormal pattern
        assert_eq!(bits(encode(3, -1024)), 0.0f64.to_bits());
        // the smallest normal value is still reachable
        assert_eq!(encode(1, -1022), Ok(f64::MIN_POSITIVE));
    }

    #[test]
    fn encode_unrepresentable_magnitude() {
        assert_eq!(
            encode(i64::MIN, 0),
            Err(Binary64Error::UnrepresentableMagnitude(i64::MIN))
        );
        assert_eq!(
            encode(i64::MIN, -40),
            Err(Binary64Error::UnrepresentableMagnitude(i64::MIN))
        );
        assert!(encode_or_nan(i64::MIN, 3).is_nan());
        // one above the minimum is fine
        assert!(encode(i64::MIN + 1, 0).is_ok());
    }

    #[test]
    fn decode_known_values() {
        assert_eq!(decode(4.0), MantissaExponent::new(4, 0));
        assert_eq!(decode(-3.25), MantissaExponent::new(-13, -2));
        assert_eq!(decode(3.25), MantissaExponent::new(13, -2));
        assert_eq!(decode(2.0), MantissaExponent::new(2, 0));
        assert_eq!(decode(45.25), MantissaExponent::new(181, -2));
        assert_eq!(decode(1.0), MantissaExponent::new(1, 0));
        assert_eq!(decode(0.1), MantissaExponent::new(3602879701896397, -55));
        assert_eq!(decode(f64::MIN_POSITIVE), MantissaExponent::new(1, -1022));
        assert_eq!(decode(f64::MAX), MantissaExponent::new((1 << 53) - 1, 971));
    }

    #[test]
    fn decode_zero_and_subnormals() {
        assert_eq!(decode(0.0), MantissaExponent::new(0, 0));
        assert_eq!(decode(-0.0), MantissaExponent::new(0, 0));
        assert_eq!(decode(f64::MIN_POSITIVE / 2.0), MantissaExponent::new(0, 0));
        assert_eq!(decode(-5e-324), MantissaExponent::new(0, 0));
    }

    #[test]
    fn decode_infinity_round_trips() {
        assert_eq!(decode(f64::INFINITY), MantissaExponent::new(1 << 52, 972));
        assert_eq!(decode(f64::NEG_INFINITY), MantissaExponent::new(-1 << 52, 972));
        assert_eq!(encode(1 << 52, 972), Ok(f64::INFINITY));
        assert_eq!(encode(1, 1024), Ok(f64::INFINITY));

        let nan = decode(f64::NAN);
        assert_eq!(encode(nan.mantissa, nan.exponent).map(f64::abs), Ok(f64::INFINITY));
    }

    #[test]
    fn conversions_match_the_functions() {
        let me = MantissaExponent::from(-3.25);
        assert_eq!(me, MantissaExponent::new(-13, -2));
        assert_eq!(f64::try_from(me), Ok(-3.25));
        assert!(f64::try_from(MantissaExponent::new(i64::MIN, 0)).is_err());
    }
}
