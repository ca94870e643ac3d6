//! Field layout of binary64 values
//!
//! A binary64 value is stored as `Sign(1) Exponent(11) Significand(52)`, from
//! the most significant bit to the least significant one.

/// Number of explicitly stored significand bits
pub(crate) const FRACTION_BITS: u32 = 52;

/// Significand width including the implicit leading bit
pub(crate) const SIGNIFICANT_BITS: u32 = FRACTION_BITS + 1;

/// Bias of the stored exponent
pub(crate) const EXPONENT_BIAS: i64 = 1023;

/// Exponent bias plus the fraction width.
///
/// Adding this instead of [EXPONENT_BIAS] moves the binary point from left of
/// the 52 fraction bits to right of the integer mantissa.
pub(crate) const MANTISSA_BIAS: i64 = EXPONENT_BIAS + FRACTION_BITS as i64;

/// Largest biased exponent; reserved for infinities and NaNs
pub(crate) const MAX_BIASED_EXPONENT: u16 = 0x7ff;

/// Mask selecting the stored fraction bits
pub(crate) const FRACTION_MASK: u64 = (1 << FRACTION_BITS) - 1;

/// The implicit leading significand bit of normal numbers
pub(crate) const IMPLICIT_BIT: u64 = 1 << FRACTION_BITS;

/// Position of the sign bit
const SIGN_SHIFT: u32 = 63;

/// A binary64 value split into its three bit fields.
///
/// # Examples
///
/// ```
/// use toolshed_binary64::Binary64;
///
/// let fields = Binary64::from(-3.25);
/// assert!(fields.sign());
/// assert_eq!(fields.biased_exponent(), 1024);
/// assert_eq!(fields.significand(), 0xa_0000_0000_0000);
/// assert_eq!(f64::from(fields), -3.25);
///
/// // Fields wider than their bit width are rejected
/// assert_eq!(Binary64::new(false, 2048, 0), None);
/// assert_eq!(Binary64::new(false, 0, 1 << 52), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Binary64 {
    /// Set for negative values (including negative zero)
    sign: bool,
    /// Stored exponent, 0..=2047
    biased_exponent: u16,
    /// Stored fraction bits, without the implicit leading bit
    significand: u64,
}

impl Binary64 {
    /// Construct from raw fields; returns `None` if a field exceeds its width
    pub const fn new(sign: bool, biased_exponent: u16, significand: u64) -> Option<Self> {
        if biased_exponent > MAX_BIASED_EXPONENT || significand > FRACTION_MASK {
            return None;
        }
        Some(Self {
            sign,
            biased_exponent,
            significand,
        })
    }

    /// Signed zero
    pub const fn zero(sign: bool) -> Self {
        Self {
            sign,
            biased_exponent: 0,
            significand: 0,
        }
    }

    /// Signed infinity
    pub const fn infinity(sign: bool) -> Self {
        Self {
            sign,
            biased_exponent: MAX_BIASED_EXPONENT,
            significand: 0,
        }
    }

    /// Whether the sign bit is set
    pub const fn sign(&self) -> bool {
        self.sign
    }

    /// The stored 11-bit exponent
    pub const fn biased_exponent(&self) -> u16 {
        self.biased_exponent
    }

    /// The stored 52-bit fraction
    pub const fn significand(&self) -> u64 {
        self.significand
    }

    /// Split the bit pattern of a native double
    pub fn from_f64(value: f64) -> Self {
        Self::from_bits(value.to_bits())
    }

    /// Reassemble the native double
    pub fn to_f64(self) -> f64 {
        f64::from_bits(self.to_bits())
    }

    /// Construct from fields known to be in range; excess significand bits
    /// (the implicit bit of a normalized mantissa) are masked off
    pub(crate) const fn from_parts(sign: bool, biased_exponent: u16, significand: u64) -> Self {
        Self {
            sign,
            biased_exponent: biased_exponent & MAX_BIASED_EXPONENT,
            significand: significand & FRACTION_MASK,
        }
    }

    /// Bit-cast input side: split a raw 64-bit pattern into fields
    pub(crate) const fn from_bits(bits: u64) -> Self {
        Self {
            sign: bits >> SIGN_SHIFT != 0,
            biased_exponent: ((bits >> FRACTION_BITS) as u16) & MAX_BIASED_EXPONENT,
            significand: bits & FRACTION_MASK,
        }
    }

    /// Bit-cast output side: join the fields into a raw 64-bit pattern
    pub(crate) const fn to_bits(self) -> u64 {
        ((self.sign as u64) << SIGN_SHIFT)
            | ((self.biased_exponent as u64) << FRACTION_BITS)
            | (self.significand & FRACTION_MASK)
    }
}

impl From<f64> for Binary64 {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<Binary64> for f64 {
    fn from(fields: Binary64) -> Self {
        fields.to_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_known_patterns() {
        assert_eq!(Binary64::from_f64(1.0), Binary64::new(false, 1023, 0).unwrap());
        assert_eq!(
            Binary64::from_f64(-0.0),
            Binary64::zero(true),
        );
        assert_eq!(
            Binary64::from_f64(f64::NEG_INFINITY),
            Binary64::infinity(true)
        );
        assert_eq!(
            Binary64::from_f64(f64::MAX),
            Binary64::new(false, 2046, FRACTION_MASK).unwrap()
        );
    }

    #[test]
    fn bit_patterns_survive_the_split() {
        for bits in [
            0u64,
            1,
            0x8000_0000_0000_0000,
            0x7ff8_0000_0000_0000,
            0x4010_0000_0000_0000,
            0xc00a_0000_0000_0000,
            u64::MAX,
        ] {
            assert_eq!(Binary64::from_bits(bits).to_bits(), bits);
        }
    }

    #[test]
    fn zero_and_infinity_carry_their_sign() {
        assert_eq!(Binary64::zero(false).to_f64().to_bits(), 0.0f64.to_bits());
        assert_eq!(Binary64::zero(true).to_f64().to_bits(), (-0.0f64).to_bits());
        assert_eq!(Binary64::infinity(false).to_f64(), f64::INFINITY);
        assert_eq!(Binary64::infinity(true).to_f64(), f64::NEG_INFINITY);
    }
}
