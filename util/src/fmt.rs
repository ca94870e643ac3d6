//! `printf(3)` compatible number formatting

use std::fmt::{self, Display, Formatter};

/// Display helper formatting a double like `printf("%.*g", precision, value)`
///
/// Uses the shortest of fixed and scientific notation for the given number of
/// significant digits and removes trailing zeros.
///
/// ```
/// use toolshed_util::fmt::PrintfG;
///
/// assert_eq!(PrintfG(4.0, 15).to_string(), "4");
/// assert_eq!(PrintfG(-3.25, 15).to_string(), "-3.25");
/// assert_eq!(PrintfG(0.1, 15).to_string(), "0.1");
/// assert_eq!(PrintfG(0.1, 17).to_string(), "0.10000000000000001");
/// assert_eq!(PrintfG(1e100, 15).to_string(), "1e+100");
/// assert_eq!(PrintfG(0.0001, 15).to_string(), "0.0001");
/// assert_eq!(PrintfG(0.00001, 15).to_string(), "1e-05");
/// assert_eq!(PrintfG(f64::NEG_INFINITY, 15).to_string(), "-inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintfG(pub f64, pub usize);

impl Display for PrintfG {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let PrintfG(value, precision) = *self;
        let sign = if value.is_sign_negative() { "-" } else { "" };

        if value.is_nan() {
            return write!(f, "{sign}nan");
        }
        if value.is_infinite() {
            return write!(f, "{sign}inf");
        }
        if value == 0.0 {
            return write!(f, "{sign}0");
        }

        // A precision of zero is taken as one
        let precision = precision.max(1);

        // The decimal exponent after rounding decides the notation
        let scientific = format!("{:.*e}", precision - 1, value);
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return f.write_str(&scientific);
        };
        let exponent: i64 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= precision as i64 {
            let mantissa = strip_fraction_zeros(mantissa);
            let exp_sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{mantissa}e{exp_sign}{:02}", exponent.unsigned_abs())
        } else {
            let decimals = (precision as i64 - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(strip_fraction_zeros(&fixed))
        }
    }
}

/// Shorthand for `PrintfG(value, precision).to_string()`
pub fn format_g(value: f64, precision: usize) -> String {
    PrintfG(value, precision).to_string()
}

/// Remove trailing zeros of a fraction and a dangling decimal point
fn strip_fraction_zeros(s: &str) -> &str {
    match s.contains('.') {
        true => s.trim_end_matches('0').trim_end_matches('.'),
        false => s,
    }
}
