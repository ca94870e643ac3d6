//! Decimal scanners for argument strings
//!
//! The scanners read a number from the start of a string and report how many
//! bytes they consumed, so the caller can continue after the number; this is
//! what parsing something like `10.0.0.1/8` needs. Out of range input is
//! rejected instead of wrapping around.
//!
//! # Examples
//!
//! ```
//! use toolshed_util::scan::{parse_long, scan_long, scan_uint};
//!
//! assert_eq!(scan_long("-42abc"), Some((-42, 3)));
//! assert_eq!(scan_uint("192.168"), Some((192, 3)));
//! assert_eq!(parse_long("+17"), Some(17));
//! assert_eq!(parse_long("17s"), None);
//! ```

/// Scan an optionally signed decimal integer at the start of `s`.
///
/// Returns the value and the number of bytes consumed, or `None` if `s` does
/// not start with a number or the number does not fit into an `i64`.
///
/// ```
/// use toolshed_util::scan::scan_long;
///
/// assert_eq!(scan_long("-9223372036854775808"), Some((i64::MIN, 20)));
/// assert_eq!(scan_long("9223372036854775808"), None);
/// assert_eq!(scan_long("-"), None);
/// assert_eq!(scan_long(" 1"), None);
/// ```
pub fn scan_long(s: &str) -> Option<(i64, usize)> {
    let bytes = s.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    // Accumulate the negated value so that i64::MIN stays reachable
    let mut value: i64 = 0;
    let mut end = start;
    for digit in bytes[start..].iter().take_while(|b| b.is_ascii_digit()) {
        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(digit - b'0'))?;
        end += 1;
    }

    if end == start {
        return None;
    }

    let value = if negative { value } else { value.checked_neg()? };
    Some((value, end))
}

/// Scan an unsigned decimal integer (no sign allowed) at the start of `s`.
///
/// ```
/// use toolshed_util::scan::scan_uint;
///
/// assert_eq!(scan_uint("4294967295"), Some((u32::MAX, 10)));
/// assert_eq!(scan_uint("4294967296"), None);
/// assert_eq!(scan_uint("+1"), None);
/// ```
pub fn scan_uint(s: &str) -> Option<(u32, usize)> {
    let mut value: u32 = 0;
    let mut end = 0;
    for digit in s.bytes().take_while(|b| b.is_ascii_digit()) {
        value = value.checked_mul(10)?.checked_add(u32::from(digit - b'0'))?;
        end += 1;
    }

    match end {
        0 => None,
        _ => Some((value, end)),
    }
}

/// Parse a whole string as an optionally signed decimal integer
pub fn parse_long(s: &str) -> Option<i64> {
    match scan_long(s)? {
        (value, end) if end == s.len() => Some(value),
        _ => None,
    }
}

/// Parse a whole string as an unsigned decimal integer
pub fn parse_uint(s: &str) -> Option<u32> {
    match scan_uint(s)? {
        (value, end) if end == s.len() => Some(value),
        _ => None,
    }
}
