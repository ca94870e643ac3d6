//! Check digits of ETH Zurich student numbers ("Legi" numbers)
//!
//! A number has seven digits plus a check digit and is usually written as
//! `NN-NNN-NNC`. The check digit uses the Luhn scheme.

/// A scanned number, without the dashes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Legi {
    /// Seven digits, check digit still missing
    Partial([u8; 7]),
    /// Seven digits and a check digit
    Full([u8; 8]),
}

impl Legi {
    /// Scan `NN[-]NNN[-]NN[C]`
    ///
    /// More digits than eight are rejected, anything else after the number
    /// is ignored.
    ///
    /// ```
    /// use toolshed::legi::Legi;
    ///
    /// assert_eq!(Legi::scan("12-345-674"), Some(Legi::Full([1, 2, 3, 4, 5, 6, 7, 4])));
    /// assert_eq!(Legi::scan("1234567"), Some(Legi::Partial([1, 2, 3, 4, 5, 6, 7])));
    /// assert_eq!(Legi::scan("12-345-6745"), None);
    /// ```
    pub fn scan(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        let mut digits = [0u8; 8];
        let mut count = 0;
        let mut pos = 0;

        while count < 8 {
            if (count == 2 || count == 5) && bytes.get(pos) == Some(&b'-') {
                pos += 1;
            }
            match bytes.get(pos) {
                Some(b) if b.is_ascii_digit() => digits[count] = b - b'0',
                _ => break,
            }
            count += 1;
            pos += 1;
        }

        match count {
            7 => {
                let mut partial = [0u8; 7];
                partial.copy_from_slice(&digits[..7]);
                Some(Legi::Partial(partial))
            }
            8 if !bytes.get(pos).is_some_and(u8::is_ascii_digit) => Some(Legi::Full(digits)),
            _ => None,
        }
    }

    /// The seven digits before the check digit
    pub fn body(&self) -> [u8; 7] {
        match self {
            Legi::Partial(d) => *d,
            Legi::Full(d) => {
                let mut body = [0u8; 7];
                body.copy_from_slice(&d[..7]);
                body
            }
        }
    }

    /// Whether the check digit is right; a [Legi::Partial] has none to check
    pub fn is_valid(&self) -> Option<bool> {
        match self {
            Legi::Partial(_) => None,
            Legi::Full(d) => Some(d[7] == check_digit(&self.body())),
        }
    }

    /// All digits including the correct check digit, e.g. `12345674`
    pub fn completed(&self) -> String {
        let body = self.body();
        body.iter()
            .chain(std::iter::once(&check_digit(&body)))
            .map(|d| char::from(b'0' + d))
            .collect()
    }

    /// All digits as given
    pub fn digits(&self) -> String {
        let digits: &[u8] = match self {
            Legi::Partial(d) => d,
            Legi::Full(d) => d,
        };
        digits.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

/// Luhn check digit: double every other digit starting with the first,
/// subtract 9 from products above 9 and round the sum up to a multiple of 10
pub fn check_digit(body: &[u8; 7]) -> u8 {
    let sum: u32 = body
        .iter()
        .zip([2, 1].into_iter().cycle())
        .map(|(&d, w)| match u32::from(d) * w {
            p if p > 9 => p - 9,
            p => p,
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}
