//! ISBN check digit verification
//!
//! Both ISBN-10 and ISBN-13 are accepted, optionally prefixed with `ISBN`
//! and with single blanks or dashes between the digits.

use std::fmt::{self, Display, Formatter};
use std::io::{self, BufRead, Write};

/// A scanned ISBN, as digit values
///
/// The `X` check digit of an ISBN-10 is stored as 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isbn {
    Isbn10([u8; 10]),
    Isbn13([u8; 13]),
}

impl Isbn {
    /// Find an ISBN at the start of `s`, after optional blanks
    ///
    /// ```
    /// use toolshed::isbn::Isbn;
    ///
    /// assert!(matches!(Isbn::scan(b"ISBN 3-519-02357-X"), Some(Isbn::Isbn10(_))));
    /// assert!(matches!(Isbn::scan(b"978-0-306-40615-7 foo"), Some(Isbn::Isbn13(_))));
    /// assert_eq!(Isbn::scan(b"3-519-02357-Xa"), None);
    /// ```
    pub fn scan(s: &[u8]) -> Option<Self> {
        let mut pos = s
            .iter()
            .position(|b| !matches!(b, b' ' | b'\t'))
            .unwrap_or(s.len());
        if s[pos..].starts_with(b"ISBN") {
            pos += 4;
            while matches!(s.get(pos), Some(b' ' | b'\t')) {
                pos += 1;
            }
        }

        let mut digits = [0u8; 13];
        let mut count = 0;
        while count < digits.len() {
            // A separator only counts when more of the number follows
            let after = s.get(pos + 1);
            if matches!(s.get(pos), Some(b' ' | b'-'))
                && (after.is_some_and(u8::is_ascii_digit)
                    || (count == 9 && matches!(after, Some(b'X' | b'x'))))
            {
                pos += 1;
            }
            match s.get(pos) {
                Some(b) if b.is_ascii_digit() => digits[count] = b - b'0',
                _ => break,
            }
            count += 1;
            pos += 1;
        }
        if count == 9 && matches!(s.get(pos), Some(b'X' | b'x')) {
            digits[9] = 10;
            count = 10;
            pos += 1;
        }

        if s.get(pos).is_some_and(u8::is_ascii_alphanumeric) {
            return None;
        }

        match count {
            10 => digits[..10].try_into().ok().map(Isbn::Isbn10),
            13 => Some(Isbn::Isbn13(digits)),
            _ => None,
        }
    }

    /// The check digit the ISBN should have, 10 standing for `X`
    pub fn expected_check_digit(&self) -> u8 {
        match self {
            Isbn::Isbn10(d) => {
                let sum: u32 = d[..9]
                    .iter()
                    .zip((2..=10).rev())
                    .map(|(&d, w)| u32::from(d) * w)
                    .sum();
                ((11 - sum % 11) % 11) as u8
            }
            Isbn::Isbn13(d) => {
                let sum: u32 = d[..12]
                    .iter()
                    .zip([1, 3].into_iter().cycle())
                    .map(|(&d, w)| u32::from(d) * w)
                    .sum();
                ((10 - sum % 10) % 10) as u8
            }
        }
    }

    pub fn check_digit(&self) -> u8 {
        match self {
            Isbn::Isbn10(d) => d[9],
            Isbn::Isbn13(d) => d[12],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.check_digit() == self.expected_check_digit()
    }
}

fn digit_char(d: u8) -> char {
    match d {
        10 => 'X',
        d => char::from(b'0' + d),
    }
}

/// Result of checking one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    /// Carries the correct check digit
    Failed(char),
    Malformed,
}

impl Outcome {
    /// ```
    /// use toolshed::isbn::Outcome;
    ///
    /// assert_eq!(Outcome::of(b"0-306-40615-2"), Outcome::Passed);
    /// assert_eq!(Outcome::of(b"0-306-40615-3"), Outcome::Failed('2'));
    /// assert_eq!(Outcome::of(b"0-306-40615"), Outcome::Malformed);
    /// ```
    pub fn of(s: &[u8]) -> Self {
        match Isbn::scan(s) {
            None => Outcome::Malformed,
            Some(isbn) if isbn.is_valid() => Outcome::Passed,
            Some(isbn) => Outcome::Failed(digit_char(isbn.expected_check_digit())),
        }
    }

    /// Two character tag used when filtering lists
    pub fn tag(&self) -> String {
        match self {
            Outcome::Passed => "OK".to_owned(),
            Outcome::Failed(c) => format!("!{c}"),
            Outcome::Malformed => "!!".to_owned(),
        }
    }
}

/// Running totals over all checked candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
    pub malformed: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed(_) => self.failed += 1,
            Outcome::Malformed => self.malformed += 1,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.malformed == 0
    }
}

impl Display for Tally {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} passed, {} failed, {} malformed)",
            self.passed, self.failed, self.malformed
        )
    }
}

/// Check every line of `input`, copying it to `output` prefixed by the tag
/// of its [Outcome]
pub fn filter<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<Tally> {
    let mut tally = Tally::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        if input.read_until(b'\n', &mut line)? == 0 {
            break;
        }

        let outcome = Outcome::of(&line);
        tally.record(outcome);
        write!(output, "{} ", outcome.tag())?;
        output.write_all(&line)?;
        if !line.ends_with(b"\n") {
            output.write_all(b"\n")?;
        }
    }
    output.flush()?;
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isbn10_check_digits() {
        assert_eq!(Outcome::of(b"3-519-02357-1"), Outcome::Passed);
        assert_eq!(Outcome::of(b"3-519-02357-X"), Outcome::Failed('1'));
        assert_eq!(Outcome::of(b"3519023570"), Outcome::Failed('1'));
        assert_eq!(Outcome::of(b"0-8044-2957-0"), Outcome::Failed('X'));
        assert_eq!(Outcome::of(b"0-8044-2957-X"), Outcome::Passed);
        assert_eq!(Outcome::of(b"0 306 40615 2"), Outcome::Passed);
        assert_eq!(Outcome::of(b"0-306-40615-x"), Outcome::Failed('2'));
    }

    #[test]
    fn isbn13_check_digits() {
        assert_eq!(Outcome::of(b"978-0-306-40615-7"), Outcome::Passed);
        assert_eq!(Outcome::of(b"ISBN 9780306406157"), Outcome::Passed);
        assert_eq!(Outcome::of(b"978-0-306-40615-0"), Outcome::Failed('7'));
        assert_eq!(Outcome::of(b"978-3-16-148410-0"), Outcome::Passed);
    }

    #[test]
    fn surroundings() {
        assert_eq!(Outcome::of(b"  \tISBN\t0-306-40615-2\n"), Outcome::Passed);
        assert_eq!(Outcome::of(b"0-306-40615-2, some book"), Outcome::Passed);
        assert_eq!(Outcome::of(b"0-306-40615-2 some book"), Outcome::Passed);
        assert_eq!(Outcome::of(b"0-306-40615-2book"), Outcome::Malformed);
        assert_eq!(Outcome::of(b"0-306-40615-2 -"), Outcome::Passed);
    }

    #[test]
    fn malformed() {
        for s in [
            &b""[..],
            b"ISBN",
            b"0--306-40615-2",
            b"030640615",
            b"03064061522",
            b"97803064061570",
            b"97803064061X",
            b"X306406152",
        ] {
            assert_eq!(Outcome::of(s), Outcome::Malformed, "{}", String::from_utf8_lossy(s));
        }
    }

    #[test]
    fn filtering_a_list() {
        let input = b"0-306-40615-2 good\n0-306-40615-3 bad\nnothing\n978-0-306-40615-7";
        let mut out = Vec::new();
        let tally = filter(&input[..], &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OK 0-306-40615-2 good\n!2 0-306-40615-3 bad\n!! nothing\nOK 978-0-306-40615-7\n"
        );
        assert_eq!(
            tally,
            Tally {
                passed: 2,
                failed: 1,
                malformed: 1
            }
        );
        assert!(!tally.all_passed());
        assert_eq!(tally.to_string(), "(2 passed, 1 failed, 1 malformed)");
    }
}
