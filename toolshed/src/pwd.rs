//! Random password generation
//!
//! A password is described by a pattern: `<n><letter>` stands for `n`
//! characters drawn at random from the alphabet named by the letter, any
//! other character stands for itself. `3z-3z` gives passwords like
//! `k7P-eRw`.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// Pattern used when none is given
pub const DEFAULT_PATTERN: &str = "8z";

/// Letters and digits without the easily confused `l`, `I`, `O`, `0` and `1`
pub const UNAMBIGUOUS: &str = "abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PwdError {
    #[error("alphabets are named by a lowercase letter, not {0:?}")]
    InvalidName(String),
}

/// Named character sets, `a` to `z`
///
/// ```
/// use toolshed::pwd::Alphabets;
///
/// let mut alphabets = Alphabets::default();
/// assert_eq!(alphabets.get('d'), Some("0123456789"));
/// alphabets.set('h', "0123456789abcdef").unwrap();
/// assert_eq!(alphabets.get('h'), Some("0123456789abcdef"));
/// assert!(alphabets.set('H', "").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabets {
    sets: BTreeMap<char, Vec<char>>,
    names: BTreeMap<char, String>,
}

impl Default for Alphabets {
    fn default() -> Self {
        let lower = "abcdefghijklmnopqrstuvwxyz";
        let upper = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut alphabets = Self::empty();
        alphabets.insert('a', &format!("{lower}{upper}"));
        alphabets.insert('b', lower);
        alphabets.insert('c', upper);
        alphabets.insert('d', "0123456789");
        alphabets.insert('z', UNAMBIGUOUS);
        alphabets
    }
}

impl Alphabets {
    /// No alphabets at all
    pub fn empty() -> Self {
        Self {
            sets: BTreeMap::new(),
            names: BTreeMap::new(),
        }
    }

    fn insert(&mut self, name: char, chars: &str) {
        self.sets.insert(name, chars.chars().collect());
        self.names.insert(name, chars.to_owned());
    }

    /// Define or replace an alphabet
    pub fn set(&mut self, name: char, chars: &str) -> Result<(), PwdError> {
        if !name.is_ascii_lowercase() {
            return Err(PwdError::InvalidName(name.to_string()));
        }
        self.insert(name, chars);
        Ok(())
    }

    /// Define an alphabet from its `-s` form, `c=CHARS`
    pub fn set_from_str(&mut self, def: &str) -> Result<(), PwdError> {
        let mut chars = def.chars();
        match (chars.next(), chars.next()) {
            (Some(name), Some('=')) => self.set(name, chars.as_str()),
            _ => Err(PwdError::InvalidName(def.to_owned())),
        }
    }

    pub fn get(&self, name: char) -> Option<&str> {
        self.names.get(&name).map(String::as_str)
    }

    /// Defined alphabets in order of their names
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        self.names.iter().map(|(&name, chars)| (name, chars.as_str()))
    }

    /// One random character of alphabet `name`; `None` if the alphabet is
    /// empty or undefined
    fn pick<R: Rng + ?Sized>(&self, name: char, rng: &mut R) -> Option<char> {
        self.sets.get(&name)?.choose(rng).copied()
    }
}

/// Expand `pattern` into a password
///
/// A count of zero, or a count not followed by a lowercase letter, is copied
/// literally.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use toolshed::pwd::{generate, Alphabets};
///
/// let mut rng = StdRng::seed_from_u64(0);
/// let pwd = generate(&Alphabets::default(), "4d-2c", &mut rng);
/// assert_eq!(pwd.len(), 7);
/// assert!(pwd[..4].chars().all(|c| c.is_ascii_digit()));
/// assert_eq!(&pwd[4..5], "-");
/// ```
pub fn generate<R: Rng + ?Sized>(alphabets: &Alphabets, pattern: &str, rng: &mut R) -> String {
    let mut out = String::new();
    let mut rest = pattern;

    while let Some(c) = rest.chars().next() {
        if !c.is_ascii_digit() {
            out.push(c);
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (count, after) = rest.split_at(digits);
        let repeat = count.parse::<usize>().ok().filter(|&n| n > 0);
        match (repeat, after.chars().next()) {
            (Some(n), Some(name)) if name.is_ascii_lowercase() => {
                out.extend((0..n).filter_map(|_| alphabets.pick(name, rng)));
                rest = &after[1..];
            }
            _ => {
                out.push_str(count);
                rest = after;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn default_pattern_uses_unambiguous_characters() {
        let mut rng = rng();
        for _ in 0..100 {
            let pwd = generate(&Alphabets::default(), DEFAULT_PATTERN, &mut rng);
            assert_eq!(pwd.chars().count(), 8);
            assert!(pwd.chars().all(|c| UNAMBIGUOUS.contains(c)), "{pwd}");
        }
    }

    #[test]
    fn literals_are_copied() {
        let alphabets = Alphabets::default();
        assert_eq!(generate(&alphabets, "", &mut rng()), "");
        assert_eq!(generate(&alphabets, "abc-XYZ", &mut rng()), "abc-XYZ");
        assert_eq!(generate(&alphabets, "12", &mut rng()), "12");
        assert_eq!(generate(&alphabets, "12X", &mut rng()), "12X");
        assert_eq!(generate(&alphabets, "0d!", &mut rng()), "0d!");
        assert_eq!(generate(&alphabets, "ü3", &mut rng()), "ü3");
    }

    #[test]
    fn counts_select_from_alphabets() {
        let pwd = generate(&Alphabets::default(), "3b.2c.10d", &mut rng());
        let parts: Vec<&str> = pwd.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[0].len() == 3 && parts[0].chars().all(|c| c.is_ascii_lowercase()));
        assert!(parts[1].len() == 2 && parts[1].chars().all(|c| c.is_ascii_uppercase()));
        assert!(parts[2].len() == 10 && parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn undefined_and_empty_alphabets_produce_nothing() {
        let mut alphabets = Alphabets::default();
        alphabets.set('e', "").unwrap();
        assert_eq!(generate(&alphabets, "<5e><5q>", &mut rng()), "<><>");
    }

    #[test]
    fn custom_alphabets() {
        let mut alphabets = Alphabets::empty();
        alphabets.set_from_str("h=ä").unwrap();
        assert_eq!(generate(&alphabets, "3h", &mut rng()), "äää");
        assert_eq!(
            alphabets.set_from_str("hx"),
            Err(PwdError::InvalidName("hx".into()))
        );
        assert_eq!(
            alphabets.set_from_str("X=abc"),
            Err(PwdError::InvalidName("X".into()))
        );
    }

    #[test]
    fn same_seed_same_password() {
        let alphabets = Alphabets::default();
        assert_eq!(
            generate(&alphabets, "16a", &mut rng()),
            generate(&alphabets, "16a", &mut rng())
        );
    }

    #[test]
    fn lists_alphabets_in_order() {
        let names: String = Alphabets::default().iter().map(|(name, _)| name).collect();
        assert_eq!(names, "abcdz");
    }
}
