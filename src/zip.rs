//! Zip codes used as palette seeds.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of characters accepted by the zip entry field.
pub const MAX_ZIP_LEN: usize = 5;

/// A string of decimal digits.  It is never checked against a postal
/// database; only its value modulo 10 matters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Parse `s`, ignoring surrounding whitespace.  Empty and
    /// non-digit inputs are rejected with [`Error::InvalidInput`].
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            tracing::trace!(input = s, "rejecting zip code");
            return Err(Error::InvalidInput);
        }
        Ok(ZipCode(digits.to_string()))
    }

    /// The digits, without surrounding whitespace.
    pub fn as_str(&self) -> &str { &self.0 }

    /// Number of digits.
    pub fn len(&self) -> usize { self.0.len() }

    /// Always `false`: a parsed zip code has at least one digit.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// The numeric value modulo `m`, computed digit by digit so that
    /// arbitrarily long codes do not overflow.
    ///
    /// # Panics
    ///
    /// If `m == 0` or `m > usize::MAX / 10`.
    pub(crate) fn rem(&self, m: usize) -> usize {
        assert!(m > 0 && m <= usize::MAX / 10, "modulus {m} out of range");
        self.0.bytes()
            .fold(0, |acc, b| (acc * 10 + (b - b'0') as usize) % m)
    }
}

impl FromStr for ZipCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { ZipCode::parse(s) }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str { &self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        let z = ZipCode::parse("  90210\n").unwrap();
        assert_eq!(z.as_str(), "90210");
        assert_eq!(z.len(), 5);
    }

    #[test]
    fn leading_zeros_are_kept() {
        let z: ZipCode = "02134".parse().unwrap();
        assert_eq!(z.to_string(), "02134");
        assert_eq!(z.rem(10), 4);
    }

    #[test]
    fn rejects_non_digits() {
        for s in ["", "   ", "abc", "12a45", "-5", "+5", "1 2", "١٢"] {
            assert_eq!(ZipCode::parse(s), Err(Error::InvalidInput), "{s:?}");
        }
    }

    #[test]
    fn rem_long_codes() {
        let z = ZipCode::parse("123456789012345678901234567890").unwrap();
        assert_eq!(z.rem(10), 0);
        assert_eq!(z.rem(7), (123456789012345678901234567890u128 % 7) as usize);
    }

    #[test]
    #[should_panic(expected = "modulus 0 out of range")]
    fn rem_zero_modulus() {
        ZipCode::parse("12").unwrap().rem(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn rem_huge_modulus() {
        ZipCode::parse("99").unwrap().rem(usize::MAX);
    }
}
