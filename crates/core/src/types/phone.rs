//! Bangladeshi mobile phone number type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Full national mobile pattern: `+8801`, an operator digit 3-9, then eight
/// subscriber digits. Digits are ASCII only.
static MOBILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+8801[3-9][0-9]{8}$").expect("Invalid regex"));

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input does not start with the `+8801` mobile prefix.
    #[error("phone number must start with {prefix}")]
    MissingCountryPrefix {
        /// Required prefix.
        prefix: &'static str,
    },
    /// The prefix is right but the operator digit or length is not.
    #[error("phone number must be {prefix} followed by an operator digit 3-9 and 8 digits")]
    InvalidFormat {
        /// Required prefix.
        prefix: &'static str,
    },
}

/// A Bangladeshi mobile number in international form, e.g. `+8801712345678`.
///
/// ## Constraints
///
/// - Exactly matches `^\+8801[3-9]\d{8}$` (ASCII digits)
/// - No whitespace, separators or trimming
///
/// ## Examples
///
/// ```
/// use fresh_farm_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("+8801712345678").is_ok());
///
/// assert!(PhoneNumber::parse("").is_err());               // empty
/// assert!(PhoneNumber::parse("01712345678").is_err());    // no country code
/// assert!(PhoneNumber::parse("+8801212345678").is_err()); // operator digit 2
/// assert!(PhoneNumber::parse("+880171234567").is_err());  // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Country code plus the leading mobile digit pair.
    pub const PREFIX: &'static str = "+8801";

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input:
    /// - Is empty
    /// - Does not start with `+8801`
    /// - Has an operator digit outside 3-9, a non-digit, or the wrong length
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !s.starts_with(Self::PREFIX) {
            return Err(PhoneError::MissingCountryPrefix {
                prefix: Self::PREFIX,
            });
        }

        if !MOBILE_RE.is_match(s) {
            return Err(PhoneError::InvalidFormat {
                prefix: Self::PREFIX,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = PhoneError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_numbers() {
        for operator in '3'..='9' {
            let number = format!("+8801{operator}12345678");
            assert!(PhoneNumber::parse(&number).is_ok(), "{number} should parse");
        }
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneError::Empty));
    }

    #[test]
    fn test_parse_missing_prefix() {
        for input in ["01712345678", "8801712345678", "+8811712345678", "+8802712345678"] {
            assert!(
                matches!(
                    PhoneNumber::parse(input),
                    Err(PhoneError::MissingCountryPrefix { .. })
                ),
                "{input} should be rejected for its prefix"
            );
        }
    }

    #[test]
    fn test_parse_bad_operator_digit() {
        for operator in ['0', '1', '2'] {
            let number = format!("+8801{operator}12345678");
            assert!(matches!(
                PhoneNumber::parse(&number),
                Err(PhoneError::InvalidFormat { .. })
            ));
        }
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(PhoneNumber::parse("+880171234567").is_err());
        assert!(PhoneNumber::parse("+88017123456789").is_err());
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(PhoneNumber::parse(" +8801712345678").is_err());
        assert!(PhoneNumber::parse("+8801712345678 ").is_err());
        assert!(PhoneNumber::parse("+8801712345678\n").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // Bengali digits are Unicode `\d` but not valid here.
        assert!(PhoneNumber::parse("+8801৭১২৩৪৫৬৭৮").is_err());
        assert!(PhoneNumber::parse("+88017১২৩৪৫৬৭৮").is_err());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let parsed: Result<PhoneNumber, _> = serde_json::from_str("\"+8801212345678\"");
        assert!(parsed.is_err());

        let phone: PhoneNumber = serde_json::from_str("\"+8801712345678\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+8801712345678\"");
    }
}
