//! One-time passcode type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when building an [`OtpCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpCodeError {
    /// The string is not four ASCII digits with a non-zero lead.
    #[error("otp code must be exactly 4 digits")]
    InvalidFormat,
}

/// A 4-digit sign-in code in `1000..=9999`.
///
/// Codes are compared as strings: the user's input must equal
/// [`OtpCode::as_str`] exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtpCode(String);

impl OtpCode {
    /// Smallest code that can be issued.
    pub const MIN: u16 = 1000;
    /// Largest code that can be issued.
    pub const MAX: u16 = 9999;

    /// Build a code from `value`, clamped into `1000..=9999`.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        let value = value.clamp(u32::from(Self::MIN), u32::from(Self::MAX));
        Self(value.to_string())
    }

    /// Parse a code from its string form.
    ///
    /// # Errors
    ///
    /// Returns `OtpCodeError::InvalidFormat` unless `s` is four ASCII digits
    /// not starting with `0`.
    pub fn parse(s: &str) -> Result<Self, OtpCodeError> {
        let well_formed = s.len() == 4
            && s.bytes().all(|b| b.is_ascii_digit())
            && !s.starts_with('0');
        if !well_formed {
            return Err(OtpCodeError::InvalidFormat);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string comparison against user input.
    #[must_use]
    pub fn matches(&self, input: &str) -> bool {
        self.0 == input
    }
}

impl TryFrom<String> for OtpCode {
    type Error = OtpCodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<OtpCode> for String {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(OtpCode::clamped(5).as_str(), "1000");
        assert_eq!(OtpCode::clamped(4821).as_str(), "4821");
        assert_eq!(OtpCode::clamped(123_456).as_str(), "9999");
    }

    #[test]
    fn test_parse() {
        assert!(OtpCode::parse("4821").is_ok());
        assert_eq!(OtpCode::parse("0821"), Err(OtpCodeError::InvalidFormat));
        assert_eq!(OtpCode::parse("482"), Err(OtpCodeError::InvalidFormat));
        assert_eq!(OtpCode::parse("48a1"), Err(OtpCodeError::InvalidFormat));
    }

    #[test]
    fn test_matches_is_exact() {
        let code = OtpCode::parse("4821").unwrap();
        assert!(code.matches("4821"));
        assert!(!code.matches(" 4821"));
        assert!(!code.matches("4821 "));
        assert!(!code.matches("04821"));
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let code: OtpCode = serde_json::from_str("\"4821\"").unwrap();
        assert_eq!(code.as_str(), "4821");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"4821\"");

        for bad in ["\"abc\"", "\"0821\"", "\"48210\"", "\"\""] {
            assert!(serde_json::from_str::<OtpCode>(bad).is_err(), "{bad}");
        }
    }
}
