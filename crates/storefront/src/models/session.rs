//! Session-related types.
//!
//! Types held by the store for authentication state.

use serde::{Deserialize, Serialize};

use fresh_farm_core::{OtpCode, PhoneNumber};

/// Signed-in user identity.
///
/// Exists only after a successful OTP verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Verified phone number.
    pub phone: PhoneNumber,
}

/// An issued OTP awaiting verification.
///
/// Survives failed verification attempts; only a correct code clears it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingChallenge {
    /// Phone the code was issued for.
    pub phone: PhoneNumber,
    /// Expected code.
    pub code: OtpCode,
}

/// Which sign-in form the auth popup should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStep {
    EnterPhone,
    EnterCode,
    SignedIn,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_challenge_rejects_malformed_code() {
        let ok = r#"{"phone":"+8801712345678","code":"4821"}"#;
        let pending: PendingChallenge = serde_json::from_str(ok).unwrap();
        assert!(pending.code.matches("4821"));

        let bad_code = r#"{"phone":"+8801712345678","code":"abc"}"#;
        assert!(serde_json::from_str::<PendingChallenge>(bad_code).is_err());

        let bad_phone = r#"{"phone":"01712345678","code":"4821"}"#;
        assert!(serde_json::from_str::<PendingChallenge>(bad_phone).is_err());
    }
}
