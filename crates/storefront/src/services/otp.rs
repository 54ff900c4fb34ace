//! OTP code generation.
//!
//! Codes are drawn from `1000..=9999`. The generator is a trait so tests and
//! scripted demos can pin the code.

use rand::Rng;

use fresh_farm_core::OtpCode;

/// Source of sign-in codes.
pub trait CodeGenerator {
    /// Produce the next code.
    fn generate(&mut self) -> OtpCode;
}

/// Uniformly random 4-digit codes from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&mut self) -> OtpCode {
        let value: u32 =
            rand::rng().random_range(u32::from(OtpCode::MIN)..=u32::from(OtpCode::MAX));
        OtpCode::clamped(value)
    }
}

/// Always returns the same code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCodeGenerator(OtpCode);

impl FixedCodeGenerator {
    #[must_use]
    pub const fn new(code: OtpCode) -> Self {
        Self(code)
    }
}

impl CodeGenerator for FixedCodeGenerator {
    fn generate(&mut self) -> OtpCode {
        self.0.clone()
    }
}
