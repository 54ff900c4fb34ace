//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `otp` - Sign-in code generation

pub mod otp;

pub use otp::{CodeGenerator, FixedCodeGenerator, RandomCodeGenerator};
