//! Core types for Fresh Farm.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod notice;
pub mod otp;
pub mod phone;
pub mod price;
pub mod product;

pub use id::{ProductId, SessionId};
pub use notice::{Notice, NoticeKind};
pub use otp::{OtpCode, OtpCodeError};
pub use phone::{PhoneError, PhoneNumber};
pub use price::{CurrencyCode, Price};
pub use product::{Category, Product};
