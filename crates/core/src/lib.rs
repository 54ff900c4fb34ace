//! Fresh Farm Core - Shared types library.
//!
//! This crate provides common types used across all Fresh Farm components:
//! - `storefront` - Session, cart and catalog state for the storefront
//! - `cli` - Terminal front end that drives the storefront
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no randomness,
//! no timers. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, phone numbers, OTP codes,
//!   notices and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
