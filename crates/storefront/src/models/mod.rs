//! Domain models for the storefront.
//!
//! - [`session`] - Signed-in session, pending OTP challenge, auth step
//! - [`cart`] - Cart mapping and its derived, render-ready views

pub mod cart;
pub mod session;

pub use cart::{Cart, CartError, CartItemView, CartLine, CartView, ResolvedLine, cart_total};
pub use session::{AuthSession, AuthStep, PendingChallenge};
