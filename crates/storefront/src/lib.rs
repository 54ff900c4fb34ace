//! Fresh Farm Storefront library.
//!
//! Session, cart and catalog state for the Fresh Farm demo storefront,
//! independent of any rendering layer.
//!
//! # Modules
//!
//! - [`store`] - [`SessionCartStore`]: OTP sign-in, cart transitions, derived cart views
//! - [`catalog`] - Product catalog supply (built-in demo or JSON file)
//! - [`deal`] - Deal of the day and its reserved product identity
//! - [`countdown`] - Deal countdown value and its cancellable ticker task
//! - [`view`] - Popup and cart-panel visibility
//! - [`models`] - Session and cart types
//! - [`services`] - OTP code generation
//! - [`config`] - Environment configuration
//! - [`error`] - Startup and I/O errors

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod countdown;
pub mod deal;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod view;

pub use catalog::Catalog;
pub use config::StorefrontConfig;
pub use countdown::{Countdown, CountdownHandle, spawn_countdown};
pub use deal::{DEAL_PRODUCT_ID, Deal};
pub use error::AppError;
pub use store::SessionCartStore;
pub use view::{PopupState, ViewState};
