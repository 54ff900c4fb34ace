//! Integration tests for Fresh Farm.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fresh-farm-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_session` - Sign-in, cart and derived totals across a whole session
//! - `deal_countdown` - Deal pricing and the countdown ticker
