//! `ff-cli demo`: a scripted sign-in and checkout.
//!
//! Requests an OTP, reads the code back out of the demo notice, signs in,
//! adds a catalog product and the deal product, then prints the cart.

use std::io::Write;

use tracing::info;

use fresh_farm_core::ProductId;
use fresh_farm_storefront::error::{AppError, Result};
use fresh_farm_storefront::services::CodeGenerator;
use fresh_farm_storefront::store::messages;
use fresh_farm_storefront::{Catalog, DEAL_PRODUCT_ID, SessionCartStore};

use super::render;

/// Default phone used when `--phone` is not given.
pub const DEFAULT_PHONE: &str = "+8801712345678";

/// Run the scripted session against `store`.
///
/// # Errors
///
/// Returns `AppError::Internal` if any step of the flow is rejected, or an
/// I/O error if writing to `out` fails.
pub fn run<G: CodeGenerator>(
    out: &mut impl Write,
    store: &mut SessionCartStore<G>,
    catalog: &Catalog,
    phone: &str,
) -> Result<()> {
    store.request_otp(phone);
    let notice = store
        .dismiss_notice()
        .ok_or_else(|| AppError::Internal("no notice after requesting an OTP".to_string()))?;
    render::notice(out, &notice)?;
    let code = notice
        .text
        .strip_prefix(messages::DEMO_OTP_PREFIX)
        .ok_or_else(|| AppError::Internal(format!("OTP request rejected: {}", notice.text)))?
        .to_string();

    store.verify_otp(&code);
    if let Some(notice) = store.dismiss_notice() {
        render::notice(out, &notice)?;
    }
    if !store.is_signed_in() {
        return Err(AppError::Internal("OTP verification failed".to_string()));
    }

    let first = catalog
        .products()
        .first()
        .map(|p| p.id.clone())
        .ok_or_else(|| AppError::Internal("catalog is empty".to_string()))?;
    for id in [first, ProductId::new(DEAL_PRODUCT_ID)] {
        store.add_to_cart(&id);
        store.dismiss_notice();
    }

    render::header(out, store)?;
    render::cart(out, &store.cart_view(catalog))?;
    info!(items = store.item_count(), "Demo session complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fresh_farm_core::OtpCode;
    use fresh_farm_storefront::Deal;
    use fresh_farm_storefront::catalog::DEFAULT_IMAGE_BASE;
    use fresh_farm_storefront::services::FixedCodeGenerator;

    use super::*;

    fn fixtures() -> (SessionCartStore<FixedCodeGenerator>, Catalog) {
        let deal = Deal::of_the_day();
        let store =
            SessionCartStore::with_generator(FixedCodeGenerator::new(OtpCode::parse("7301").unwrap()));
        (store, Catalog::demo(DEFAULT_IMAGE_BASE, &deal))
    }

    #[test]
    fn test_demo_fills_cart() {
        let (mut store, catalog) = fixtures();
        let mut out = Vec::new();
        run(&mut out, &mut store, &catalog, DEFAULT_PHONE).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[info] Demo OTP: 7301"));
        assert!(text.contains("[success] Signed in"));
        // Tomato 1.50 + Pumpkin 3.00
        assert!(text.contains("Total: $4.50"));
        assert_eq!(store.item_count(), 2);
    }

    #[test]
    fn test_demo_rejects_bad_phone() {
        let (mut store, catalog) = fixtures();
        let mut out = Vec::new();
        let err = run(&mut out, &mut store, &catalog, "01712345678").unwrap_err();
        assert!(err.to_string().contains("Invalid Bangladeshi phone"));
        assert!(!store.is_signed_in());
    }
}
