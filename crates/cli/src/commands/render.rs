//! Plain-text rendering of storefront state.
//!
//! Everything here only reads state; no function mutates the store.

use std::io::{self, Write};

use fresh_farm_core::{Notice, Product};
use fresh_farm_storefront::countdown::Countdown;
use fresh_farm_storefront::models::{AuthStep, CartView};
use fresh_farm_storefront::services::CodeGenerator;
use fresh_farm_storefront::{Catalog, Deal, SessionCartStore};

/// Navbar line: who is signed in and the cart badge.
pub fn header<G: CodeGenerator>(out: &mut impl Write, store: &SessionCartStore<G>) -> io::Result<()> {
    let who = store
        .auth()
        .map_or_else(|| "Not signed in".to_string(), |a| a.phone.to_string());
    writeln!(out, "Fresh Farm | {who} | Cart ({})", store.item_count())
}

/// Product grid.
pub fn products(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    for p in catalog.products() {
        let stock = p
            .stock
            .map_or_else(String::new, |s| format!(" ({s} in stock)"));
        writeln!(
            out,
            "  {:<6} {:<10} {:>7}  {}{stock}",
            p.id,
            p.title,
            p.unit_price().display(),
            p.category
        )?;
    }
    Ok(())
}

/// Product detail popup.
pub fn product_detail(out: &mut impl Write, product: &Product) -> io::Result<()> {
    writeln!(out, "{} - {}", product.title, product.unit_price().display())?;
    writeln!(out, "  {}", product.category)?;
    if !product.description.is_empty() {
        writeln!(out, "  {}", product.description)?;
    }
    writeln!(out, "  {}", product.image)
}

/// Deal of the day section.
pub fn deal(out: &mut impl Write, deal: &Deal, remaining: Countdown) -> io::Result<()> {
    writeln!(out, "Deal of the day: {} (-{}%)", deal.product.title, deal.discount_percent())?;
    writeln!(
        out,
        "  {} (was {}) - {} reviews",
        deal.price().display(),
        deal.original().display(),
        deal.review_count
    )?;
    if remaining.is_expired() {
        writeln!(out, "  Offer ended")
    } else {
        writeln!(out, "  Ends in {remaining}")
    }
}

/// Cart panel.
pub fn cart(out: &mut impl Write, view: &CartView) -> io::Result<()> {
    if view.is_empty() {
        writeln!(out, "Cart is empty.")?;
    }
    for item in &view.items {
        writeln!(
            out,
            "  {:<8} {:<16} x{:<3} {:>8}",
            item.id, item.title, item.quantity, item.line_price
        )?;
    }
    writeln!(out, "Total: {}", view.total)
}

/// Which sign-in form is showing.
pub fn auth_step(out: &mut impl Write, step: AuthStep) -> io::Result<()> {
    match step {
        AuthStep::EnterPhone => writeln!(out, "Sign in: enter `phone +8801XXXXXXXXX`"),
        AuthStep::EnterCode => writeln!(out, "Sign in: enter `otp <code>`"),
        AuthStep::SignedIn => writeln!(out, "Already signed in."),
    }
}

/// Toast.
pub fn notice(out: &mut impl Write, notice: &Notice) -> io::Result<()> {
    writeln!(out, "{notice}")
}
