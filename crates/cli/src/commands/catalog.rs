//! `ff-cli catalog`: print the product grid and the deal of the day.

use std::io::Write;

use fresh_farm_storefront::error::Result;
use fresh_farm_storefront::{Catalog, Deal};

use super::render;

/// Print every product and the deal with its starting countdown.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list(out: &mut impl Write, catalog: &Catalog, deal: &Deal) -> Result<()> {
    writeln!(out, "Products ({}):", catalog.len())?;
    render::products(out, catalog)?;
    writeln!(out)?;
    render::deal(out, deal, deal.countdown)?;
    Ok(())
}
