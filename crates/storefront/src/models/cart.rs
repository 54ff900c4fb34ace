//! Cart mapping and derived cart views.
//!
//! The cart stores only `product id -> quantity`. Everything shown to the
//! user (resolved products, line prices, total, badge count) is derived on
//! read from the cart plus a [`Catalog`].

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use fresh_farm_core::{Price, Product, ProductId};

use crate::catalog::Catalog;

/// One cart entry: a product identity and a positive quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Rejected cart contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("duplicate cart line: {0}")]
    DuplicateLine(ProductId),
    #[error("cart line {0} has zero quantity")]
    ZeroQuantity(ProductId),
}

/// Mapping from product identity to quantity.
///
/// Keys are unique, every stored quantity is at least 1, and iteration
/// follows insertion order. Deserialized carts are checked against the same
/// rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        for (i, line) in lines.iter().enumerate() {
            if line.quantity == 0 {
                return Err(CartError::ZeroQuantity(line.product_id.clone()));
            }
            if lines.iter().take(i).any(|l| l.product_id == line.product_id) {
                return Err(CartError::DuplicateLine(line.product_id.clone()));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of `product_id`, creating the line if needed.
    ///
    /// Returns the new quantity. Quantities saturate at `u32::MAX`.
    pub fn increment(&mut self, product_id: &ProductId) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine {
            product_id: product_id.clone(),
            quantity: 1,
        });
        1
    }

    /// Remove the whole line for `product_id`.
    ///
    /// Returns the removed quantity, or `None` if there was no such line.
    pub fn remove(&mut self, product_id: &ProductId) -> Option<u32> {
        let index = self.lines.iter().position(|l| &l.product_id == product_id)?;
        Some(self.lines.remove(index).quantity)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Quantity held for `product_id`, if any.
    #[must_use]
    pub fn quantity(&self, product_id: &ProductId) -> Option<u32> {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.quantity)
    }

    /// Returns `true` if the cart has a line for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.quantity(product_id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Resolve each line against `catalog`, dropping lines whose product
    /// cannot be found.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<ResolvedLine<'a>> {
        self.lines
            .iter()
            .filter_map(|line| {
                let resolved = catalog.resolve(&line.product_id).map(|product| ResolvedLine {
                    product,
                    quantity: line.quantity,
                });
                if resolved.is_none() {
                    debug!(product_id = %line.product_id, "Dropping unresolvable cart line");
                }
                resolved
            })
            .collect()
    }
}

/// A cart line whose product has been looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl ResolvedLine<'_> {
    /// `price * quantity`, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price().times(self.quantity)
    }
}

/// Exact sum of `price * quantity` over `lines`.
#[must_use]
pub fn cart_total(lines: &[ResolvedLine<'_>]) -> Price {
    lines.iter().map(ResolvedLine::line_total).sum()
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    /// Badge count: distinct lines, not units.
    pub item_count: usize,
}

impl CartView {
    /// Create an empty cart view.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Price::zero().display(),
            item_count: 0,
        }
    }

    /// Returns `true` if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&ResolvedLine<'_>> for CartItemView {
    fn from(line: &ResolvedLine<'_>) -> Self {
        Self {
            id: line.product.id.clone(),
            title: line.product.title.clone(),
            image: line.product.image.clone(),
            quantity: line.quantity,
            price: line.product.unit_price().display(),
            line_price: line.line_total().display(),
        }
    }
}
