//! Catalog product types.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{CurrencyCode, Price};

/// Product category shown on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Fruits,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vegetables => write!(f, "Vegetables"),
            Self::Fruits => write!(f, "Fruits"),
        }
    }
}

/// A catalog entry.
///
/// Products are immutable once the catalog is built. `price` is the unit
/// price in USD; `stock` is informational only and is never enforced by the
/// cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    /// Units on hand, if the supplier tracks it.
    #[serde(default)]
    pub stock: Option<u32>,
    pub category: Category,
    pub description: String,
    /// Image URL or static asset path.
    pub image: String,
}

impl Product {
    /// Unit price with currency.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::new(self.price, CurrencyCode::USD)
    }
}
