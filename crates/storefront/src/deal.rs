//! Deal of the day.
//!
//! The promotional product lives outside the base catalog. Its identity is
//! reserved: the cart may hold it, and [`Catalog::resolve`] falls back to
//! this record when the base catalog does not know the id.
//!
//! [`Catalog::resolve`]: crate::catalog::Catalog::resolve

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use fresh_farm_core::{Category, Price, Product, ProductId};

use crate::countdown::Countdown;

/// Reserved identity of the promotional product.
pub const DEAL_PRODUCT_ID: &str = "deal-1";

/// The promotional offer shown above the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    /// Product record used as the catalog fallback for [`DEAL_PRODUCT_ID`].
    pub product: Product,
    /// Price before the discount.
    pub original_price: Decimal,
    /// Review count shown under the title.
    pub review_count: u32,
    /// Time left when the page opens.
    pub countdown: Countdown,
}

impl Deal {
    /// The built-in deal: Premium Pumpkin, $3.00 instead of $5.00.
    #[must_use]
    pub fn of_the_day() -> Self {
        Self {
            product: Product {
                id: ProductId::new(DEAL_PRODUCT_ID),
                title: "Premium Pumpkin".to_string(),
                price: Decimal::new(300, 2),
                stock: None,
                category: Category::Vegetables,
                description: "Harvested just this morning! Our giant organic pumpkins are \
                              perfect for soups, pies, or decoration. Sweet, rich in texture, \
                              and absolutely chemical-free."
                    .to_string(),
                image: "/pumpkin.jpg".to_string(),
            },
            original_price: Decimal::new(500, 2),
            review_count: 128,
            countdown: Countdown::new(10, 45, 30),
        }
    }

    /// Replace the countdown start.
    #[must_use]
    pub fn with_countdown(mut self, countdown: Countdown) -> Self {
        self.countdown = countdown;
        self
    }

    /// Returns `true` if `id` is the reserved promotional identity.
    #[must_use]
    pub fn is_deal_id(id: &ProductId) -> bool {
        id.as_str() == DEAL_PRODUCT_ID
    }

    /// Discounted price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.product.unit_price()
    }

    /// Price before the discount.
    #[must_use]
    pub fn original(&self) -> Price {
        Price::new(self.original_price, self.price().currency_code)
    }

    /// Whole-percent discount off the original price (e.g. `40`).
    #[must_use]
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= Decimal::ZERO {
            return 0;
        }
        let saved = self.original_price - self.product.price;
        (saved / self.original_price * Decimal::ONE_HUNDRED)
            .round()
            .to_u32()
            .unwrap_or(0)
    }
}
