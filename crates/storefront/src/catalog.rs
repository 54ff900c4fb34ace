//! Product catalog supply.
//!
//! The catalog is built once at startup, either from the built-in demo
//! products or from a JSON file, and is read-only afterwards. It also carries
//! the deal-of-the-day record so cart lines for the promotional product can be
//! resolved even though that product is not listed.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use fresh_farm_core::{Category, Product, ProductId};

use crate::deal::{DEAL_PRODUCT_ID, Deal};

/// Default base URL for generated product images.
pub const DEFAULT_IMAGE_BASE: &str = "https://placehold.co/600x400";

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("product id {0} is reserved for the deal of the day")]
    ReservedId(ProductId),
}

/// Build a placeholder image URL showing the product title.
///
/// ```
/// use fresh_farm_storefront::catalog::placeholder_image;
///
/// assert_eq!(
///     placeholder_image("https://placehold.co/600x400", "Sweet Corn"),
///     "https://placehold.co/600x400?text=Sweet%20Corn",
/// );
/// ```
#[must_use]
pub fn placeholder_image(base: &str, title: &str) -> String {
    format!("{base}?text={}", urlencoding::encode(title))
}

/// Catalog entry as read from JSON. `image` falls back to a placeholder.
#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: ProductId,
    title: String,
    price: Decimal,
    stock: Option<u32>,
    category: Category,
    #[serde(default)]
    description: String,
    image: Option<String>,
}

impl ProductRecord {
    fn into_product(self, image_base: &str) -> Product {
        let image = self
            .image
            .unwrap_or_else(|| placeholder_image(image_base, &self.title));
        Product {
            id: self.id,
            title: self.title,
            price: self.price,
            stock: self.stock,
            category: self.category,
            description: self.description,
            image,
        }
    }
}

/// Read-only product lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    promo: Product,
}

impl Catalog {
    /// Build a catalog from supplier products and the promotional record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two products share an id,
    /// `CatalogError::NegativePrice` for a price below zero, and
    /// `CatalogError::ReservedId` if a listed product uses the deal id.
    pub fn new(products: Vec<Product>, promo: Product) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id == DEAL_PRODUCT_ID {
                return Err(CatalogError::ReservedId(product.id.clone()));
            }
            if product.unit_price().is_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        if promo.unit_price().is_negative() {
            return Err(CatalogError::NegativePrice(promo.id));
        }

        Ok(Self { products, promo })
    }

    /// The built-in demo catalog: six fruits and vegetables plus the deal.
    #[must_use]
    pub fn demo(image_base: &str, deal: &Deal) -> Self {
        let entry = |id: &str, title: &str, cents: i64, stock: u32, category, description: &str| {
            Product {
                id: ProductId::new(id),
                title: title.to_string(),
                price: Decimal::new(cents, 2),
                stock: Some(stock),
                category,
                description: description.to_string(),
                image: placeholder_image(image_base, title),
            }
        };

        let products = vec![
            entry("p1", "Tomato", 150, 120, Category::Vegetables, "Fresh local tomatoes."),
            entry("p2", "Banana", 60, 200, Category::Fruits, "Sweet ripe bananas."),
            entry("p3", "Spinach", 120, 80, Category::Vegetables, "Fresh green spinach."),
            entry("p4", "Mango", 250, 50, Category::Fruits, "Seasonal mangoes."),
            entry("p5", "Carrot", 90, 140, Category::Vegetables, "Crunchy orange carrots."),
            entry("p6", "Apple", 180, 90, Category::Fruits, "Juicy apples."),
        ];

        Self {
            products,
            promo: deal.product.clone(),
        }
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// Products without an `image` get a placeholder built from their title.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json(json: &str, image_base: &str, deal: &Deal) -> Result<Self, CatalogError> {
        let records: Vec<ProductRecord> = serde_json::from_str(json)?;
        let products = records
            .into_iter()
            .map(|r| r.into_product(image_base))
            .collect();
        Self::new(products, deal.product.clone())
    }

    /// Load a JSON catalog from disk.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, or any error
    /// from [`Catalog::from_json`].
    pub fn load(path: &Path, image_base: &str, deal: &Deal) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json, image_base, deal)?;
        info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Listed products, in supplier order. The deal is not included.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The promotional fallback record.
    #[must_use]
    pub const fn promo(&self) -> &Product {
        &self.promo
    }

    /// Look up a listed product.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a cart identity: listed products first, then the promotional
    /// record for the reserved deal id. Anything else is `None`.
    #[must_use]
    pub fn resolve(&self, id: &ProductId) -> Option<&Product> {
        self.get(id)
            .or_else(|| (Deal::is_deal_id(id) && self.promo.id == *id).then_some(&self.promo))
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn demo() -> Catalog {
        Catalog::demo(DEFAULT_IMAGE_BASE, &Deal::of_the_day())
    }

    #[test]
    fn test_demo_catalog_contents() {
        let catalog = demo();
        assert_eq!(catalog.len(), 6);
        let tomato = catalog.get(&ProductId::new("p1")).unwrap();
        assert_eq!(tomato.title, "Tomato");
        assert_eq!(tomato.price, Decimal::new(15, 1));
        assert_eq!(tomato.stock, Some(120));
        assert_eq!(tomato.image, "https://placehold.co/600x400?text=Tomato");
    }

    #[test]
    fn test_demo_catalog_passes_validation() {
        let catalog = demo();
        let rebuilt = Catalog::new(catalog.products().to_vec(), catalog.promo().clone());
        assert!(rebuilt.is_ok());
    }

    #[test]
    fn test_deal_is_resolvable_but_not_listed() {
        let catalog = demo();
        let deal_id = ProductId::new(DEAL_PRODUCT_ID);
        assert!(catalog.get(&deal_id).is_none());
        assert!(catalog.products().iter().all(|p| p.id != deal_id));
        assert_eq!(catalog.resolve(&deal_id).unwrap().title, "Premium Pumpkin");
    }

    #[test]
    fn test_unknown_id_does_not_resolve() {
        assert!(demo().resolve(&ProductId::new("p99")).is_none());
    }

    #[test]
    fn test_from_json_fills_missing_image() {
        let json = r#"[
            {"id": "c1", "title": "Sweet Corn", "price": "0.75", "stock": 10, "category": "Vegetables"},
            {"id": "c2", "title": "Kiwi", "price": "1.10", "category": "Fruits", "image": "/kiwi.png"}
        ]"#;
        let catalog = Catalog::from_json(json, "https://img.test", &Deal::of_the_day()).unwrap();
        assert_eq!(catalog.len(), 2);
        let corn = catalog.get(&ProductId::new("c1")).unwrap();
        assert_eq!(corn.image, "https://img.test?text=Sweet%20Corn");
        assert_eq!(corn.description, "");
        let kiwi = catalog.get(&ProductId::new("c2")).unwrap();
        assert_eq!(kiwi.image, "/kiwi.png");
        assert_eq!(kiwi.stock, None);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id": "c1", "title": "A", "price": "1", "category": "Fruits"},
            {"id": "c1", "title": "B", "price": "2", "category": "Fruits"}
        ]"#;
        let err = Catalog::from_json(json, DEFAULT_IMAGE_BASE, &Deal::of_the_day()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "c1"));
    }

    #[test]
    fn test_from_json_rejects_reserved_id() {
        let json = r#"[{"id": "deal-1", "title": "Fake", "price": "1", "category": "Fruits"}]"#;
        let err = Catalog::from_json(json, DEFAULT_IMAGE_BASE, &Deal::of_the_day()).unwrap_err();
        assert!(matches!(err, CatalogError::ReservedId(_)));
    }

    #[test]
    fn test_from_json_rejects_negative_price() {
        let json = r#"[{"id": "c1", "title": "A", "price": "-0.5", "category": "Fruits"}]"#;
        let err = Catalog::from_json(json, DEFAULT_IMAGE_BASE, &Deal::of_the_day()).unwrap_err();
        assert!(matches!(err, CatalogError::NegativePrice(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Catalog::from_json("{not json", DEFAULT_IMAGE_BASE, &Deal::of_the_day());
        assert!(matches!(err, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load(
            Path::new("/definitely/not/here.json"),
            DEFAULT_IMAGE_BASE,
            &Deal::of_the_day(),
        );
        assert!(matches!(err, Err(CatalogError::Io(_))));
    }
}
