//! Newtype IDs for type-safe entity references.
//!
//! Product identities are opaque strings handed out by the catalog supplier
//! (`"p1"`, `"deal-1"`, ...). Session identities are random UUIDs used to
//! correlate log lines for one storefront session.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog identity of a product.
///
/// The cart is keyed by this type, and a cart may hold identities the
/// catalog cannot resolve, so no validation beyond "is a string" is done.
///
/// # Example
///
/// ```rust
/// use fresh_farm_core::ProductId;
///
/// let id = ProductId::new("p1");
/// assert_eq!(id.as_str(), "p1");
/// assert_eq!(id, "p1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Identity of one storefront session.
///
/// Only used as a structured logging field; it is never shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_conversions() {
        let from_str = ProductId::from("p1");
        let from_string = ProductId::from(String::from("p1"));
        assert_eq!(from_str, from_string);
        assert_eq!(from_str.to_string(), "p1");
    }

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::new("deal-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"deal-1\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionId::generate(), SessionId::generate());
    }
}
