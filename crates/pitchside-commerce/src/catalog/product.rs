//! Product types.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Full description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Units in stock.
    pub stock_qty: i64,
    /// Whether the product is visible to customers.
    pub is_active: bool,
    /// Owning category.
    pub category_id: CategoryId,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a new active product.
    pub fn new(
        category_id: CategoryId,
        name: impl Into<String>,
        slug: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            price,
            stock_qty: 0,
            is_active: true,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the stock quantity.
    pub fn with_stock(mut self, qty: i64) -> Self {
        self.stock_qty = qty;
        self
    }

    /// Check whether the product can be shown and sold.
    pub fn is_available(&self) -> bool {
        self.is_active
    }

    /// Flip the active flag.
    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
        self.touch();
    }

    /// Check whether the product name matches a case-insensitive
    /// substring query.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Update the last-modified timestamp.
    pub fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

/// Get current Unix timestamp.
pub(crate) fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample() -> Product {
        Product::new(
            CategoryId::new("cat-1"),
            "Мяч матчевый «Pro Match» (размер 5)",
            "ball-pro-match-5",
            Money::new(329_000, Currency::RUB),
        )
        .with_stock(40)
    }

    #[test]
    fn test_product_new_defaults() {
        let p = sample();
        assert!(p.is_active);
        assert_eq!(p.stock_qty, 40);
        assert!(p.description.is_none());
    }

    #[test]
    fn test_product_toggle_active() {
        let mut p = sample();
        p.toggle_active();
        assert!(!p.is_active);
        p.toggle_active();
        assert!(p.is_active);
    }

    #[test]
    fn test_product_name_matches() {
        let p = sample();
        assert!(p.name_matches("pro match"));
        assert!(p.name_matches("МЯЧ"));
        assert!(!p.name_matches("бутсы"));
    }
}
