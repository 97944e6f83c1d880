//! Session cart.
//!
//! The cart stores product ids and quantities only; prices are resolved
//! against the live catalog when the cart is viewed or checked out, so a
//! price change is always reflected.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// A single cart line: a product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product.
    pub product_id: ProductId,
    /// Quantity, always >= 1.
    pub qty: i64,
}

/// A shopping cart stored in the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Cart lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quantity of a product, accumulating onto an existing line.
    ///
    /// Quantities below 1 are clamped to 1; the resulting line quantity is
    /// capped at [`MAX_QUANTITY_PER_LINE`].
    pub fn add(&mut self, product_id: ProductId, qty: i64) {
        let qty = qty.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.qty = line
                .qty
                .saturating_add(qty)
                .min(MAX_QUANTITY_PER_LINE);
            return;
        }
        self.lines.push(CartLine {
            product_id,
            qty: qty.min(MAX_QUANTITY_PER_LINE),
        });
    }

    /// Remove a product's line entirely. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Get the quantity of a product, 0 if absent.
    pub fn qty_of(&self, product_id: &ProductId) -> i64 {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map(|l| l.qty)
            .unwrap_or(0)
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_add_accumulates() {
        let mut cart = Cart::new();
        let id = ProductId::new("p1");
        cart.add(id.clone(), 2);
        cart.add(id.clone(), 3);
        assert_eq!(cart.qty_of(&id), 5);
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn test_cart_add_clamps_to_one() {
        let mut cart = Cart::new();
        let id = ProductId::new("p1");
        cart.add(id.clone(), 0);
        assert_eq!(cart.qty_of(&id), 1);
        cart.add(id.clone(), -5);
        assert_eq!(cart.qty_of(&id), 2);
    }

    #[test]
    fn test_cart_quantity_cap() {
        let mut cart = Cart::new();
        let id = ProductId::new("p1");
        cart.add(id.clone(), MAX_QUANTITY_PER_LINE);
        cart.add(id.clone(), 10);
        assert_eq!(cart.qty_of(&id), MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_cart_remove() {
        let mut cart = Cart::new();
        let id = ProductId::new("p1");
        cart.add(id.clone(), 1);
        assert!(cart.remove(&id));
        assert!(!cart.remove(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_clear_and_count() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("p1"), 2);
        cart.add(ProductId::new("p2"), 3);
        assert_eq!(cart.item_count(), 5);
        cart.clear();
        assert!(cart.is_empty());
    }
}
