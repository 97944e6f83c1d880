//! Cart pricing against the live catalog.

use crate::cart::Cart;
use crate::catalog::Product;
use crate::money::{Currency, Money};

/// A priced cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineView {
    /// The resolved product.
    pub product: Product,
    /// Quantity.
    pub qty: i64,
    /// Unit price at pricing time.
    pub unit_price: Money,
    /// qty * unit_price.
    pub line_total: Money,
}

/// A priced projection of a cart.
///
/// Lines whose product no longer exists or is inactive are skipped, the
/// way an out-of-catalog product silently disappears from the cart page.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Priced lines.
    pub lines: Vec<CartLineView>,
    /// Sum of line totals.
    pub total: Money,
}

impl CartView {
    /// Price a cart by resolving each line's product through `resolve`.
    ///
    /// `resolve` returns the current catalog product for an id, or `None`
    /// if it is gone; inactive products are filtered here.
    pub fn price<F>(cart: &Cart, currency: Currency, resolve: F) -> Self
    where
        F: Fn(&crate::ids::ProductId) -> Option<Product>,
    {
        let mut lines = Vec::new();
        let mut total = Money::zero(currency);

        for line in &cart.lines {
            let Some(product) = resolve(&line.product_id) else {
                continue;
            };
            if !product.is_available() {
                continue;
            }

            let unit_price = product.price;
            // saturate instead of dropping the line on a pathological qty
            let line_total = unit_price
                .try_multiply(line.qty)
                .unwrap_or(Money::new(i64::MAX, currency));
            total = total.try_add(&line_total).unwrap_or(total);

            lines.push(CartLineView {
                product,
                qty: line.qty,
                unit_price,
                line_total,
            });
        }

        Self { lines, total }
    }

    /// Check if no lines survived pricing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CategoryId, ProductId};

    fn product(id: &str, price_minor: i64, active: bool) -> Product {
        let mut p = Product::new(
            CategoryId::new("cat"),
            format!("Product {id}"),
            id,
            Money::new(price_minor, Currency::RUB),
        );
        p.id = ProductId::new(id);
        p.is_active = active;
        p
    }

    #[test]
    fn test_price_totals() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("a"), 2);
        cart.add(ProductId::new("b"), 1);

        let view = CartView::price(&cart, Currency::RUB, |id| match id.as_str() {
            "a" => Some(product("a", 100, true)),
            "b" => Some(product("b", 250, true)),
            _ => None,
        });

        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.total.amount_minor, 450);
        assert_eq!(view.lines[0].line_total.amount_minor, 200);
    }

    #[test]
    fn test_price_skips_missing_and_inactive() {
        let mut cart = Cart::new();
        cart.add(ProductId::new("gone"), 1);
        cart.add(ProductId::new("hidden"), 1);
        cart.add(ProductId::new("ok"), 1);

        let view = CartView::price(&cart, Currency::RUB, |id| match id.as_str() {
            "hidden" => Some(product("hidden", 100, false)),
            "ok" => Some(product("ok", 300, true)),
            _ => None,
        });

        assert_eq!(view.lines.len(), 1);
        assert_eq!(view.total.amount_minor, 300);
    }

    #[test]
    fn test_price_empty_cart() {
        let view = CartView::price(&Cart::new(), Currency::RUB, |_| None);
        assert!(view.is_empty());
        assert!(view.total.is_zero());
    }
}
