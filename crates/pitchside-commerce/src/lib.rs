//! E-commerce domain types and logic for Pitchside.
//!
//! This crate provides the domain model of the shop:
//!
//! - **Catalog**: Products, categories, slugs
//! - **Cart**: Session cart with quantity accumulation and pricing
//! - **Checkout**: Orders and order lines
//! - **Query**: Catalog filtering (text search, category, activity)
//!
//! # Example
//!
//! ```rust,ignore
//! use pitchside_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(product.id.clone(), 2);
//!
//! let view = CartView::price(&cart, |id| store.product(id));
//! println!("Total: {}", view.total.display());
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod pricing;
pub mod query;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{slugify, Category, Product};

    // Cart
    pub use crate::cart::Cart;
    pub use crate::pricing::{CartLineView, CartView};

    // Checkout
    pub use crate::checkout::{CustomerInfo, Order, OrderItem, OrderStatus};

    // Query
    pub use crate::query::CatalogQuery;
}
