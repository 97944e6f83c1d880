//! Catalog filtering.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Filters for a catalog listing.
///
/// Matches the storefront's catalog page: an optional case-insensitive
/// substring on the product name, an optional category slug, active
/// products only, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Substring to match against product names.
    pub text: Option<String>,
    /// Category slug to restrict to.
    pub category_slug: Option<String>,
}

impl CatalogQuery {
    /// Query with no filters.
    pub fn all() -> Self {
        Self::default()
    }

    /// Set the text filter; empty strings are treated as no filter.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        };
        self
    }

    /// Set the category filter; empty strings are treated as no filter.
    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        self.category_slug = if slug.trim().is_empty() {
            None
        } else {
            Some(slug.trim().to_string())
        };
        self
    }

    /// Check whether a product passes the text filter.
    ///
    /// The category filter is resolved by the store, which knows the
    /// product's category slug.
    pub fn matches_text(&self, product: &Product) -> bool {
        match &self.text {
            Some(text) => product.name_matches(text),
            None => true,
        }
    }

    /// Check if no filters are set.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_none() && self.category_slug.is_none()
    }
}
