//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name (unique).
    pub name: String,
    /// URL-friendly slug (unique).
    pub slug: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Category {
    /// Create a new category.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: CategoryId::generate(),
            name: name.into(),
            slug: slug.into(),
            created_at: crate::catalog::product::current_timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_new() {
        let c = Category::new("Мячи", "balls");
        assert_eq!(c.name, "Мячи");
        assert_eq!(c.slug, "balls");
        assert!(!c.id.as_str().is_empty());
    }
}
