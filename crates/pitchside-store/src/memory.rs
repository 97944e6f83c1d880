//! Typed in-memory tables.

use crate::StoreError;
use pitchside_auth::User;
use pitchside_commerce::catalog::{Category, Product};
use pitchside_commerce::checkout::Order;
use pitchside_commerce::ids::{CategoryId, OrderId, ProductId, UserId};
use pitchside_commerce::query::CatalogQuery;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory store.
///
/// Cheap to clone; clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    users: RwLock<Vec<User>>,
    categories: RwLock<Vec<Category>>,
    products: RwLock<Vec<Product>>,
    orders: RwLock<Vec<Order>>,
    next_order_number: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // === users ===

    /// Insert a user; the email must be unique.
    pub fn insert_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.inner.users.write().map_err(|_| StoreError::Poisoned)?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::duplicate("email", user.email));
        }
        users.push(user);
        Ok(())
    }

    /// Find a user by id.
    pub fn user(&self, id: &UserId) -> Result<Option<User>, StoreError> {
        let users = self.inner.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.iter().find(|u| &u.id == id).cloned())
    }

    /// Find a user by email (stored lowercased).
    pub fn user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let email = email.trim().to_lowercase();
        let users = self.inner.users.read().map_err(|_| StoreError::Poisoned)?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    /// Replace a stored user, matched by id.
    pub fn update_user(&self, user: User) -> Result<(), StoreError> {
        let mut users = self.inner.users.write().map_err(|_| StoreError::Poisoned)?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => {
                *slot = user;
                Ok(())
            }
            None => Err(StoreError::NotFound(user.id.to_string())),
        }
    }

    // === categories ===

    /// Insert a category; name and slug must be unique.
    pub fn insert_category(&self, category: Category) -> Result<(), StoreError> {
        let mut categories = self
            .inner
            .categories
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        if categories.iter().any(|c| c.slug == category.slug) {
            return Err(StoreError::duplicate("slug", category.slug));
        }
        if categories.iter().any(|c| c.name == category.name) {
            return Err(StoreError::duplicate("name", category.name));
        }
        categories.push(category);
        Ok(())
    }

    /// Find a category by id.
    pub fn category(&self, id: &CategoryId) -> Result<Option<Category>, StoreError> {
        let categories = self
            .inner
            .categories
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        Ok(categories.iter().find(|c| &c.id == id).cloned())
    }

    /// Find a category by slug.
    pub fn category_by_slug(&self, slug: &str) -> Result<Option<Category>, StoreError> {
        let categories = self
            .inner
            .categories
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        Ok(categories.iter().find(|c| c.slug == slug).cloned())
    }

    /// All categories sorted by name.
    pub fn categories_sorted(&self) -> Result<Vec<Category>, StoreError> {
        let categories = self
            .inner
            .categories
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<Category> = categories.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    // === products ===

    /// Insert a product; the slug must be unique.
    pub fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self
            .inner
            .products
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        if products.iter().any(|p| p.slug == product.slug) {
            return Err(StoreError::duplicate("slug", product.slug));
        }
        products.push(product);
        Ok(())
    }

    /// Find a product by id.
    pub fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let products = self
            .inner
            .products
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        Ok(products.iter().find(|p| &p.id == id).cloned())
    }

    /// Find a product by slug, regardless of activity.
    pub fn product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        let products = self
            .inner
            .products
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        Ok(products.iter().find(|p| p.slug == slug).cloned())
    }

    /// Find an active product by slug, the storefront lookup.
    pub fn active_product_by_slug(&self, slug: &str) -> Result<Option<Product>, StoreError> {
        Ok(self
            .product_by_slug(slug)?
            .filter(|p| p.is_available()))
    }

    /// Find an active product by id, the cart-add lookup.
    pub fn active_product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.product(id)?.filter(|p| p.is_available()))
    }

    /// Replace a stored product, matched by id.
    pub fn update_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self
            .inner
            .products
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(StoreError::NotFound(product.id.to_string())),
        }
    }

    /// Delete a product. Returns whether one was removed.
    pub fn delete_product(&self, id: &ProductId) -> Result<bool, StoreError> {
        let mut products = self
            .inner
            .products
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        let before = products.len();
        products.retain(|p| &p.id != id);
        Ok(products.len() < before)
    }

    /// Active products passing the query filters, newest first, capped
    /// at `limit` when given.
    pub fn products_filtered(
        &self,
        query: &CatalogQuery,
        limit: Option<usize>,
    ) -> Result<Vec<Product>, StoreError> {
        let category_id = match &query.category_slug {
            Some(slug) => match self.category_by_slug(slug)? {
                Some(category) => Some(category.id),
                // unknown category slug matches nothing
                None => return Ok(Vec::new()),
            },
            None => None,
        };

        let products = self
            .inner
            .products
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        let mut matched: Vec<Product> = products
            .iter()
            .filter(|p| p.is_available())
            .filter(|p| query.matches_text(p))
            .filter(|p| match &category_id {
                Some(id) => &p.category_id == id,
                None => true,
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(limit) = limit {
            matched.truncate(limit);
        }
        Ok(matched)
    }

    /// Every product, newest first, for the admin listing.
    pub fn all_products_newest_first(&self) -> Result<Vec<Product>, StoreError> {
        let products = self
            .inner
            .products
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        let mut all: Vec<Product> = products.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    // === orders ===

    /// Insert an order, assigning its sequential display number.
    pub fn insert_order(&self, mut order: Order) -> Result<Order, StoreError> {
        order.number = self.inner.next_order_number.fetch_add(1, Ordering::SeqCst) + 1;
        let mut orders = self
            .inner
            .orders
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        orders.push(order.clone());
        Ok(order)
    }

    /// Find an order by id.
    pub fn order(&self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        let orders = self.inner.orders.read().map_err(|_| StoreError::Poisoned)?;
        Ok(orders.iter().find(|o| &o.id == id).cloned())
    }

    /// Every order in insertion order.
    pub fn orders(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.inner.orders.read().map_err(|_| StoreError::Poisoned)?;
        Ok(orders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_commerce::money::{Currency, Money};

    fn store_with_catalog() -> (MemoryStore, Category, Category) {
        let store = MemoryStore::new();
        let balls = Category::new("Мячи", "balls");
        let boots = Category::new("Бутсы", "boots");
        store.insert_category(balls.clone()).unwrap();
        store.insert_category(boots.clone()).unwrap();
        (store, balls, boots)
    }

    fn product(category: &Category, name: &str, slug: &str) -> Product {
        Product::new(
            category.id.clone(),
            name,
            slug,
            Money::new(100_000, Currency::RUB),
        )
    }

    #[test]
    fn test_user_unique_email() {
        let store = MemoryStore::new();
        store
            .insert_user(User::new("ivan@example.com", "hash", None))
            .unwrap();
        let dup = store.insert_user(User::new("Ivan@Example.com", "hash2", None));
        assert!(matches!(dup, Err(StoreError::Duplicate { .. })));

        let found = store.user_by_email("IVAN@example.com").unwrap();
        assert!(found.is_some());
    }

    #[test]
    fn test_category_sorted_by_name() {
        let (store, _, _) = store_with_catalog();
        let names: Vec<String> = store
            .categories_sorted()
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Бутсы".to_string(), "Мячи".to_string()]);
    }

    #[test]
    fn test_product_slug_unique() {
        let (store, balls, _) = store_with_catalog();
        store
            .insert_product(product(&balls, "Мяч", "ball"))
            .unwrap();
        let dup = store.insert_product(product(&balls, "Другой", "ball"));
        assert!(matches!(dup, Err(StoreError::Duplicate { .. })));
    }

    #[test]
    fn test_products_filtered_by_text_and_category() {
        let (store, balls, boots) = store_with_catalog();
        store
            .insert_product(product(&balls, "Мяч матчевый", "ball-match"))
            .unwrap();
        store
            .insert_product(product(&balls, "Мяч тренировочный", "ball-training"))
            .unwrap();
        store
            .insert_product(product(&boots, "Бутсы Speed", "boots-speed"))
            .unwrap();

        let by_text = store
            .products_filtered(&CatalogQuery::all().with_text("матчевый"), None)
            .unwrap();
        assert_eq!(by_text.len(), 1);

        let by_category = store
            .products_filtered(&CatalogQuery::all().with_category("balls"), None)
            .unwrap();
        assert_eq!(by_category.len(), 2);

        let unknown_category = store
            .products_filtered(&CatalogQuery::all().with_category("nothing"), None)
            .unwrap();
        assert!(unknown_category.is_empty());
    }

    #[test]
    fn test_products_filtered_skips_inactive() {
        let (store, balls, _) = store_with_catalog();
        let mut hidden = product(&balls, "Скрытый мяч", "ball-hidden");
        hidden.is_active = false;
        store.insert_product(hidden).unwrap();

        let listed = store.products_filtered(&CatalogQuery::all(), None).unwrap();
        assert!(listed.is_empty());
        assert!(store.active_product_by_slug("ball-hidden").unwrap().is_none());
        assert!(store.product_by_slug("ball-hidden").unwrap().is_some());
    }

    #[test]
    fn test_products_filtered_limit() {
        let (store, balls, _) = store_with_catalog();
        for i in 0..5 {
            store
                .insert_product(product(&balls, &format!("Мяч {i}"), &format!("ball-{i}")))
                .unwrap();
        }
        let capped = store
            .products_filtered(&CatalogQuery::all(), Some(3))
            .unwrap();
        assert_eq!(capped.len(), 3);
    }

    #[test]
    fn test_order_numbers_increment() {
        use pitchside_commerce::checkout::{CustomerInfo, Order};
        use pitchside_commerce::pricing::CartView;
        use pitchside_commerce::cart::Cart;

        let (store, balls, _) = store_with_catalog();
        let p = product(&balls, "Мяч", "ball");
        store.insert_product(p.clone()).unwrap();

        let mut cart = Cart::new();
        cart.add(p.id.clone(), 1);
        let view = CartView::price(&cart, Currency::RUB, |id| {
            store.product(id).ok().flatten()
        });
        let customer = CustomerInfo {
            name: "Иван".to_string(),
            phone: "+7 900".to_string(),
            email: "ivan@example.com".to_string(),
            delivery_address: None,
        };

        let order1 = Order::from_cart_view(UserId::new("u1"), customer.clone(), &view).unwrap();
        let order2 = Order::from_cart_view(UserId::new("u1"), customer, &view).unwrap();

        let stored1 = store.insert_order(order1).unwrap();
        let stored2 = store.insert_order(order2).unwrap();
        assert_eq!(stored1.number, 1);
        assert_eq!(stored2.number, 2);
        assert_eq!(store.orders().unwrap().len(), 2);
    }
}
