//! Route table and path matching.

use crate::context::{Method, RouteParams};

/// The storefront's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Home,
    ShopRoot,
    Catalog,
    ProductDetail,
    CartAdd,
    CartRemove,
    CartClear,
    CartView,
    Checkout,
    Register,
    Login,
    Logout,
    AdminRoot,
    AdminProducts,
    AdminProductToggle,
    AdminProductDelete,
}

/// A single route: method, pattern, endpoint.
#[derive(Debug, Clone)]
pub struct Route {
    /// HTTP method this route accepts.
    pub method: Method,
    /// Pattern with `:param` segments (e.g., "/shop/product/:slug").
    pub pattern: String,
    /// Handler endpoint.
    pub endpoint: Endpoint,
}

/// The route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the storefront's full route table.
    pub fn storefront() -> Self {
        let mut router = Self::new();

        router.register(Method::Get, "/", Endpoint::Home);

        router.register(Method::Get, "/shop", Endpoint::ShopRoot);
        router.register(Method::Get, "/shop/catalog", Endpoint::Catalog);
        router.register(Method::Get, "/shop/product/:slug", Endpoint::ProductDetail);
        router.register(Method::Post, "/shop/cart/add/:id", Endpoint::CartAdd);
        router.register(Method::Post, "/shop/cart/remove/:id", Endpoint::CartRemove);
        router.register(Method::Post, "/shop/cart/clear", Endpoint::CartClear);
        router.register(Method::Get, "/shop/cart", Endpoint::CartView);
        router.register(Method::Get, "/shop/checkout", Endpoint::Checkout);
        router.register(Method::Post, "/shop/checkout", Endpoint::Checkout);

        router.register(Method::Get, "/auth/register", Endpoint::Register);
        router.register(Method::Post, "/auth/register", Endpoint::Register);
        router.register(Method::Get, "/auth/login", Endpoint::Login);
        router.register(Method::Post, "/auth/login", Endpoint::Login);
        router.register(Method::Post, "/auth/logout", Endpoint::Logout);

        router.register(Method::Get, "/admin", Endpoint::AdminRoot);
        router.register(Method::Get, "/admin/products", Endpoint::AdminProducts);
        router.register(Method::Post, "/admin/products", Endpoint::AdminProducts);
        router.register(
            Method::Post,
            "/admin/products/:id/toggle",
            Endpoint::AdminProductToggle,
        );
        router.register(
            Method::Post,
            "/admin/products/:id/delete",
            Endpoint::AdminProductDelete,
        );

        router
    }

    /// Register a route.
    pub fn register(&mut self, method: Method, pattern: impl Into<String>, endpoint: Endpoint) {
        self.routes.push(Route {
            method,
            pattern: pattern.into(),
            endpoint,
        });
    }

    /// All registered routes.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a method and path to an endpoint and its parameters.
    pub fn resolve(&self, method: Method, path: &str) -> Option<(Endpoint, RouteParams)> {
        for route in &self.routes {
            if route.method != method {
                continue;
            }
            if let Some(params) = match_pattern(&route.pattern, path) {
                return Some((route.endpoint, params));
            }
        }
        None
    }
}

/// Match a `:param` pattern against a concrete path.
fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (pat, seg) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = pat.strip_prefix(':') {
            if seg.is_empty() {
                return None;
            }
            params.insert(name.to_string(), seg.to_string());
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_static_route() {
        let router = Router::storefront();
        let (endpoint, params) = router.resolve(Method::Get, "/shop/catalog").unwrap();
        assert_eq!(endpoint, Endpoint::Catalog);
        assert!(params.is_empty());
    }

    #[test]
    fn test_resolve_with_param() {
        let router = Router::storefront();
        let (endpoint, params) = router
            .resolve(Method::Get, "/shop/product/ball-pro-match-5")
            .unwrap();
        assert_eq!(endpoint, Endpoint::ProductDetail);
        assert_eq!(params.get("slug").map(String::as_str), Some("ball-pro-match-5"));
    }

    #[test]
    fn test_resolve_respects_method() {
        let router = Router::storefront();
        assert!(router.resolve(Method::Get, "/auth/logout").is_none());
        assert!(router.resolve(Method::Post, "/auth/logout").is_some());
    }

    #[test]
    fn test_resolve_unknown_path() {
        let router = Router::storefront();
        assert!(router.resolve(Method::Get, "/nope").is_none());
        assert!(router.resolve(Method::Get, "/shop/product").is_none());
    }

    #[test]
    fn test_trailing_slash_tolerated() {
        let router = Router::storefront();
        assert!(router.resolve(Method::Get, "/shop/catalog/").is_some());
    }

    #[test]
    fn test_nested_params() {
        let router = Router::storefront();
        let (endpoint, params) = router
            .resolve(Method::Post, "/admin/products/p-17/toggle")
            .unwrap();
        assert_eq!(endpoint, Endpoint::AdminProductToggle);
        assert_eq!(params.get("id").map(String::as_str), Some("p-17"));
    }
}
