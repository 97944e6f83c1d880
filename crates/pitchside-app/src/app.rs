//! Application wiring and request dispatch.

use crate::config::AppConfig;
use crate::context::{RequestContext, Response};
use crate::error::AppError;
use crate::logging::{LogFormat, StructuredLogger};
use crate::router::{Endpoint, Router};
use crate::routes;
use pitchside_auth::{PasswordHasher, SessionId, ShopSession};
use pitchside_store::{MemoryStore, SessionStore};

/// The storefront application: configuration, storage, sessions and the
/// route table.
///
/// # Example
///
/// ```rust,ignore
/// let app = App::new(AppConfig::from_env());
/// seed::seed_demo_data(app.store(), app.hasher())?;
///
/// let response = app.handle(RequestContext::get("/shop/catalog")).await;
/// assert_eq!(response.status, 200);
/// ```
#[derive(Debug, Clone)]
pub struct App {
    config: AppConfig,
    store: MemoryStore,
    sessions: SessionStore<ShopSession>,
    hasher: PasswordHasher,
    router: Router,
}

impl App {
    /// Create an application with an empty store.
    pub fn new(config: AppConfig) -> Self {
        Self::with_store(config, MemoryStore::new())
    }

    /// Create an application over an existing store.
    pub fn with_store(config: AppConfig, store: MemoryStore) -> Self {
        Self {
            config,
            store,
            sessions: SessionStore::new(),
            hasher: PasswordHasher::new(),
            router: Router::storefront(),
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the data store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Get the session store.
    pub fn sessions(&self) -> &SessionStore<ShopSession> {
        &self.sessions
    }

    /// Get the password hasher.
    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Get the route table.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Handle one request.
    ///
    /// Resolves the route, ensures a session, dispatches the handler and
    /// logs the outcome. A request without a session cookie gets a fresh
    /// session id set on the response.
    pub async fn handle(&self, mut ctx: RequestContext) -> Response {
        let (session_id, fresh_session) = match ctx.session_id.clone() {
            Some(sid) => (sid, false),
            None => (SessionId::generate().as_str().to_string(), true),
        };
        ctx.session_id = Some(session_id.clone());

        let format = if self.config.is_development() {
            LogFormat::Human
        } else {
            LogFormat::Json
        };
        let logger = StructuredLogger::new(ctx.request_id.clone())
            .with_route(&ctx.path)
            .with_format(format);

        let result = match self.router.resolve(ctx.method, &ctx.path) {
            None => Ok(Response::not_found()),
            Some((endpoint, params)) => {
                ctx.params = params;
                self.dispatch(endpoint, &ctx, &session_id)
            }
        };

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                logger
                    .error_builder("handler failed")
                    .field("error", err.to_string())
                    .emit();
                err.to_response()
            }
        };

        logger
            .info_builder("request finished")
            .field("method", ctx.method.as_str())
            .field_i64("status", response.status as i64)
            .emit();

        if fresh_session {
            response.with_session_cookie(&session_id)
        } else {
            response
        }
    }

    fn dispatch(
        &self,
        endpoint: Endpoint,
        ctx: &RequestContext,
        sid: &str,
    ) -> Result<Response, AppError> {
        match endpoint {
            Endpoint::Home => routes::home::index(self, ctx, sid),
            Endpoint::ShopRoot => Ok(Response::redirect("/shop/catalog")),
            Endpoint::Catalog => routes::shop::catalog(self, ctx, sid),
            Endpoint::ProductDetail => routes::shop::product_detail(self, ctx, sid),
            Endpoint::CartAdd => routes::shop::cart_add(self, ctx, sid),
            Endpoint::CartRemove => routes::shop::cart_remove(self, ctx, sid),
            Endpoint::CartClear => routes::shop::cart_clear(self, ctx, sid),
            Endpoint::CartView => routes::shop::cart_view(self, ctx, sid),
            Endpoint::Checkout => routes::shop::checkout(self, ctx, sid),
            Endpoint::Register => routes::auth::register(self, ctx, sid),
            Endpoint::Login => routes::auth::login(self, ctx, sid),
            Endpoint::Logout => routes::auth::logout(self, ctx, sid),
            Endpoint::AdminRoot => routes::admin::admin_root(self, ctx, sid),
            Endpoint::AdminProducts => routes::admin::products(self, ctx, sid),
            Endpoint::AdminProductToggle => routes::admin::product_toggle(self, ctx, sid),
            Endpoint::AdminProductDelete => routes::admin::product_delete(self, ctx, sid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Method;

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = App::new(AppConfig::default());
        let response = app.handle(RequestContext::get("/no-such-page")).await;
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_fresh_session_gets_cookie() {
        let app = App::new(AppConfig::default());
        let response = app.handle(RequestContext::get("/")).await;
        let cookie = response
            .headers
            .iter()
            .find(|(k, _)| k == "set-cookie")
            .map(|(_, v)| v.clone());
        assert!(cookie.unwrap_or_default().starts_with("sid=sess_"));
    }

    #[tokio::test]
    async fn test_known_session_keeps_cookie_absent() {
        let app = App::new(AppConfig::default());
        let response = app
            .handle(RequestContext::get("/").with_session("sess_known"))
            .await;
        assert!(!response.headers.iter().any(|(k, _)| k == "set-cookie"));
    }

    #[tokio::test]
    async fn test_shop_root_redirects_to_catalog() {
        let app = App::new(AppConfig::default());
        let response = app
            .handle(RequestContext::new(Method::Get, "/shop"))
            .await;
        assert_eq!(response.location(), Some("/shop/catalog"));
    }
}
