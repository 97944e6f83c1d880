//! Application configuration.

use std::env;

/// Deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    /// Local development (default).
    #[default]
    Development,
    /// Production deployment.
    Production,
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Production => "production",
        }
    }

    /// Parse an environment name; anything but "production" is
    /// development.
    pub fn from_str(s: &str) -> Self {
        if s.trim().to_lowercase() == "production" {
            AppEnv::Production
        } else {
            AppEnv::Development
        }
    }
}

/// Configuration for the storefront.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Shop name shown in page titles.
    pub app_name: String,
    /// Cap on catalog listing size.
    pub items_per_page: usize,
    /// Deployment environment.
    pub env: AppEnv,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Football Shop".to_string(),
            items_per_page: 12,
            env: AppEnv::Development,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `APP_NAME`, `ITEMS_PER_PAGE` and
    /// `APP_ENV`, falling back to defaults for unset or invalid values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            app_name: env::var("APP_NAME").unwrap_or(defaults.app_name),
            items_per_page: env::var("ITEMS_PER_PAGE")
                .ok()
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.items_per_page),
            env: env::var("APP_ENV")
                .map(|v| AppEnv::from_str(&v))
                .unwrap_or(defaults.env),
        }
    }

    /// Set the shop name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the catalog listing cap.
    pub fn with_items_per_page(mut self, items: usize) -> Self {
        self.items_per_page = items;
        self
    }

    /// Set the deployment environment.
    pub fn with_env(mut self, env: AppEnv) -> Self {
        self.env = env;
        self
    }

    /// Check for a development environment.
    pub fn is_development(&self) -> bool {
        self.env == AppEnv::Development
    }
}
