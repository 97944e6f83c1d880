//! Alert severity levels.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an alert, mirroring the flash categories the templates
/// style (`alert-success`, `alert-danger`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    /// Operation succeeded.
    Success,
    /// Neutral information.
    #[default]
    Info,
    /// Something to pay attention to.
    Warning,
    /// Operation failed.
    Danger,
}

impl AlertLevel {
    /// Get the level as its category string.
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }

    /// The style class carrying this level ("alert-success").
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertLevel::Success => "alert-success",
            AlertLevel::Info => "alert-info",
            AlertLevel::Warning => "alert-warning",
            AlertLevel::Danger => "alert-danger",
        }
    }

    /// Parse a category string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "success" => Some(AlertLevel::Success),
            "info" => Some(AlertLevel::Info),
            "warning" => Some(AlertLevel::Warning),
            "danger" => Some(AlertLevel::Danger),
            _ => None,
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for level in [
            AlertLevel::Success,
            AlertLevel::Info,
            AlertLevel::Warning,
            AlertLevel::Danger,
        ] {
            assert_eq!(AlertLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(AlertLevel::from_str("fatal"), None);
    }

    #[test]
    fn test_level_css_class() {
        assert_eq!(AlertLevel::Danger.css_class(), "alert-danger");
    }
}
