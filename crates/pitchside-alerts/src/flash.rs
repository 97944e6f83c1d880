//! Pending flash messages.

use crate::level::AlertLevel;
use serde::{Deserialize, Serialize};

/// A flash message queued in the session, waiting to be rendered as an
/// alert on the next page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashMessage {
    /// Severity category.
    pub level: AlertLevel,
    /// Message text.
    pub message: String,
}

impl FlashMessage {
    /// Create a flash message.
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}
