//! Alert elements.

use crate::class_list::ClassList;
use crate::dismiss::{ALERT_CLASS, FADE_CLASS, SHOW_CLASS};
use crate::flash::FlashMessage;
use crate::level::AlertLevel;
use pitchside_commerce::ids::AlertId;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// A transient notification banner on a rendered page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: AlertId,
    /// Severity category.
    pub level: AlertLevel,
    /// Message text.
    pub message: String,
    /// Presentation classes.
    pub classes: ClassList,
}

impl Alert {
    /// Create a visible alert: `alert alert-{level} show`.
    pub fn new(level: AlertLevel, message: impl Into<String>) -> Self {
        Self {
            id: AlertId::generate(),
            level,
            message: message.into(),
            classes: ClassList::from_tokens([ALERT_CLASS, level.css_class(), SHOW_CLASS]),
        }
    }

    /// Create an alert with an explicit class list.
    pub fn with_classes(
        level: AlertLevel,
        message: impl Into<String>,
        classes: ClassList,
    ) -> Self {
        Self {
            id: AlertId::generate(),
            level,
            message: message.into(),
            classes,
        }
    }

    /// Check whether the alert is currently shown: `show` present and
    /// `fade` absent.
    pub fn is_visible(&self) -> bool {
        self.classes.contains(SHOW_CLASS) && !self.classes.contains(FADE_CLASS)
    }
}

impl From<FlashMessage> for Alert {
    fn from(flash: FlashMessage) -> Self {
        Alert::new(flash.level, flash.message)
    }
}

/// A shared handle to an alert element.
///
/// Each dismiss timer holds a handle to its own element only; there is
/// no shared state between elements.
#[derive(Debug, Clone)]
pub struct AlertHandle {
    inner: Arc<Mutex<Alert>>,
}

impl AlertHandle {
    /// Wrap an alert into a shared handle.
    pub fn new(alert: Alert) -> Self {
        Self {
            inner: Arc::new(Mutex::new(alert)),
        }
    }

    /// Read the alert through a closure.
    ///
    /// Best-effort: a poisoned element is treated as absent and `read`
    /// returns `None`.
    pub fn read<R>(&self, f: impl FnOnce(&Alert) -> R) -> Option<R> {
        self.inner.lock().ok().map(|alert| f(&alert))
    }

    /// Mutate the alert through a closure. Best-effort, as with `read`.
    pub fn update(&self, f: impl FnOnce(&mut Alert)) {
        if let Ok(mut alert) = self.inner.lock() {
            f(&mut alert);
        }
    }

    /// Snapshot the alert's current state.
    pub fn snapshot(&self) -> Option<Alert> {
        self.read(Alert::clone)
    }

    /// Check membership of a class token.
    pub fn has_class(&self, token: &str) -> bool {
        self.read(|alert| alert.classes.contains(token))
            .unwrap_or(false)
    }
}
