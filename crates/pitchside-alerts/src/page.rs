//! The alerts of one rendered page.

use crate::alert::{Alert, AlertHandle};
use crate::level::AlertLevel;
use crate::ready::ReadySignal;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// The document analogue: the alert elements of one rendered page plus
/// its ready signal.
///
/// Cheap to clone; clones share the same elements and signal.
#[derive(Debug, Clone)]
pub struct AlertPage {
    inner: Arc<PageInner>,
}

#[derive(Debug)]
struct PageInner {
    alerts: Mutex<Vec<AlertHandle>>,
    ready_tx: watch::Sender<bool>,
}

impl AlertPage {
    /// Create an empty page that has not signalled ready.
    pub fn new() -> Self {
        let (ready_tx, _) = watch::channel(false);
        Self {
            inner: Arc::new(PageInner {
                alerts: Mutex::new(Vec::new()),
                ready_tx,
            }),
        }
    }

    /// Insert an alert element, returning its handle.
    pub fn push(&self, alert: Alert) -> AlertHandle {
        let handle = AlertHandle::new(alert);
        if let Ok(mut alerts) = self.inner.alerts.lock() {
            alerts.push(handle.clone());
        }
        handle
    }

    /// Insert a standard visible alert for a level and message.
    pub fn flash(&self, level: AlertLevel, message: impl Into<String>) -> AlertHandle {
        self.push(Alert::new(level, message))
    }

    /// Query elements whose class list currently contains `class`.
    ///
    /// This is a one-time snapshot, not a live query: elements added
    /// after the call are not included.
    pub fn query(&self, class: &str) -> Vec<AlertHandle> {
        match self.inner.alerts.lock() {
            Ok(alerts) => alerts
                .iter()
                .filter(|h| h.has_class(class))
                .cloned()
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// All element handles in insertion order.
    pub fn handles(&self) -> Vec<AlertHandle> {
        match self.inner.alerts.lock() {
            Ok(alerts) => alerts.clone(),
            Err(_) => Vec::new(),
        }
    }

    /// Snapshot every alert's current state, in insertion order.
    pub fn snapshot(&self) -> Vec<Alert> {
        self.handles()
            .iter()
            .filter_map(AlertHandle::snapshot)
            .collect()
    }

    /// Number of elements on the page.
    pub fn len(&self) -> usize {
        self.inner.alerts.lock().map(|a| a.len()).unwrap_or(0)
    }

    /// Check if the page has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fire the page-ready signal. Firing twice is a no-op.
    pub fn mark_ready(&self) {
        self.inner.ready_tx.send_replace(true);
    }

    /// Check whether the page has signalled ready.
    pub fn is_ready(&self) -> bool {
        *self.inner.ready_tx.borrow()
    }

    /// Subscribe to the ready signal.
    pub fn ready_signal(&self) -> ReadySignal {
        ReadySignal::new(self.inner.ready_tx.subscribe())
    }
}

impl Default for AlertPage {
    fn default() -> Self {
        Self::new()
    }
}
