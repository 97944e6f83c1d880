//! Timed auto-dismiss of alerts.
//!
//! Every alert element present when a page signals ready is scheduled,
//! independently, to dismiss after [`DISMISS_DELAY`]: its class list
//! gains [`FADE_CLASS`] and loses [`SHOW_CLASS`]. The visual fade itself
//! is external styling; this module only flips the classes.

use crate::page::AlertPage;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delay between page ready and the dismiss transition.
pub const DISMISS_DELAY: Duration = Duration::from_millis(4000);

/// Class marking an element as an alert banner.
pub const ALERT_CLASS: &str = "alert";

/// Class marking an alert as visible.
pub const SHOW_CLASS: &str = "show";

/// Class marking an alert as mid-transition / hidden.
pub const FADE_CLASS: &str = "fade";

/// Schedules the deferred dismiss of a page's alerts.
pub struct AutoDismiss;

impl AutoDismiss {
    /// Scan the page for elements bearing [`ALERT_CLASS`] and schedule
    /// each one's dismiss [`DISMISS_DELAY`] from now.
    ///
    /// The scan is a snapshot: alerts added afterwards are not picked up.
    /// Each timer runs as its own task, touches only its own element, and
    /// cannot be cancelled. Calling this twice schedules a second round
    /// of timers per element; the class mutations are idempotent so the
    /// second round is harmless.
    ///
    /// Returns the number of timers scheduled (zero matches is a no-op).
    pub fn activate_all(page: &AlertPage) -> usize {
        let matched = page.query(ALERT_CLASS);
        let scheduled = matched.len();

        for handle in matched {
            tokio::spawn(async move {
                tokio::time::sleep(DISMISS_DELAY).await;
                handle.update(|alert| {
                    alert.classes.add(FADE_CLASS);
                    alert.classes.remove(SHOW_CLASS);
                });
            });
        }

        scheduled
    }

    /// Subscribe [`Self::activate_all`] to the page's ready signal.
    ///
    /// The scan runs once, when the signal fires; if it never fires,
    /// nothing activates. Returns the task handle, resolving to the
    /// number of timers scheduled.
    pub fn install(page: &AlertPage) -> JoinHandle<usize> {
        let page = page.clone();
        tokio::spawn(async move {
            if page.ready_signal().wait().await {
                Self::activate_all(&page)
            } else {
                0
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Alert;
    use crate::class_list::ClassList;
    use crate::level::AlertLevel;
    use tokio::time::advance;

    /// Let spawned timer tasks run after the virtual clock moved.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn bare_alert(message: &str, classes: &[&str]) -> Alert {
        Alert::with_classes(
            AlertLevel::Info,
            message,
            ClassList::from_tokens(classes.iter().copied()),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_at_exact_boundary() {
        let page = AlertPage::new();
        let a = page.push(bare_alert("A", &["alert", "show"]));
        let b = page.push(bare_alert("B", &["alert", "show"]));
        let c = page.push(bare_alert("C", &["alert"]));

        assert_eq!(AutoDismiss::activate_all(&page), 3);
        settle().await;

        // one unit before the deadline nothing has changed
        advance(Duration::from_millis(3999)).await;
        settle().await;
        assert!(a.has_class(SHOW_CLASS));
        assert!(!a.has_class(FADE_CLASS));
        assert!(b.has_class(SHOW_CLASS));
        assert!(!c.has_class(FADE_CLASS));

        // at the deadline every matched element transitions
        advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(a.snapshot().unwrap().classes.to_string(), "alert fade");
        assert_eq!(b.snapshot().unwrap().classes.to_string(), "alert fade");
        // C never had `show`; removing it was a no-op
        assert_eq!(c.snapshot().unwrap().classes.to_string(), "alert fade");
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_alerts_is_noop() {
        let page = AlertPage::new();
        assert_eq!(AutoDismiss::activate_all(&page), 0);
        advance(DISMISS_DELAY).await;
        settle().await;
        assert!(page.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scan_is_a_snapshot() {
        let page = AlertPage::new();
        let early = page.flash(AlertLevel::Success, "early");

        AutoDismiss::activate_all(&page);
        settle().await;
        let late = page.flash(AlertLevel::Success, "late");

        advance(DISMISS_DELAY).await;
        settle().await;

        assert!(early.has_class(FADE_CLASS));
        // the late element was not part of the snapshot
        assert!(late.has_class(SHOW_CLASS));
        assert!(!late.has_class(FADE_CLASS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_install_waits_for_ready() {
        let page = AlertPage::new();
        let alert = page.flash(AlertLevel::Warning, "pending");

        let installed = AutoDismiss::install(&page);
        settle().await;

        // without the ready signal nothing activates, however long we wait
        advance(Duration::from_millis(60_000)).await;
        settle().await;
        assert!(alert.has_class(SHOW_CLASS));

        page.mark_ready();
        settle().await;

        // the delay is measured from activation, not from page build
        advance(Duration::from_millis(3999)).await;
        settle().await;
        assert!(alert.has_class(SHOW_CLASS));

        advance(Duration::from_millis(1)).await;
        settle().await;
        assert!(alert.has_class(FADE_CLASS));
        assert!(!alert.has_class(SHOW_CLASS));

        assert_eq!(installed.await.unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_double_activation_schedules_twice() {
        let page = AlertPage::new();
        let alert = page.flash(AlertLevel::Info, "twice");

        assert_eq!(AutoDismiss::activate_all(&page), 1);
        assert_eq!(AutoDismiss::activate_all(&page), 1);
        settle().await;

        advance(DISMISS_DELAY).await;
        settle().await;

        // both rounds fired; the second round's mutations were no-ops
        assert!(alert.has_class(FADE_CLASS));
        assert!(!alert.has_class(SHOW_CLASS));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timers_touch_only_their_own_element() {
        let page = AlertPage::new();
        let dismissed = page.flash(AlertLevel::Info, "in scan");

        AutoDismiss::activate_all(&page);
        settle().await;

        let untouched = page.push(bare_alert("outside scan", &["alert", "show"]));
        advance(DISMISS_DELAY).await;
        settle().await;

        assert!(dismissed.has_class(FADE_CLASS));
        assert!(untouched.has_class(SHOW_CLASS));
    }
}
