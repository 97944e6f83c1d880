//! One-shot page-ready signal.

use tokio::sync::watch;

/// Listener side of a page's ready signal.
///
/// The signal fires at most once, when the page's structural content has
/// been assembled. Listeners that subscribe after the fact still observe
/// the fired state.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

impl ReadySignal {
    pub(crate) fn new(rx: watch::Receiver<bool>) -> Self {
        Self { rx }
    }

    /// Check whether the signal has fired.
    pub fn is_fired(&self) -> bool {
        *self.rx.borrow()
    }

    /// Wait until the signal fires.
    ///
    /// Returns `true` once fired. Returns `false` if the page was dropped
    /// without ever firing; in that case the waiter must not act.
    pub async fn wait(&self) -> bool {
        let mut rx = self.rx.clone();
        let result = rx.wait_for(|fired| *fired).await.is_ok();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fired_state_visible_to_late_subscriber() {
        let (tx, rx) = watch::channel(false);
        tx.send_replace(true);
        let signal = ReadySignal::new(rx);
        assert!(signal.is_fired());
    }

    #[tokio::test]
    async fn test_wait_returns_false_when_sender_dropped() {
        let (tx, rx) = watch::channel(false);
        let signal = ReadySignal::new(rx);
        drop(tx);
        assert!(!signal.wait().await);
    }

    #[tokio::test]
    async fn test_wait_completes_after_fire() {
        let (tx, rx) = watch::channel(false);
        let signal = ReadySignal::new(rx);

        let waiter = tokio::spawn(async move { signal.wait().await });
        tx.send_replace(true);
        assert!(waiter.await.unwrap());
    }
}
