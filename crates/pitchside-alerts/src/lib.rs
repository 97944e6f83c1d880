//! Flash alerts with timed auto-dismiss.
//!
//! Rendered pages carry transient notification banners ("alerts"). Every
//! alert present when a page signals ready is scheduled to visually
//! dismiss after a fixed delay: the `fade` class is added and the `show`
//! class removed, and external styling turns that into a fade-out.
//!
//! The pieces:
//!
//! - [`Alert`] / [`AlertHandle`] - one banner and a shared handle to it
//! - [`ClassList`] - the banner's presentation classes
//! - [`AlertPage`] - the alerts of one rendered page
//! - [`ReadySignal`] - one-shot page-ready notification
//! - [`AutoDismiss`] - schedules the deferred dismiss per alert
//!
//! # Example
//!
//! ```rust,ignore
//! let page = AlertPage::new();
//! page.flash(AlertLevel::Success, "Заказ №7 оформлен.");
//!
//! AutoDismiss::install(&page);
//! page.mark_ready();
//! // 4000 ms later every alert has `fade` and lacks `show`.
//! ```

mod alert;
mod class_list;
mod dismiss;
mod flash;
mod level;
mod page;
mod ready;

pub use alert::{Alert, AlertHandle};
pub use class_list::ClassList;
pub use dismiss::{AutoDismiss, ALERT_CLASS, DISMISS_DELAY, FADE_CLASS, SHOW_CLASS};
pub use flash::FlashMessage;
pub use level::AlertLevel;
pub use page::AlertPage;
pub use ready::ReadySignal;
