//! HTML rendering.
//!
//! Pages are assembled from `format!` shells. The layout renders the
//! session's pending flash messages as alert banners, fires the page's
//! ready signal and installs the auto-dismisser, so every served page
//! carries live alert elements that fade out on schedule.

use crate::config::AppConfig;
use crate::context::Response;
use pitchside_alerts::{Alert, AlertPage, AutoDismiss, FlashMessage};

/// Escape text for safe interpolation into HTML.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the alert banners of a page.
pub fn alerts_html(page: &AlertPage) -> String {
    page.snapshot()
        .iter()
        .map(|alert| {
            format!(
                r#"        <div class="{}" role="alert">{}</div>"#,
                alert.classes,
                escape_html(&alert.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate the HTML shell wrapping a page body.
fn shell(config: &AppConfig, title: &str, alerts: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ru">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | {app_name}</title>
</head>
<body>
    <header>
        <nav>
            <a href="/">{app_name}</a>
            <a href="/shop/catalog">Каталог</a>
            <a href="/shop/cart">Корзина</a>
        </nav>
    </header>
    <main>
{alerts}
{body}
    </main>
</body>
</html>"#,
        title = escape_html(title),
        app_name = escape_html(&config.app_name),
        alerts = alerts,
        body = body,
    )
}

/// Render a full page response.
///
/// Flash messages become alert elements on the page; once the shell is
/// assembled the page signals ready and the auto-dismisser is scheduled
/// for every alert present at that moment.
pub fn page(
    config: &AppConfig,
    title: &str,
    flashes: Vec<FlashMessage>,
    body: &str,
) -> Response {
    let alerts = AlertPage::new();
    for flash in flashes {
        alerts.push(Alert::from(flash));
    }

    let html = shell(config, title, &alerts_html(&alerts), body);

    // the dismiss task outlives the response; its handle is not needed
    let _installed = AutoDismiss::install(&alerts);
    alerts.mark_ready();

    Response::html(html).with_alerts(alerts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitchside_alerts::{AlertLevel, DISMISS_DELAY, FADE_CLASS, SHOW_CLASS};
    use std::time::Duration;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Speed" & 'FG'</b>"#),
            "&lt;b&gt;&quot;Speed&quot; &amp; &#39;FG&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_alerts_html_classes() {
        let page = AlertPage::new();
        page.flash(AlertLevel::Success, "Вход выполнен.");
        let html = alerts_html(&page);
        assert!(html.contains(r#"class="alert alert-success show""#));
        assert!(html.contains("Вход выполнен."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_alerts_fade_after_delay() {
        let config = AppConfig::default();
        let flashes = vec![FlashMessage::new(AlertLevel::Info, "Корзина очищена.")];
        let response = page(&config, "Корзина", flashes, "<p>пусто</p>");

        assert_eq!(response.status, 200);
        assert!(response.body.contains("alert alert-info show"));
        assert!(response.alerts.is_ready());

        let handles = response.alerts.handles();
        assert_eq!(handles.len(), 1);

        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        tokio::time::advance(DISMISS_DELAY - Duration::from_millis(1)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert!(handles[0].has_class(SHOW_CLASS));

        tokio::time::advance(Duration::from_millis(1)).await;
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
        assert!(handles[0].has_class(FADE_CLASS));
        assert!(!handles[0].has_class(SHOW_CLASS));
    }

    #[tokio::test]
    async fn test_page_without_flashes_has_no_alerts() {
        let response = page(&AppConfig::default(), "Главная", Vec::new(), "<p>hi</p>");
        assert!(response.alerts.is_empty());
        assert!(!response.body.contains(r#"class="alert"#));
    }
}
