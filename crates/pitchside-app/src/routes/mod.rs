//! Route handlers.

pub mod admin;
pub mod auth;
pub mod home;
pub mod shop;

use crate::app::App;
use crate::context::Response;
use crate::error::AppError;
use crate::render;
use pitchside_alerts::{AlertLevel, FlashMessage};
use pitchside_auth::ShopSession;

/// Load (or lazily create) the request's session payload.
pub(crate) fn session(app: &App, sid: &str) -> Result<ShopSession, AppError> {
    Ok(app.sessions().get_or_create(sid)?)
}

/// Queue a flash message for the next rendered page.
pub(crate) fn flash(
    app: &App,
    sid: &str,
    level: AlertLevel,
    message: &str,
) -> Result<(), AppError> {
    app.sessions().update(sid, |s| s.flash(level, message))?;
    Ok(())
}

/// Render a page, draining the session's pending flash messages into it.
pub(crate) fn render_page(
    app: &App,
    sid: &str,
    title: &str,
    body: &str,
) -> Result<Response, AppError> {
    let flashes = take_flashes(app, sid)?;
    Ok(render::page(app.config(), title, flashes, body))
}

fn take_flashes(app: &App, sid: &str) -> Result<Vec<FlashMessage>, AppError> {
    let mut taken = Vec::new();
    app.sessions().update(sid, |s| taken = s.take_flashes())?;
    Ok(taken)
}
