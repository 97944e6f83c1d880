//! The index page.

use crate::app::App;
use crate::context::{RequestContext, Response};
use crate::error::AppError;
use crate::render::escape_html;
use crate::routes::{render_page, session};

/// `GET /` - the landing page.
pub fn index(app: &App, _ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let session = session(app, sid)?;

    let greeting = match &session.user_id {
        Some(user_id) => match app.store().user(user_id)? {
            Some(user) => format!(
                "<p>Вы вошли как {}.</p>",
                escape_html(user.display_name())
            ),
            None => String::new(),
        },
        None => r#"<p><a href="/auth/login">Войти</a> или <a href="/auth/register">зарегистрироваться</a></p>"#.to_string(),
    };

    let body = format!(
        r#"        <h1>{}</h1>
        <p>Всё для футбола: форма, мячи, бутсы и экипировка.</p>
{}
        <p><a href="/shop/catalog">Перейти в каталог</a></p>"#,
        escape_html(&app.config().app_name),
        greeting
    );

    render_page(app, sid, "Главная", &body)
}
