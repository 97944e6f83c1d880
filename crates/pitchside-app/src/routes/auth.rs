//! Authentication routes: register, login, logout.

use crate::app::App;
use crate::context::{Method, RequestContext, Response};
use crate::error::AppError;
use crate::routes::{flash, render_page};
use pitchside_alerts::AlertLevel;
use pitchside_auth::{PasswordHasher, User};

/// `GET|POST /auth/register` - create an account and sign in.
pub fn register(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if ctx.method == Method::Get {
        return render_page(app, sid, "Регистрация", &register_body());
    }

    let email = ctx.form_field("email").to_lowercase();
    let full_name = ctx.form_field("full_name").to_string();
    let password = ctx.form_value("password").to_string();
    let password2 = ctx.form_value("password2").to_string();

    if email.is_empty() || password.is_empty() {
        flash(app, sid, AlertLevel::Danger, "Email и пароль обязательны.")?;
        return render_page(app, sid, "Регистрация", &register_body());
    }

    if password != password2 {
        flash(app, sid, AlertLevel::Danger, "Пароли не совпадают.")?;
        return render_page(app, sid, "Регистрация", &register_body());
    }

    if PasswordHasher::validate_password(&password).is_err() {
        flash(
            app,
            sid,
            AlertLevel::Danger,
            "Пароль должен быть не короче 8 символов.",
        )?;
        return render_page(app, sid, "Регистрация", &register_body());
    }

    if app.store().user_by_email(&email)?.is_some() {
        flash(
            app,
            sid,
            AlertLevel::Warning,
            "Пользователь с таким email уже существует.",
        )?;
        return render_page(app, sid, "Регистрация", &register_body());
    }

    let user = User::with_password(
        app.hasher(),
        &email,
        &password,
        Some(full_name).filter(|n| !n.is_empty()),
    )?;
    app.store().insert_user(user.clone())?;

    app.sessions()
        .update(sid, |s| s.login(user.id.clone(), user.is_admin))?;

    flash(app, sid, AlertLevel::Success, "Регистрация выполнена.")?;
    Ok(Response::redirect("/"))
}

/// `GET|POST /auth/login` - sign in.
pub fn login(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if ctx.method == Method::Get {
        return render_page(app, sid, "Вход", &login_body());
    }

    let email = ctx.form_field("email").to_lowercase();
    let password = ctx.form_value("password").to_string();

    if email.is_empty() || password.is_empty() {
        flash(app, sid, AlertLevel::Danger, "Введите email и пароль.")?;
        return render_page(app, sid, "Вход", &login_body());
    }

    let user = app.store().user_by_email(&email)?;
    let user = match user {
        Some(user) if user.check_password(app.hasher(), &password) => user,
        _ => {
            flash(app, sid, AlertLevel::Danger, "Неверный email или пароль.")?;
            return render_page(app, sid, "Вход", &login_body());
        }
    };

    app.sessions()
        .update(sid, |s| s.login(user.id.clone(), user.is_admin))?;

    flash(app, sid, AlertLevel::Success, "Вход выполнен.")?;
    Ok(Response::redirect("/"))
}

/// `POST /auth/logout` - sign out.
pub fn logout(app: &App, _ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    app.sessions().update(sid, |s| s.logout())?;

    flash(app, sid, AlertLevel::Info, "Вы вышли из системы.")?;
    Ok(Response::redirect("/"))
}

fn register_body() -> String {
    r#"        <h1>Регистрация</h1>
        <form method="post" action="/auth/register">
            <input type="email" name="email" placeholder="Email">
            <input type="text" name="full_name" placeholder="Имя">
            <input type="password" name="password" placeholder="Пароль">
            <input type="password" name="password2" placeholder="Повторите пароль">
            <button type="submit">Зарегистрироваться</button>
        </form>"#
        .to_string()
}

fn login_body() -> String {
    r#"        <h1>Вход</h1>
        <form method="post" action="/auth/login">
            <input type="email" name="email" placeholder="Email">
            <input type="password" name="password" placeholder="Пароль">
            <button type="submit">Войти</button>
        </form>"#
        .to_string()
}
