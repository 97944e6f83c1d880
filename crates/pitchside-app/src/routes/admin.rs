//! Admin routes: product management.

use crate::app::App;
use crate::context::{Method, RequestContext, Response};
use crate::error::AppError;
use crate::render::escape_html;
use crate::routes::{flash, render_page, session};
use pitchside_alerts::AlertLevel;
use pitchside_commerce::catalog::{slugify, Category, Product};
use pitchside_commerce::ids::{CategoryId, ProductId};
use pitchside_commerce::money::{Currency, Money};

/// `GET /admin` - entry point, forwards to the product list.
pub fn admin_root(app: &App, _ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if !is_admin(app, sid)? {
        return Ok(Response::forbidden());
    }
    Ok(Response::redirect("/admin/products"))
}

/// `GET|POST /admin/products` - list products and create new ones.
pub fn products(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if !is_admin(app, sid)? {
        return Ok(Response::forbidden());
    }

    if ctx.method == Method::Post {
        return create_product(app, ctx, sid);
    }

    let categories = app.store().categories_sorted()?;
    let products = app.store().all_products_newest_first()?;
    render_page(app, sid, "Товары", &products_body(&categories, &products))
}

/// `POST /admin/products/:id/toggle` - flip a product's visibility.
pub fn product_toggle(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if !is_admin(app, sid)? {
        return Ok(Response::forbidden());
    }

    let id = ProductId::new(ctx.param("id").unwrap_or_default());
    let Some(mut product) = app.store().product(&id)? else {
        return Ok(Response::not_found());
    };

    product.toggle_active();
    app.store().update_product(product)?;

    flash(app, sid, AlertLevel::Info, "Статус товара изменён.")?;
    Ok(Response::redirect("/admin/products"))
}

/// `POST /admin/products/:id/delete` - remove a product.
pub fn product_delete(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    if !is_admin(app, sid)? {
        return Ok(Response::forbidden());
    }

    let id = ProductId::new(ctx.param("id").unwrap_or_default());
    if !app.store().delete_product(&id)? {
        return Ok(Response::not_found());
    }

    flash(app, sid, AlertLevel::Info, "Товар удалён.")?;
    Ok(Response::redirect("/admin/products"))
}

fn is_admin(app: &App, sid: &str) -> Result<bool, AppError> {
    Ok(session(app, sid)?.is_admin)
}

fn create_product(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let name = ctx.form_field("name").to_string();
    let slug_input = ctx.form_field("slug");
    let description = ctx.form_field("description").to_string();
    let price_raw = ctx.form_field("price");
    let stock_raw = ctx.form_field("stock_qty");
    let category_id_raw = ctx.form_field("category_id");

    if name.is_empty() || category_id_raw.is_empty() {
        flash(app, sid, AlertLevel::Danger, "Заполните название и категорию.")?;
        return Ok(Response::redirect("/admin/products"));
    }

    // malformed numbers fall back, matching the form's lenient handling
    let price = Money::parse(price_raw, Currency::RUB)
        .unwrap_or_else(|_| Money::zero(Currency::RUB));
    let stock_qty = stock_raw.parse::<i64>().map(|v| v.max(0)).unwrap_or(0);

    let Some(category) = app.store().category(&CategoryId::new(category_id_raw))? else {
        flash(app, sid, AlertLevel::Danger, "Категория не найдена.")?;
        return Ok(Response::redirect("/admin/products"));
    };

    let slug = slugify(if slug_input.is_empty() {
        name.as_str()
    } else {
        slug_input
    });
    if app.store().product_by_slug(&slug)?.is_some() {
        flash(app, sid, AlertLevel::Warning, "Slug уже занят.")?;
        return Ok(Response::redirect("/admin/products"));
    }

    let mut product = Product::new(category.id, name, slug, price).with_stock(stock_qty);
    if !description.is_empty() {
        product = product.with_description(description);
    }
    app.store().insert_product(product)?;

    flash(app, sid, AlertLevel::Success, "Товар добавлен.")?;
    Ok(Response::redirect("/admin/products"))
}

fn products_body(categories: &[Category], products: &[Product]) -> String {
    let category_options = categories
        .iter()
        .map(|c| {
            format!(
                r#"                <option value="{}">{}</option>"#,
                escape_html(c.id.as_str()),
                escape_html(&c.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let rows = products
        .iter()
        .map(|p| {
            let status = if p.is_active { "активен" } else { "скрыт" };
            format!(
                r#"            <tr>
                <td>{name}</td>
                <td>{price}</td>
                <td>{stock}</td>
                <td>{status}</td>
                <td>
                    <form method="post" action="/admin/products/{id}/toggle">
                        <button type="submit">Вкл/выкл</button>
                    </form>
                    <form method="post" action="/admin/products/{id}/delete">
                        <button type="submit">Удалить</button>
                    </form>
                </td>
            </tr>"#,
                name = escape_html(&p.name),
                price = p.price.display(),
                stock = p.stock_qty,
                status = status,
                id = escape_html(p.id.as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <h1>Товары</h1>
        <form method="post" action="/admin/products">
            <input type="text" name="name" placeholder="Название">
            <input type="text" name="slug" placeholder="Slug">
            <textarea name="description" placeholder="Описание"></textarea>
            <input type="text" name="price" placeholder="Цена">
            <input type="number" name="stock_qty" placeholder="Остаток">
            <select name="category_id">
{category_options}
            </select>
            <button type="submit">Добавить</button>
        </form>
        <table>
{rows}
        </table>"#,
    )
}
