//! Storefront routes: catalog, cart, checkout.

use crate::app::App;
use crate::context::{Method, RequestContext, Response};
use crate::error::AppError;
use crate::render::escape_html;
use crate::routes::{flash, render_page, session};
use pitchside_alerts::AlertLevel;
use pitchside_auth::User;
use pitchside_commerce::cart::Cart;
use pitchside_commerce::catalog::{Category, Product};
use pitchside_commerce::checkout::{CustomerInfo, Order};
use pitchside_commerce::ids::ProductId;
use pitchside_commerce::money::Currency;
use pitchside_commerce::pricing::CartView;
use pitchside_commerce::query::CatalogQuery;
use std::collections::HashMap;

/// `GET /shop/catalog` - product listing with search and category filter.
pub fn catalog(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let q = ctx.query_param("q");
    let category_slug = ctx.query_param("category");

    let query = CatalogQuery::all().with_text(q).with_category(category_slug);
    let categories = app.store().categories_sorted()?;
    let products = app
        .store()
        .products_filtered(&query, Some(app.config().items_per_page))?;

    let body = catalog_body(&categories, &products, q, category_slug);
    render_page(app, sid, "Каталог", &body)
}

/// `GET /shop/product/:slug` - product detail page.
pub fn product_detail(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let slug = ctx.param("slug").unwrap_or_default();
    let Some(product) = app.store().active_product_by_slug(slug)? else {
        return Ok(Response::not_found());
    };

    let body = product_body(&product);
    render_page(app, sid, &product.name, &body)
}

/// `POST /shop/cart/add/:id` - add a product to the cart.
pub fn cart_add(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let id = ProductId::new(ctx.param("id").unwrap_or_default());
    let Some(product) = app.store().active_product(&id)? else {
        flash(app, sid, AlertLevel::Danger, "Товар не найден.")?;
        return Ok(Response::redirect("/shop/catalog"));
    };

    // absent or malformed qty means 1, negatives are clamped by the cart
    let qty = ctx.form_field("qty").parse::<i64>().unwrap_or(1);
    app.sessions()
        .update(sid, |s| s.cart.add(product.id.clone(), qty))?;

    flash(app, sid, AlertLevel::Success, "Товар добавлен в корзину.")?;
    Ok(Response::redirect("/shop/cart"))
}

/// `POST /shop/cart/remove/:id` - drop a cart line.
pub fn cart_remove(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let id = ProductId::new(ctx.param("id").unwrap_or_default());

    let mut removed = false;
    app.sessions()
        .update(sid, |s| removed = s.cart.remove(&id))?;
    if removed {
        flash(app, sid, AlertLevel::Info, "Товар удалён из корзины.")?;
    }
    Ok(Response::redirect("/shop/cart"))
}

/// `POST /shop/cart/clear` - empty the cart.
pub fn cart_clear(app: &App, _ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    app.sessions().update(sid, |s| s.cart.clear())?;
    flash(app, sid, AlertLevel::Info, "Корзина очищена.")?;
    Ok(Response::redirect("/shop/cart"))
}

/// `GET /shop/cart` - the cart page.
pub fn cart_view(app: &App, _ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let session = session(app, sid)?;
    let view = priced_view(app, &session.cart)?;
    let body = cart_body(&view);
    render_page(app, sid, "Корзина", &body)
}

/// `GET|POST /shop/checkout` - the checkout flow.
pub fn checkout(app: &App, ctx: &RequestContext, sid: &str) -> Result<Response, AppError> {
    let session = session(app, sid)?;
    let view = priced_view(app, &session.cart)?;
    if view.is_empty() {
        flash(app, sid, AlertLevel::Warning, "Корзина пуста.")?;
        return Ok(Response::redirect("/shop/catalog"));
    }

    if ctx.method == Method::Get {
        return render_page(app, sid, "Оформление заказа", &checkout_body(&view));
    }

    let customer_name = ctx.form_field("customer_name").to_string();
    let customer_phone = ctx.form_field("customer_phone").to_string();
    let customer_email = ctx.form_field("customer_email").to_lowercase();
    let delivery_address = ctx.form_field("delivery_address").to_string();

    if customer_name.is_empty() || customer_phone.is_empty() || customer_email.is_empty() {
        flash(app, sid, AlertLevel::Danger, "Заполните имя, телефон и email.")?;
        return render_page(app, sid, "Оформление заказа", &checkout_body(&view));
    }

    let user = get_or_create_user(app, &customer_email, &customer_name)?;
    let customer = CustomerInfo {
        name: customer_name,
        phone: customer_phone,
        email: customer_email,
        delivery_address: Some(delivery_address).filter(|a| !a.is_empty()),
    };

    let order = Order::from_cart_view(user.id.clone(), customer, &view)?;
    let order = app.store().insert_order(order)?;
    app.sessions().update(sid, |s| s.cart.clear())?;

    flash(
        app,
        sid,
        AlertLevel::Success,
        &format!("Заказ №{} оформлен.", order.number),
    )?;
    Ok(Response::redirect("/"))
}

/// Price the cart against the current catalog.
pub(crate) fn priced_view(app: &App, cart: &Cart) -> Result<CartView, AppError> {
    let mut by_id: HashMap<ProductId, Product> = HashMap::new();
    for line in &cart.lines {
        if let Some(product) = app.store().product(&line.product_id)? {
            by_id.insert(line.product_id.clone(), product);
        }
    }
    Ok(CartView::price(cart, Currency::RUB, move |id| {
        by_id.get(id).cloned()
    }))
}

/// Checkout creates an account for unknown emails so the order has an
/// owner; known emails pick up a missing full name.
fn get_or_create_user(app: &App, email: &str, full_name: &str) -> Result<User, AppError> {
    if let Some(mut user) = app.store().user_by_email(email)? {
        if user.full_name.is_none() && !full_name.is_empty() {
            user.full_name = Some(full_name.to_string());
            app.store().update_user(user.clone())?;
        }
        return Ok(user);
    }

    let user = User::with_password(
        app.hasher(),
        email,
        "temporary-password",
        Some(full_name.to_string()).filter(|n| !n.is_empty()),
    )?;
    app.store().insert_user(user.clone())?;
    Ok(user)
}

// === page bodies ===

fn catalog_body(
    categories: &[Category],
    products: &[Product],
    q: &str,
    category_slug: &str,
) -> String {
    let category_links = categories
        .iter()
        .map(|c| {
            let marker = if c.slug == category_slug { " *" } else { "" };
            format!(
                r#"            <li><a href="/shop/catalog?category={}">{}{}</a></li>"#,
                escape_html(&c.slug),
                escape_html(&c.name),
                marker
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let product_cards = if products.is_empty() {
        "        <p>Ничего не найдено.</p>".to_string()
    } else {
        products
            .iter()
            .map(|p| {
                format!(
                    r#"        <article class="product-card">
            <h3><a href="/shop/product/{slug}">{name}</a></h3>
            <p>{price}</p>
            <form method="post" action="/shop/cart/add/{id}">
                <input type="number" name="qty" value="1" min="1">
                <button type="submit">В корзину</button>
            </form>
        </article>"#,
                    slug = escape_html(&p.slug),
                    name = escape_html(&p.name),
                    price = p.price.display(),
                    id = escape_html(p.id.as_str()),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };

    format!(
        r#"        <h1>Каталог</h1>
        <form method="get" action="/shop/catalog">
            <input type="text" name="q" value="{q}" placeholder="Поиск">
            <button type="submit">Найти</button>
        </form>
        <ul class="categories">
{category_links}
        </ul>
{product_cards}"#,
        q = escape_html(q),
    )
}

fn product_body(product: &Product) -> String {
    let description = product
        .description
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();
    format!(
        r#"        <h1>{name}</h1>
        <p class="price">{price}</p>
        <p>{description}</p>
        <p>В наличии: {stock}</p>
        <form method="post" action="/shop/cart/add/{id}">
            <input type="number" name="qty" value="1" min="1">
            <button type="submit">В корзину</button>
        </form>"#,
        name = escape_html(&product.name),
        price = product.price.display(),
        description = description,
        stock = product.stock_qty,
        id = escape_html(product.id.as_str()),
    )
}

fn cart_body(view: &CartView) -> String {
    if view.is_empty() {
        return r#"        <h1>Корзина</h1>
        <p>Корзина пуста.</p>"#
            .to_string();
    }

    let rows = view
        .lines
        .iter()
        .map(|line| {
            format!(
                r#"            <tr>
                <td>{name}</td>
                <td>{qty}</td>
                <td>{unit}</td>
                <td>{total}</td>
                <td>
                    <form method="post" action="/shop/cart/remove/{id}">
                        <button type="submit">Удалить</button>
                    </form>
                </td>
            </tr>"#,
                name = escape_html(&line.product.name),
                qty = line.qty,
                unit = line.unit_price.display(),
                total = line.line_total.display(),
                id = escape_html(line.product.id.as_str()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"        <h1>Корзина</h1>
        <table>
{rows}
        </table>
        <p>Итого: {total}</p>
        <form method="post" action="/shop/cart/clear">
            <button type="submit">Очистить</button>
        </form>
        <p><a href="/shop/checkout">Оформить заказ</a></p>"#,
        total = view.total.display(),
    )
}

fn checkout_body(view: &CartView) -> String {
    format!(
        r#"        <h1>Оформление заказа</h1>
        <p>Товаров: {count}, итого: {total}</p>
        <form method="post" action="/shop/checkout">
            <input type="text" name="customer_name" placeholder="Имя">
            <input type="text" name="customer_phone" placeholder="Телефон">
            <input type="email" name="customer_email" placeholder="Email">
            <input type="text" name="delivery_address" placeholder="Адрес доставки">
            <button type="submit">Подтвердить</button>
        </form>"#,
        count = view.lines.len(),
        total = view.total.display(),
    )
}
