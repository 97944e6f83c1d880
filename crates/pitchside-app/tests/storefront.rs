//! End-to-end request flows through the storefront.

use pitchside_alerts::{DISMISS_DELAY, FADE_CLASS, SHOW_CLASS};
use pitchside_app::seed::{self, ADMIN_EMAIL, ADMIN_PASSWORD};
use pitchside_app::{App, AppConfig, RequestContext};
use pitchside_commerce::ids::ProductId;
use std::time::Duration;

const SID: &str = "sess_test";

fn seeded_app() -> App {
    let app = App::new(AppConfig::default());
    seed::seed_demo_data(app.store(), app.hasher()).unwrap();
    app
}

fn product_id(app: &App, slug: &str) -> ProductId {
    app.store().product_by_slug(slug).unwrap().unwrap().id
}

async fn login_as_admin(app: &App) {
    let response = app
        .handle(
            RequestContext::post("/auth/login")
                .with_session(SID)
                .with_form("email", ADMIN_EMAIL)
                .with_form("password", ADMIN_PASSWORD),
        )
        .await;
    assert_eq!(response.location(), Some("/"));
    // consume the login flash so later assertions see only their own
    app.handle(RequestContext::get("/").with_session(SID)).await;
}

async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn catalog_lists_seeded_products() {
    let app = seeded_app();
    let response = app
        .handle(RequestContext::get("/shop/catalog").with_session(SID))
        .await;

    assert_eq!(response.status, 200);
    assert!(response.body.contains("Мяч матчевый «Pro Match» (размер 5)"));
    assert!(response.body.contains("Бутсы «Speed FG»"));
}

#[tokio::test]
async fn catalog_filters_by_text_and_category() {
    let app = seeded_app();

    let by_text = app
        .handle(
            RequestContext::get("/shop/catalog")
                .with_session(SID)
                .with_query("q", "вратарские"),
        )
        .await;
    assert!(by_text.body.contains("Перчатки вратарские «Grip Pro»"));
    assert!(!by_text.body.contains("Бутсы «Speed FG»"));

    let by_category = app
        .handle(
            RequestContext::get("/shop/catalog")
                .with_session(SID)
                .with_query("category", "balls"),
        )
        .await;
    assert!(by_category.body.contains("Мяч тренировочный «Training Plus» (размер 5)"));
    assert!(!by_category.body.contains("Шарф болельщика"));
}

#[tokio::test]
async fn product_page_shows_active_product_only() {
    let app = seeded_app();

    let ok = app
        .handle(RequestContext::get("/shop/product/ball-pro-match-5").with_session(SID))
        .await;
    assert_eq!(ok.status, 200);
    assert!(ok.body.contains("3290.00"));

    let missing = app
        .handle(RequestContext::get("/shop/product/no-such-slug").with_session(SID))
        .await;
    assert_eq!(missing.status, 404);
}

#[tokio::test]
async fn cart_add_flashes_and_shows_line() {
    let app = seeded_app();
    let id = product_id(&app, "ball-pro-match-5");

    let redirect = app
        .handle(
            RequestContext::post(format!("/shop/cart/add/{}", id))
                .with_session(SID)
                .with_form("qty", "2"),
        )
        .await;
    assert_eq!(redirect.location(), Some("/shop/cart"));

    let cart = app
        .handle(RequestContext::get("/shop/cart").with_session(SID))
        .await;
    assert!(cart.body.contains("Товар добавлен в корзину."));
    assert!(cart.body.contains(r#"class="alert alert-success show""#));
    assert!(cart.body.contains("Мяч матчевый «Pro Match» (размер 5)"));
    // 2 x 3290.00
    assert!(cart.body.contains("6580.00"));
}

#[tokio::test]
async fn cart_add_unknown_product_flashes_danger() {
    let app = seeded_app();

    let redirect = app
        .handle(RequestContext::post("/shop/cart/add/ghost").with_session(SID))
        .await;
    assert_eq!(redirect.location(), Some("/shop/catalog"));

    let catalog = app
        .handle(RequestContext::get("/shop/catalog").with_session(SID))
        .await;
    assert!(catalog.body.contains("Товар не найден."));
    assert!(catalog.body.contains("alert-danger"));
}

#[tokio::test]
async fn cart_remove_and_clear() {
    let app = seeded_app();
    let id = product_id(&app, "boots-speed-fg");

    app.handle(
        RequestContext::post(format!("/shop/cart/add/{}", id)).with_session(SID),
    )
    .await;
    app.handle(
        RequestContext::post(format!("/shop/cart/remove/{}", id)).with_session(SID),
    )
    .await;

    let cart = app
        .handle(RequestContext::get("/shop/cart").with_session(SID))
        .await;
    assert!(cart.body.contains("Товар удалён из корзины."));
    assert!(cart.body.contains("Корзина пуста."));

    app.handle(RequestContext::post("/shop/cart/clear").with_session(SID))
        .await;
    let cart = app
        .handle(RequestContext::get("/shop/cart").with_session(SID))
        .await;
    assert!(cart.body.contains("Корзина очищена."));
}

#[tokio::test]
async fn checkout_requires_non_empty_cart() {
    let app = seeded_app();

    let redirect = app
        .handle(RequestContext::get("/shop/checkout").with_session(SID))
        .await;
    assert_eq!(redirect.location(), Some("/shop/catalog"));

    let catalog = app
        .handle(RequestContext::get("/shop/catalog").with_session(SID))
        .await;
    assert!(catalog.body.contains("Корзина пуста."));
    assert!(catalog.body.contains("alert-warning"));
}

#[tokio::test]
async fn checkout_rejects_missing_contact_fields() {
    let app = seeded_app();
    let id = product_id(&app, "fan-cap-supporter");
    app.handle(
        RequestContext::post(format!("/shop/cart/add/{}", id)).with_session(SID),
    )
    .await;

    let response = app
        .handle(
            RequestContext::post("/shop/checkout")
                .with_session(SID)
                .with_form("customer_name", "Иван"),
        )
        .await;

    // re-rendered, not redirected
    assert_eq!(response.status, 200);
    assert!(response.body.contains("Заполните имя, телефон и email."));
    assert!(app.store().orders().unwrap().is_empty());
}

#[tokio::test]
async fn checkout_places_order_and_clears_cart() {
    let app = seeded_app();
    let id = product_id(&app, "ball-training-plus-5");
    app.handle(
        RequestContext::post(format!("/shop/cart/add/{}", id))
            .with_session(SID)
            .with_form("qty", "3"),
    )
    .await;

    let redirect = app
        .handle(
            RequestContext::post("/shop/checkout")
                .with_session(SID)
                .with_form("customer_name", "Иван Петров")
                .with_form("customer_phone", "+7 900 000-00-00")
                .with_form("customer_email", "Ivan@Example.com")
                .with_form("delivery_address", "Москва, ул. Ленина, 1"),
        )
        .await;
    assert_eq!(redirect.location(), Some("/"));

    let orders = app.store().orders().unwrap();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(order.number, 1);
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].qty, 3);
    // 3 x 2190.00
    assert_eq!(order.total_amount().amount_minor, 657_000);

    // the guest account was created with the lowercased email
    let user = app.store().user_by_email("ivan@example.com").unwrap();
    assert!(user.is_some());

    let home = app.handle(RequestContext::get("/").with_session(SID)).await;
    assert!(home.body.contains("Заказ №1 оформлен."));

    let cart = app
        .handle(RequestContext::get("/shop/cart").with_session(SID))
        .await;
    assert!(cart.body.contains("Корзина пуста."));
}

#[tokio::test(start_paused = true)]
async fn order_confirmation_alert_auto_dismisses() {
    let app = seeded_app();
    let id = product_id(&app, "ball-pro-match-5");
    app.handle(
        RequestContext::post(format!("/shop/cart/add/{}", id)).with_session(SID),
    )
    .await;
    // consume the cart flash so the confirmation is the only alert left
    app.handle(RequestContext::get("/shop/cart").with_session(SID))
        .await;
    app.handle(
        RequestContext::post("/shop/checkout")
            .with_session(SID)
            .with_form("customer_name", "Иван")
            .with_form("customer_phone", "+7 900")
            .with_form("customer_email", "ivan@example.com"),
    )
    .await;

    let home = app.handle(RequestContext::get("/").with_session(SID)).await;
    let handles = home.alerts.handles();
    assert_eq!(handles.len(), 1);
    assert!(handles[0].has_class(SHOW_CLASS));

    settle().await;
    tokio::time::advance(DISMISS_DELAY - Duration::from_millis(1)).await;
    settle().await;
    assert!(handles[0].has_class(SHOW_CLASS));
    assert!(!handles[0].has_class(FADE_CLASS));

    tokio::time::advance(Duration::from_millis(1)).await;
    settle().await;
    assert!(handles[0].has_class(FADE_CLASS));
    assert!(!handles[0].has_class(SHOW_CLASS));
}

#[tokio::test]
async fn register_login_logout_flow() {
    let app = seeded_app();

    let redirect = app
        .handle(
            RequestContext::post("/auth/register")
                .with_session(SID)
                .with_form("email", "new@example.com")
                .with_form("full_name", "Новый Пользователь")
                .with_form("password", "secret-pass-1")
                .with_form("password2", "secret-pass-1"),
        )
        .await;
    assert_eq!(redirect.location(), Some("/"));

    let home = app.handle(RequestContext::get("/").with_session(SID)).await;
    assert!(home.body.contains("Регистрация выполнена."));
    assert!(home.body.contains("Новый Пользователь"));

    app.handle(RequestContext::post("/auth/logout").with_session(SID))
        .await;
    let home = app.handle(RequestContext::get("/").with_session(SID)).await;
    assert!(home.body.contains("Вы вышли из системы."));

    let bad_login = app
        .handle(
            RequestContext::post("/auth/login")
                .with_session(SID)
                .with_form("email", "new@example.com")
                .with_form("password", "wrong-password"),
        )
        .await;
    assert_eq!(bad_login.status, 200);
    assert!(bad_login.body.contains("Неверный email или пароль."));

    let good_login = app
        .handle(
            RequestContext::post("/auth/login")
                .with_session(SID)
                .with_form("email", "new@example.com")
                .with_form("password", "secret-pass-1"),
        )
        .await;
    assert_eq!(good_login.location(), Some("/"));
}

#[tokio::test]
async fn register_rejects_duplicates_and_mismatches() {
    let app = seeded_app();

    let mismatch = app
        .handle(
            RequestContext::post("/auth/register")
                .with_session(SID)
                .with_form("email", "a@example.com")
                .with_form("password", "secret-pass-1")
                .with_form("password2", "other-pass-22"),
        )
        .await;
    assert!(mismatch.body.contains("Пароли не совпадают."));

    let duplicate = app
        .handle(
            RequestContext::post("/auth/register")
                .with_session(SID)
                .with_form("email", ADMIN_EMAIL)
                .with_form("password", "secret-pass-1")
                .with_form("password2", "secret-pass-1"),
        )
        .await;
    assert!(duplicate
        .body
        .contains("Пользователь с таким email уже существует."));
}

#[tokio::test]
async fn admin_surface_requires_admin() {
    let app = seeded_app();

    let anonymous = app
        .handle(RequestContext::get("/admin/products").with_session(SID))
        .await;
    assert_eq!(anonymous.status, 403);

    login_as_admin(&app).await;
    let listed = app
        .handle(RequestContext::get("/admin/products").with_session(SID))
        .await;
    assert_eq!(listed.status, 200);
    assert!(listed.body.contains("Бутсы «Control AG»"));
}

#[tokio::test]
async fn admin_creates_toggles_and_deletes_product() {
    let app = seeded_app();
    login_as_admin(&app).await;

    let balls = app.store().category_by_slug("balls").unwrap().unwrap();
    let created = app
        .handle(
            RequestContext::post("/admin/products")
                .with_session(SID)
                .with_form("name", "Мяч футзальный «Indoor»")
                .with_form("price", "2590,00")
                .with_form("stock_qty", "15")
                .with_form("category_id", balls.id.as_str()),
        )
        .await;
    assert_eq!(created.location(), Some("/admin/products"));

    let product = app
        .store()
        .product_by_slug("indoor")
        .unwrap()
        .expect("slugified from the cyrillic name down to «indoor»");
    assert_eq!(product.price.amount_minor, 259_000);
    assert_eq!(product.stock_qty, 15);

    // duplicate slug is rejected with a warning
    app.handle(
        RequestContext::post("/admin/products")
            .with_session(SID)
            .with_form("name", "Другой мяч")
            .with_form("slug", "indoor")
            .with_form("category_id", balls.id.as_str()),
    )
    .await;
    let listing = app
        .handle(RequestContext::get("/admin/products").with_session(SID))
        .await;
    assert!(listing.body.contains("Slug уже занят."));

    app.handle(
        RequestContext::post(format!("/admin/products/{}/toggle", product.id)).with_session(SID),
    )
    .await;
    let toggled = app.store().product(&product.id).unwrap().unwrap();
    assert!(!toggled.is_active);

    app.handle(
        RequestContext::post(format!("/admin/products/{}/delete", product.id)).with_session(SID),
    )
    .await;
    assert!(app.store().product(&product.id).unwrap().is_none());
}

#[tokio::test]
async fn sessions_are_isolated_between_visitors() {
    let app = seeded_app();
    let id = product_id(&app, "fan-scarf-football-shop");

    app.handle(
        RequestContext::post(format!("/shop/cart/add/{}", id)).with_session("sess_a"),
    )
    .await;

    let other_cart = app
        .handle(RequestContext::get("/shop/cart").with_session("sess_b"))
        .await;
    assert!(other_cart.body.contains("Корзина пуста."));
}
