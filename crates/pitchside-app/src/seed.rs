//! Demo data seeding.
//!
//! Populates a store with the demo catalog and the admin account.
//! Idempotent: existing records are updated in place, so re-seeding a
//! running store is safe.

use crate::error::AppError;
use pitchside_auth::{PasswordHasher, User};
use pitchside_commerce::catalog::{Category, Product};
use pitchside_commerce::money::{Currency, Money};
use pitchside_store::MemoryStore;

/// Seeded admin login.
pub const ADMIN_EMAIL: &str = "admin@footballshop.local";

/// Seeded admin password.
pub const ADMIN_PASSWORD: &str = "admin12345";

/// What the seed run produced.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    /// The admin account's email.
    pub admin_email: String,
    /// Categories created or refreshed.
    pub categories: usize,
    /// Products created or refreshed.
    pub products: usize,
}

/// One product's seed definition.
struct ProductSeed {
    category_slug: &'static str,
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    price: &'static str,
    stock_qty: i64,
}

const CATEGORY_SEEDS: &[(&str, &str)] = &[
    ("Футбольная форма", "kits"),
    ("Мячи", "balls"),
    ("Бутсы", "boots"),
    ("Аксессуары", "accessories"),
    ("Атрибутика болельщика", "fan"),
    ("Вратарская экипировка", "goalkeepers"),
];

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        category_slug: "kits",
        name: "Домашняя форма «Сборная 2026»",
        slug: "home-kit-2026",
        description: "Комплект формы (футболка+шорты). Дышащая ткань, комфортная посадка, подходит для тренировок и игр.",
        price: "4990.00",
        stock_qty: 25,
    },
    ProductSeed {
        category_slug: "kits",
        name: "Гостевая форма «Classic Away»",
        slug: "away-kit-classic",
        description: "Лёгкая гостевая форма в классическом стиле. Быстро сохнет, не сковывает движения.",
        price: "4590.00",
        stock_qty: 18,
    },
    ProductSeed {
        category_slug: "balls",
        name: "Мяч матчевый «Pro Match» (размер 5)",
        slug: "ball-pro-match-5",
        description: "Матчевый мяч размера 5. Стабильная траектория, износостойкое покрытие, подходит для натурального и искусственного газона.",
        price: "3290.00",
        stock_qty: 40,
    },
    ProductSeed {
        category_slug: "balls",
        name: "Мяч тренировочный «Training Plus» (размер 5)",
        slug: "ball-training-plus-5",
        description: "Тренировочный мяч размера 5 для ежедневных занятий. Хороший контроль и мягкий отскок.",
        price: "2190.00",
        stock_qty: 55,
    },
    ProductSeed {
        category_slug: "boots",
        name: "Бутсы «Speed FG»",
        slug: "boots-speed-fg",
        description: "Бутсы для твёрдого грунта (FG). Лёгкий верх, отличное сцепление, контроль мяча на скорости.",
        price: "6990.00",
        stock_qty: 12,
    },
    ProductSeed {
        category_slug: "boots",
        name: "Бутсы «Control AG»",
        slug: "boots-control-ag",
        description: "Бутсы для искусственных полей (AG). Усиленная подошва, точный контроль, комфорт при длительной игре.",
        price: "7490.00",
        stock_qty: 10,
    },
    ProductSeed {
        category_slug: "goalkeepers",
        name: "Перчатки вратарские «Grip Pro»",
        slug: "gk-gloves-grip-pro",
        description: "Вратарские перчатки с усиленной ладонью. Надёжный хват и амортизация, удобная фиксация запястья.",
        price: "2890.00",
        stock_qty: 30,
    },
    ProductSeed {
        category_slug: "goalkeepers",
        name: "Шорты вратарские с защитой",
        slug: "gk-shorts-protect",
        description: "Шорты с мягкими вставками для защиты бёдер. Подходят для тренировок и матчей.",
        price: "1990.00",
        stock_qty: 22,
    },
    ProductSeed {
        category_slug: "accessories",
        name: "Набор манишек (5 шт.)",
        slug: "training-bibs-5",
        description: "Комплект манишек для тренировок (5 штук). Лёгкие, заметные, удобные для командных занятий.",
        price: "1490.00",
        stock_qty: 35,
    },
    ProductSeed {
        category_slug: "accessories",
        name: "Щитки «Shield Lite»",
        slug: "shin-guards-shield-lite",
        description: "Лёгкие щитки для защиты голени. Анатомическая форма и комфортная фиксация.",
        price: "1290.00",
        stock_qty: 45,
    },
    ProductSeed {
        category_slug: "fan",
        name: "Шарф болельщика «Football Shop»",
        slug: "fan-scarf-football-shop",
        description: "Тёплый шарф болельщика с фирменным стилем магазина. Отлично подходит для стадиона и повседневной носки.",
        price: "990.00",
        stock_qty: 60,
    },
    ProductSeed {
        category_slug: "fan",
        name: "Кепка болельщика «Supporter Cap»",
        slug: "fan-cap-supporter",
        description: "Кепка болельщика с вышитым логотипом. Регулируемый ремешок, универсальный размер.",
        price: "1190.00",
        stock_qty: 50,
    },
];

/// Seed the demo catalog and admin account.
pub fn seed_demo_data(
    store: &MemoryStore,
    hasher: &PasswordHasher,
) -> Result<SeedSummary, AppError> {
    get_or_create_admin(store, hasher, ADMIN_EMAIL, ADMIN_PASSWORD, "Администратор магазина")?;

    for (name, slug) in CATEGORY_SEEDS {
        get_or_create_category(store, name, slug)?;
    }

    for seed in PRODUCT_SEEDS {
        let category = store.category_by_slug(seed.category_slug)?.ok_or_else(|| {
            pitchside_store::StoreError::NotFound(seed.category_slug.to_string())
        })?;
        get_or_create_product(store, &category, seed)?;
    }

    Ok(SeedSummary {
        admin_email: ADMIN_EMAIL.to_string(),
        categories: CATEGORY_SEEDS.len(),
        products: PRODUCT_SEEDS.len(),
    })
}

fn get_or_create_admin(
    store: &MemoryStore,
    hasher: &PasswordHasher,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), AppError> {
    if let Some(mut user) = store.user_by_email(email)? {
        user.promote_to_admin();
        store.update_user(user)?;
        return Ok(());
    }

    let mut user = User::with_password(hasher, email, password, Some(full_name.to_string()))?;
    user.promote_to_admin();
    store.insert_user(user)?;
    Ok(())
}

fn get_or_create_category(
    store: &MemoryStore,
    name: &str,
    slug: &str,
) -> Result<Category, AppError> {
    if let Some(category) = store.category_by_slug(slug)? {
        return Ok(category);
    }
    let category = Category::new(name, slug);
    store.insert_category(category.clone())?;
    Ok(category)
}

fn get_or_create_product(
    store: &MemoryStore,
    category: &Category,
    seed: &ProductSeed,
) -> Result<(), AppError> {
    let price = Money::parse(seed.price, Currency::RUB)?;

    if let Some(mut product) = store.product_by_slug(seed.slug)? {
        product.name = seed.name.to_string();
        product.description = Some(seed.description.to_string());
        product.price = price;
        product.stock_qty = seed.stock_qty;
        product.category_id = category.id.clone();
        product.is_active = true;
        product.touch();
        store.update_product(product)?;
        return Ok(());
    }

    let product = Product::new(category.id.clone(), seed.name, seed.slug, price)
        .with_description(seed.description)
        .with_stock(seed.stock_qty);
    store.insert_product(product)?;
    Ok(())
}
