//! `pitchside seed` - seed the demo catalog and admin account.

use crate::output::Output;
use anyhow::Result;
use clap::Args;
use pitchside_app::seed::{seed_demo_data, ADMIN_PASSWORD};
use pitchside_auth::PasswordHasher;
use pitchside_store::MemoryStore;
use serde::Serialize;

/// Arguments for the seed command.
#[derive(Args)]
pub struct SeedArgs {}

#[derive(Serialize)]
struct SeedReport {
    admin_email: String,
    categories: usize,
    products: usize,
}

/// Run the seed command.
pub async fn run(_args: SeedArgs, output: &Output) -> Result<()> {
    let store = MemoryStore::new();
    let hasher = PasswordHasher::new();

    let spinner = output.spinner("Наполняем магазин демо-данными...");
    let summary = seed_demo_data(&store, &hasher)?;
    spinner.finish_and_clear();

    if output.is_json() {
        output.json(&SeedReport {
            admin_email: summary.admin_email,
            categories: summary.categories,
            products: summary.products,
        });
        return Ok(());
    }

    output.success("Seed выполнен успешно.");
    output.kv("Категорий", &summary.categories.to_string());
    output.kv("Товаров", &summary.products.to_string());
    output.kv("Админ", &summary.admin_email);
    output.kv("Пароль", ADMIN_PASSWORD);
    Ok(())
}
