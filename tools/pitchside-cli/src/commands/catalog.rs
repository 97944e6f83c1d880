//! `pitchside catalog` - print the demo catalog.

use crate::output::Output;
use anyhow::Result;
use chrono::DateTime;
use clap::Args;
use pitchside_app::seed::seed_demo_data;
use pitchside_auth::PasswordHasher;
use pitchside_commerce::query::CatalogQuery;
use pitchside_store::MemoryStore;
use serde::Serialize;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Filter by a name substring
    #[arg(short, long)]
    query: Option<String>,

    /// Filter by a category slug
    #[arg(short, long)]
    category: Option<String>,
}

#[derive(Serialize)]
struct CatalogRow {
    name: String,
    slug: String,
    category: String,
    price: String,
    stock: i64,
    created: String,
}

/// Run the catalog command.
pub async fn run(args: CatalogArgs, output: &Output) -> Result<()> {
    let store = MemoryStore::new();
    let hasher = PasswordHasher::new();
    seed_demo_data(&store, &hasher)?;
    output.debug("демо-каталог заполнен");

    let mut query = CatalogQuery::all();
    if let Some(q) = &args.query {
        query = query.with_text(q);
    }
    if let Some(c) = &args.category {
        query = query.with_category(c);
    }

    let products = store.products_filtered(&query, None)?;
    let rows: Vec<CatalogRow> = products
        .iter()
        .map(|p| {
            let category = store
                .category(&p.category_id)
                .ok()
                .flatten()
                .map(|c| c.name)
                .unwrap_or_default();
            CatalogRow {
                name: p.name.clone(),
                slug: p.slug.clone(),
                category,
                price: p.price.display_amount(),
                stock: p.stock_qty,
                created: format_timestamp(p.created_at),
            }
        })
        .collect();

    if output.is_json() {
        output.json(&rows);
        return Ok(());
    }

    output.header(&format!("Каталог ({} товаров)", rows.len()));
    output.table_row(&["Товар", "Категория", "Цена", "Остаток"], &[44, 24, 10, 8]);
    for row in &rows {
        output.table_row(
            &[&row.name, &row.category, &row.price, &row.stock.to_string()],
            &[44, 24, 10, 8],
        );
    }
    Ok(())
}

fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
