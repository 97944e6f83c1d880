//! `pitchside config` - show the resolved configuration.

use crate::output::Output;
use anyhow::Result;
use clap::Args;
use pitchside_app::AppConfig;
use serde::Serialize;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {}

#[derive(Serialize)]
struct ConfigReport {
    app_name: String,
    items_per_page: usize,
    env: String,
}

/// Run the config command.
pub async fn run(_args: ConfigArgs, output: &Output) -> Result<()> {
    let config = AppConfig::from_env();

    if output.is_json() {
        output.json(&ConfigReport {
            app_name: config.app_name,
            items_per_page: config.items_per_page,
            env: config.env.as_str().to_string(),
        });
        return Ok(());
    }

    output.header("Конфигурация");
    output.kv("APP_NAME", &config.app_name);
    output.kv("ITEMS_PER_PAGE", &config.items_per_page.to_string());
    output.kv("APP_ENV", config.env.as_str());
    output.info("Переопределяется переменными окружения APP_NAME, ITEMS_PER_PAGE, APP_ENV.");
    Ok(())
}
