//! # Application State
//!
//! The shared application state (`AppState`) and the logic for building it
//! at startup: connecting the SQLite provider, applying the schema, and
//! running the explicit, idempotent sample-data seeding step.

use crate::config::AppConfig;
use std::sync::Arc;
use wordtrail::{seed, SqliteProvider};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The database provider backing all stores.
    pub sqlite_provider: Arc<SqliteProvider>,
}

/// Builds the shared application state from the configuration.
///
/// Schema creation and seeding both run here, once per process start, so
/// storage initialization has no module-load side effects.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let sqlite_provider = SqliteProvider::new(&config.db_url).await?;
    tracing::info!(db_path = %config.db_url, "Initialized local storage provider (SQLite).");

    sqlite_provider.initialize_schema().await?;
    if seed::seed_sample_data(&sqlite_provider.db).await? {
        tracing::info!("First boot: sample data seeded.");
    }

    Ok(AppState {
        config: Arc::new(config),
        sqlite_provider: Arc::new(sqlite_provider),
    })
}
