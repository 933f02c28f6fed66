use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use pairlist_core::{
    intersection::{IntersectionService, IntersectionServiceTrait},
    snapshots::{SnapshotJob, SnapshotStore},
    utils::{Clock, SystemClock},
    MarketDataProvider,
};
use pairlist_market_data::CoinGeckoProvider;
use pairlist_storage_sqlite::{db, snapshots::SnapshotRepository};

pub struct AppState {
    pub intersection_service: Arc<dyn IntersectionServiceTrait>,
    pub snapshot_job: Arc<SnapshotJob>,
    pub clock: Arc<dyn Clock>,
    pub max_range_days: i64,
}

pub fn init_tracing() {
    let log_format = std::env::var("PL_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Builds the application state around the CoinGecko provider and the
/// system clock.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn MarketDataProvider> =
        Arc::new(CoinGeckoProvider::new(config.provider.clone())?);
    build_state_with(config, provider, Arc::new(SystemClock)).await
}

/// Builds the application state with an explicit provider and clock.
pub async fn build_state_with(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let store: Arc<dyn SnapshotStore> = Arc::new(SnapshotRepository::new(pool, writer));
    let intersection_service = Arc::new(IntersectionService::new(store.clone()));
    let snapshot_job = Arc::new(SnapshotJob::new(provider, store));

    Ok(Arc::new(AppState {
        intersection_service,
        snapshot_job,
        clock,
        max_range_days: config.max_range_days,
    }))
}
