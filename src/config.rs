use anyhow::Result;
use common::SystemStats;
use moka::future::Cache;
use sea_orm::Database;
use std::time::Duration;
use tracing::{debug, info};

use crate::schemas::AppState;

/// Default lifetime of the cached dashboard counters.
pub const DEFAULT_STATS_TTL_SECS: u64 = 60;

/// Build the cache holding aggregated dashboard counters
pub fn build_stats_cache(ttl: Duration) -> Cache<String, SystemStats> {
    debug!("Building stats cache with TTL {:?}", ttl);
    Cache::builder()
        .max_capacity(16)
        .time_to_live(ttl)
        .build()
}

/// Initialize application state for the given database
pub async fn initialize_app_state_with_url(database_url: &str, stats_ttl: Duration) -> Result<AppState> {
    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState {
        db,
        cache: build_stats_cache(stats_ttl),
    })
}
