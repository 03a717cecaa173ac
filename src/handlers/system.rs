use crate::schemas::{
    api_error, ok, ApiError, ApiResponse, AppState, CacheClearResponse, ErrorResponse,
    STATS_CACHE_KEY,
};
use axum::{extract::State, http::StatusCode, response::Json};
use common::SystemStats;
use model::entities::{
    repair::{self, RepairStatus},
    room::{self, RoomStatus},
    tenant,
};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use tracing::{debug, error, info, instrument, trace};

/// Counts the dashboard headline numbers straight from the tables.
pub(crate) async fn count_stats(db: &DatabaseConnection) -> Result<SystemStats, DbErr> {
    let total_rooms = room::Entity::find().count(db).await?;
    let occupied_rooms = room::Entity::find()
        .filter(room::Column::Status.eq(RoomStatus::Occupied))
        .count(db)
        .await?;
    let total_tenants = tenant::Entity::find().count(db).await?;
    let pending_repairs = repair::Entity::find()
        .filter(repair::Column::Status.eq(RepairStatus::Pending))
        .count(db)
        .await?;

    Ok(SystemStats {
        total_rooms,
        occupied_rooms,
        total_tenants,
        pending_repairs,
    })
}

/// Dashboard counters
#[utoipa::path(
    get,
    path = "/api/v1/system/stats",
    tag = "system",
    responses(
        (status = 200, description = "System statistics retrieved successfully", body = ApiResponse<SystemStats>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_system_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemStats>>, ApiError> {
    trace!("Entering get_system_stats function");

    if let Some(stats) = state.cache.get(STATS_CACHE_KEY).await {
        debug!("System statistics served from cache");
        return Ok(ok(stats, "System statistics retrieved from cache"));
    }

    match count_stats(&state.db).await {
        Ok(stats) => {
            info!(
                "Computed system statistics: {} rooms, {} occupied, {} tenants, {} pending repairs",
                stats.total_rooms, stats.occupied_rooms, stats.total_tenants, stats.pending_repairs
            );
            state.cache.insert(STATS_CACHE_KEY.to_string(), stats).await;
            Ok(ok(stats, "System statistics retrieved successfully"))
        }
        Err(db_error) => {
            error!("Failed to compute system statistics: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal server error while computing statistics",
            ))
        }
    }
}

/// Drop cached server-side data
#[utoipa::path(
    post,
    path = "/api/v1/system/cache/clear",
    tag = "system",
    responses(
        (status = 200, description = "Cache cleared", body = ApiResponse<CacheClearResponse>)
    )
)]
#[instrument]
pub async fn clear_cache(State(state): State<AppState>) -> Json<ApiResponse<CacheClearResponse>> {
    state.cache.invalidate_all();
    state.cache.run_pending_tasks().await;
    info!("Server-side cache cleared");

    ok(
        CacheClearResponse {
            invalidated: vec![STATS_CACHE_KEY.to_string()],
        },
        "Cache cleared successfully",
    )
}
