use axum::{http::StatusCode, response::Json};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

pub use common::{ApiResponse, ErrorResponse};
use common::{RepairRow, RoomRow, SystemSettings, SystemStats, TenantDto, TenantProfile};

/// Cache key of the aggregated [`SystemStats`].
pub const STATS_CACHE_KEY: &str = "system_stats";

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for the dashboard counters
    pub cache: Cache<String, SystemStats>,
}

/// Handler error: status plus JSON body.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn api_error(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorResponse::new(message, code)))
}

pub fn ok<T>(data: T, message: &str) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        data,
        message: message.to_string(),
        success: true,
    })
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Result of a cache invalidation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CacheClearResponse {
    /// Keys that were invalidated
    pub invalidated: Vec<String>,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::settings::get_settings,
        crate::handlers::settings::update_settings,
        crate::handlers::tenants::get_tenant,
        crate::handlers::tenants::update_profile,
        crate::handlers::rooms::get_rooms,
        crate::handlers::repairs::get_repairs,
        crate::handlers::system::get_system_stats,
        crate::handlers::system::clear_cache,
    ),
    components(
        schemas(
            ApiResponse<SystemSettings>,
            ApiResponse<TenantDto>,
            ApiResponse<Vec<RoomRow>>,
            ApiResponse<Vec<RepairRow>>,
            ApiResponse<SystemStats>,
            ApiResponse<CacheClearResponse>,
            ErrorResponse,
            HealthResponse,
            CacheClearResponse,
            SystemSettings,
            TenantDto,
            TenantProfile,
            RoomRow,
            RepairRow,
            SystemStats,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "settings", description = "Billing tariff settings"),
        (name = "tenants", description = "Tenant records and profiles"),
        (name = "rooms", description = "Room listing"),
        (name = "repairs", description = "Repair request listing"),
        (name = "system", description = "Dashboard counters and maintenance"),
    ),
    info(
        title = "DormDesk API",
        description = "Dormitory management backend: tenants, rooms, repairs and billing settings",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
