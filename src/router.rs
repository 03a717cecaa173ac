use crate::handlers::{
    health::health_check,
    repairs::get_repairs,
    rooms::get_rooms,
    settings::{get_settings, update_settings},
    system::{clear_cache, get_system_stats},
    tenants::{get_tenant, update_profile},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{
    routing::{get, post, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Billing settings
        .route("/api/v1/settings", get(get_settings).put(update_settings))
        // Tenants
        .route("/api/v1/tenants/:tenant_id", get(get_tenant))
        .route("/api/v1/tenants/:tenant_id/profile", put(update_profile))
        // Report sources
        .route("/api/v1/rooms", get(get_rooms))
        .route("/api/v1/repairs", get(get_repairs))
        // Dashboard and maintenance
        .route("/api/v1/system/stats", get(get_system_stats))
        .route("/api/v1/system/cache/clear", post(clear_cache))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
