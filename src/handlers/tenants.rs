use crate::schemas::{api_error, ok, ApiError, ApiResponse, AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;
use common::{TenantDto, TenantProfile};
use model::entities::tenant;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use tracing::{debug, error, info, instrument, trace, warn};
use uuid::Uuid;

pub(crate) fn tenant_dto(model: tenant::Model) -> TenantDto {
    TenantDto {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        address: model.address,
        email: model.email,
        room_id: model.room_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

fn tenant_not_found(tenant_id: Uuid) -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "TENANT_NOT_FOUND",
        format!("Tenant {} not found", tenant_id),
    )
}

fn database_error(action: &str) -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR",
        format!("Internal server error while {}", action),
    )
}

/// Get a tenant record by ID
#[utoipa::path(
    get,
    path = "/api/v1/tenants/{tenant_id}",
    tag = "tenants",
    params(
        ("tenant_id" = Uuid, Path, description = "Tenant ID"),
    ),
    responses(
        (status = 200, description = "Tenant retrieved successfully", body = ApiResponse<TenantDto>),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_tenant(
    Path(tenant_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<TenantDto>>, ApiError> {
    trace!("Entering get_tenant function for tenant_id: {}", tenant_id);

    match tenant::Entity::find_by_id(tenant_id).one(&state.db).await {
        Ok(Some(model)) => {
            debug!("Retrieved tenant {} {}", model.first_name, model.last_name);
            Ok(ok(tenant_dto(model), "Tenant retrieved successfully"))
        }
        Ok(None) => {
            warn!("Tenant with ID {} not found", tenant_id);
            Err(tenant_not_found(tenant_id))
        }
        Err(db_error) => {
            error!("Failed to retrieve tenant with ID {}: {}", tenant_id, db_error);
            Err(database_error("loading the tenant"))
        }
    }
}

/// Overwrite the editable profile fields of a tenant
///
/// `updated_at` is stamped in the same UPDATE statement.
#[utoipa::path(
    put,
    path = "/api/v1/tenants/{tenant_id}/profile",
    tag = "tenants",
    params(
        ("tenant_id" = Uuid, Path, description = "Tenant ID"),
    ),
    request_body = TenantProfile,
    responses(
        (status = 200, description = "Profile updated successfully", body = ApiResponse<TenantDto>),
        (status = 404, description = "Tenant not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_profile(
    Path(tenant_id): Path<Uuid>,
    State(state): State<AppState>,
    Json(profile): Json<TenantProfile>,
) -> Result<Json<ApiResponse<TenantDto>>, ApiError> {
    trace!("Entering update_profile function for tenant_id: {}", tenant_id);

    let existing = match tenant::Entity::find_by_id(tenant_id).one(&state.db).await {
        Ok(Some(model)) => model,
        Ok(None) => {
            warn!("Tenant with ID {} not found for profile update", tenant_id);
            return Err(tenant_not_found(tenant_id));
        }
        Err(db_error) => {
            error!("Failed to find tenant with ID {}: {}", tenant_id, db_error);
            return Err(database_error("updating the profile"));
        }
    };

    let email = Some(profile.email.trim().to_string()).filter(|email| !email.is_empty());

    let mut active: tenant::ActiveModel = existing.into();
    active.first_name = Set(profile.first_name);
    active.last_name = Set(profile.last_name);
    active.phone = Set(profile.phone);
    active.address = Set(profile.address);
    active.email = Set(email);
    active.updated_at = Set(Utc::now());

    match active.update(&state.db).await {
        Ok(model) => {
            info!("Profile of tenant {} updated at {}", model.id, model.updated_at);
            Ok(ok(tenant_dto(model), "Profile updated successfully"))
        }
        Err(db_error) => {
            error!("Failed to update tenant with ID {}: {}", tenant_id, db_error);
            Err(database_error("updating the profile"))
        }
    }
}
