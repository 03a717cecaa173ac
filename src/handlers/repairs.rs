use crate::schemas::{api_error, ok, ApiError, ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use common::RepairRow;
use model::entities::repair;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::{debug, error, instrument};

/// List every repair request, newest first
#[utoipa::path(
    get,
    path = "/api/v1/repairs",
    tag = "repairs",
    responses(
        (status = 200, description = "Repairs retrieved successfully", body = ApiResponse<Vec<RepairRow>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_repairs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RepairRow>>>, ApiError> {
    match repair::Entity::find()
        .order_by_desc(repair::Column::CreatedAt)
        .order_by_desc(repair::Column::Id)
        .all(&state.db)
        .await
    {
        Ok(repairs) => {
            debug!("Retrieved {} repairs", repairs.len());
            let rows = repairs
                .into_iter()
                .map(|model| RepairRow {
                    id: model.id,
                    room_id: model.room_id,
                    repair_type: model.repair_type,
                    status: model.status.as_str().to_string(),
                    description: model.description,
                })
                .collect();
            Ok(ok(rows, "Repairs retrieved successfully"))
        }
        Err(db_error) => {
            error!("Failed to retrieve repairs: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal server error while listing repairs",
            ))
        }
    }
}
