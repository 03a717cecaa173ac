use crate::schemas::{api_error, ok, ApiError, ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use common::RoomRow;
use model::entities::room;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::{debug, error, instrument};

/// List every room
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = ApiResponse<Vec<RoomRow>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_rooms(State(state): State<AppState>) -> Result<Json<ApiResponse<Vec<RoomRow>>>, ApiError> {
    match room::Entity::find()
        .order_by_asc(room::Column::Id)
        .all(&state.db)
        .await
    {
        Ok(rooms) => {
            debug!("Retrieved {} rooms", rooms.len());
            let rows = rooms
                .into_iter()
                .map(|model| RoomRow {
                    id: model.id,
                    room_number: model.room_number,
                    room_type: model.room_type,
                    status: model.status.as_str().to_string(),
                })
                .collect();
            Ok(ok(rows, "Rooms retrieved successfully"))
        }
        Err(db_error) => {
            error!("Failed to retrieve rooms: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal server error while listing rooms",
            ))
        }
    }
}
