use crate::schemas::{api_error, ok, ApiError, ApiResponse, AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::Utc;
use common::{SystemSettings, TariffField};
use model::entities::system_settings::{self, SETTINGS_ROW_ID};
use rust_decimal::Decimal;
use sea_orm::{sea_query::OnConflict, EntityTrait, Set};
use tracing::{debug, error, info, instrument, trace, warn};

fn to_settings(model: system_settings::Model) -> SystemSettings {
    SystemSettings {
        water_rate: model.water_rate,
        electricity_rate: model.electricity_rate,
        late_fee: model.late_fee,
        deposit_rate: model.deposit_rate,
    }
}

/// Get the billing tariffs
#[utoipa::path(
    get,
    path = "/api/v1/settings",
    tag = "settings",
    responses(
        (status = 200, description = "Settings retrieved successfully", body = ApiResponse<SystemSettings>),
        (status = 404, description = "Settings have never been saved", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SystemSettings>>, ApiError> {
    trace!("Entering get_settings function");

    match system_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(&state.db).await {
        Ok(Some(model)) => {
            debug!("Settings last updated at {}", model.updated_at);
            Ok(ok(to_settings(model), "Settings retrieved successfully"))
        }
        Ok(None) => {
            debug!("No settings row stored yet");
            Err(api_error(
                StatusCode::NOT_FOUND,
                "SETTINGS_NOT_FOUND",
                "Settings have not been saved yet",
            ))
        }
        Err(db_error) => {
            error!("Failed to load settings: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal server error while loading settings",
            ))
        }
    }
}

/// Upsert all four billing tariffs
#[utoipa::path(
    put,
    path = "/api/v1/settings",
    tag = "settings",
    request_body = SystemSettings,
    responses(
        (status = 200, description = "Settings saved successfully", body = ApiResponse<SystemSettings>),
        (status = 400, description = "A tariff is negative", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<SystemSettings>,
) -> Result<Json<ApiResponse<SystemSettings>>, ApiError> {
    trace!("Entering update_settings function");

    if let Some(field) = TariffField::ALL
        .into_iter()
        .find(|field| settings.get(*field) < Decimal::ZERO)
    {
        warn!("Rejecting negative tariff for {}", field);
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "INVALID_TARIFF",
            format!("{} must not be negative", field),
        ));
    }

    let row = system_settings::ActiveModel {
        id: Set(SETTINGS_ROW_ID),
        water_rate: Set(settings.water_rate),
        electricity_rate: Set(settings.electricity_rate),
        late_fee: Set(settings.late_fee),
        deposit_rate: Set(settings.deposit_rate),
        updated_at: Set(Utc::now()),
    };

    // Single row, last writer wins
    let upsert = system_settings::Entity::insert(row)
        .on_conflict(
            OnConflict::column(system_settings::Column::Id)
                .update_columns([
                    system_settings::Column::WaterRate,
                    system_settings::Column::ElectricityRate,
                    system_settings::Column::LateFee,
                    system_settings::Column::DepositRate,
                    system_settings::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec(&state.db)
        .await;

    if let Err(db_error) = upsert {
        error!("Failed to upsert settings: {}", db_error);
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "DATABASE_ERROR",
            "Internal server error while saving settings",
        ));
    }

    match system_settings::Entity::find_by_id(SETTINGS_ROW_ID).one(&state.db).await {
        Ok(Some(model)) => {
            info!(
                "Settings saved: water={}, electricity={}, late_fee={}, deposit={}",
                model.water_rate, model.electricity_rate, model.late_fee, model.deposit_rate
            );
            Ok(ok(to_settings(model), "Settings saved successfully"))
        }
        Ok(None) => {
            error!("Settings row missing right after upsert");
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Settings could not be read back",
            ))
        }
        Err(db_error) => {
            error!("Failed to read back settings: {}", db_error);
            Err(api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Internal server error while saving settings",
            ))
        }
    }
}
