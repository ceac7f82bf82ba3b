use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::{JsonPayload, ValidatedJson};

use super::model::{CreatePassengerDto, CreatedPassenger, Passenger};
use super::service::PassengerService;

#[instrument(skip(state))]
pub async fn get_passengers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Passenger>>>, AppError> {
    let passengers = PassengerService::list(&state.db).await?;
    Ok(Json(ApiResponse::list(passengers)))
}

#[instrument(skip(state))]
pub async fn get_passenger(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Passenger>>, AppError> {
    let passenger = PassengerService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(passenger)))
}

#[instrument(skip_all)]
pub async fn create_passenger(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePassengerDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedPassenger>>), AppError> {
    let created = PassengerService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Passenger created successfully.",
            created,
        )),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_passenger(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    PassengerService::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::message("Passenger updated successfully.")))
}

#[instrument(skip(state))]
pub async fn delete_passenger(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    PassengerService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Passenger deleted successfully.")))
}
