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

use super::model::{CreateDriverDto, CreatedDriver, Driver};
use super::service::DriverService;

#[instrument(skip(state))]
pub async fn get_drivers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Driver>>>, AppError> {
    let drivers = DriverService::list(&state.db).await?;
    Ok(Json(ApiResponse::list(drivers)))
}

#[instrument(skip(state))]
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    let driver = DriverService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(driver)))
}

#[instrument(skip_all)]
pub async fn create_driver(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateDriverDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDriver>>), AppError> {
    let created = DriverService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Driver created successfully.", created)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    DriverService::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::message("Driver updated successfully.")))
}

#[instrument(skip(state))]
pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    DriverService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Driver deleted successfully.")))
}
