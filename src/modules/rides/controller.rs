use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::ValidatedJson;

use super::model::{CreateRideDto, CreatedRide, RideDetail, RideSummary};
use super::service::RideService;

#[instrument(skip(state))]
pub async fn get_rides(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RideSummary>>>, AppError> {
    let rides = RideService::list(&state.db).await?;
    Ok(Json(ApiResponse::list(rides)))
}

#[instrument(skip(state))]
pub async fn get_ride(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<RideDetail>>, AppError> {
    let ride = RideService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(ride)))
}

#[instrument(skip(state, dto))]
pub async fn create_ride(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateRideDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedRide>>), AppError> {
    let created = RideService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Ride created successfully.", created)),
    ))
}

#[instrument(skip(state))]
pub async fn delete_ride(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    RideService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Ride deleted successfully.")))
}
