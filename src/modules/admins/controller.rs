use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;
use crate::validator::{JsonPayload, ValidatedJson};

use super::model::{Admin, CreateAdminDto, CreatedAdmin};
use super::service::AdminService;

#[instrument(skip(state))]
pub async fn get_admins(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Admin>>>, AppError> {
    let admins = AdminService::list(&state.db).await?;
    Ok(Json(ApiResponse::list(admins)))
}

#[instrument(skip(state))]
pub async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Admin>>, AppError> {
    let admin = AdminService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(admin)))
}

#[instrument(skip_all)]
pub async fn create_admin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateAdminDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedAdmin>>), AppError> {
    let created = AdminService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Admin created successfully.", created)),
    ))
}

#[instrument(skip(state, payload))]
pub async fn update_admin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<ApiResponse<()>>, AppError> {
    AdminService::update(&state.db, id, &payload).await?;
    Ok(Json(ApiResponse::message("Admin updated successfully.")))
}

#[instrument(skip(state))]
pub async fn delete_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    AdminService::delete(&state.db, id, auth.admin_id()).await?;
    Ok(Json(ApiResponse::message("Admin deleted successfully.")))
}
