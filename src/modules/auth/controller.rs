use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{LoginRequest, LoginResponse, MeResponse};
use super::service::AuthService;

/// Login with username/password and receive a bearer token.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Profile of the calling admin, password hash excluded.
#[instrument(skip(state))]
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<MeResponse>, AppError> {
    let admin = AuthService::me(&state.db, auth.admin_id()).await?;
    Ok(Json(MeResponse {
        success: true,
        admin,
    }))
}
