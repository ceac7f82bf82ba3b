use axum::{Json, extract::State};
use tracing::instrument;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::response::ApiResponse;

use super::model::DashboardStats;
use super::service::DashboardService;

#[instrument(skip(state))]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardStats>>, AppError> {
    let stats = DashboardService::stats(&state.db).await?;
    Ok(Json(ApiResponse::data(stats)))
}
