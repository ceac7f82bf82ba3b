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

use super::model::{CreateFeedbackDto, CreatedFeedback, FeedbackDetail, FeedbackSummary};
use super::service::FeedbackService;

#[instrument(skip(state))]
pub async fn get_feedbacks(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<FeedbackSummary>>>, AppError> {
    let feedbacks = FeedbackService::list(&state.db).await?;
    Ok(Json(ApiResponse::list(feedbacks)))
}

#[instrument(skip(state))]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FeedbackDetail>>, AppError> {
    let feedback = FeedbackService::get(&state.db, id).await?;
    Ok(Json(ApiResponse::data(feedback)))
}

#[instrument(skip(state, dto))]
pub async fn create_feedback(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateFeedbackDto>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedFeedback>>), AppError> {
    let created = FeedbackService::create(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created(
            "Feedback created successfully.",
            created,
        )),
    ))
}

#[instrument(skip(state))]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    FeedbackService::delete(&state.db, id).await?;
    Ok(Json(ApiResponse::message("Feedback deleted successfully.")))
}
