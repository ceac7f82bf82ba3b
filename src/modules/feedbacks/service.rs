use sqlx::PgPool;
use tracing::instrument;

use crate::modules::drivers::service::DRIVER_SCHEMA;
use crate::modules::passengers::service::PASSENGER_SCHEMA;
use crate::modules::rides::service::RIDE_SCHEMA;
use crate::utils::errors::AppError;
use crate::utils::schema::{
    EntitySchema, FieldKind, FieldSpec, delete_by_id, empty_to_none, ensure_exists,
};

use super::model::{CreateFeedbackDto, CreatedFeedback, FeedbackDetail, FeedbackSummary};

/// Feedback records are immutable once created; the schema only drives the
/// shared existence/delete guards.
pub const FEEDBACK_SCHEMA: EntitySchema = EntitySchema {
    table: "ride_feedback",
    id_column: "feedback_id",
    label: "Feedback",
    fields: &[FieldSpec::nullable("comment", "Comment", FieldKind::Text)],
};

const SUMMARY_QUERY: &str = "SELECT \
        f.feedback_id, f.rating, f.comment, f.created_at, f.ride_id, \
        r.pickup_address, r.dropoff_address, \
        r.started_at AS ride_started_at, r.completed_at AS ride_completed_at, \
        d.driver_id, d.first_name AS driver_first_name, d.last_name AS driver_last_name, \
        d.license_number, \
        p.passenger_id, p.first_name AS passenger_first_name, \
        p.last_name AS passenger_last_name, p.email AS passenger_email \
     FROM ride_feedback f \
     INNER JOIN rides r ON f.ride_id = r.ride_id \
     INNER JOIN drivers d ON f.driver_id = d.driver_id \
     INNER JOIN passengers p ON f.passenger_id = p.passenger_id";

const DETAIL_QUERY: &str = "SELECT \
        f.feedback_id, f.rating, f.comment, f.created_at, f.ride_id, \
        r.pickup_latitude, r.pickup_longitude, r.pickup_address, \
        r.dropoff_latitude, r.dropoff_longitude, r.dropoff_address, \
        r.ride_distance_km, r.ride_duration_minutes, \
        r.started_at AS ride_started_at, r.completed_at AS ride_completed_at, \
        d.driver_id, d.first_name AS driver_first_name, d.last_name AS driver_last_name, \
        d.middle_name AS driver_middle_name, d.phone_number AS driver_phone, \
        d.license_number, d.vehicle_plate_number, \
        p.passenger_id, p.first_name AS passenger_first_name, \
        p.last_name AS passenger_last_name, p.middle_name AS passenger_middle_name, \
        p.phone_number AS passenger_phone, p.email AS passenger_email \
     FROM ride_feedback f \
     INNER JOIN rides r ON f.ride_id = r.ride_id \
     INNER JOIN drivers d ON f.driver_id = d.driver_id \
     INNER JOIN passengers p ON f.passenger_id = p.passenger_id";

pub struct FeedbackService;

impl FeedbackService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<FeedbackSummary>, AppError> {
        let feedbacks = sqlx::query_as::<_, FeedbackSummary>(&format!(
            "{SUMMARY_QUERY} ORDER BY f.created_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(feedbacks)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i64) -> Result<FeedbackDetail, AppError> {
        let feedback =
            sqlx::query_as::<_, FeedbackDetail>(&format!("{DETAIL_QUERY} WHERE f.feedback_id = $1"))
                .bind(id)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| FEEDBACK_SCHEMA.not_found())?;
        Ok(feedback)
    }

    /// All three referents are validated independently before the one-per-
    /// (ride, passenger) rule, and everything before the insert.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateFeedbackDto) -> Result<CreatedFeedback, AppError> {
        ensure_exists(db, &RIDE_SCHEMA, dto.ride_id).await?;
        ensure_exists(db, &PASSENGER_SCHEMA, dto.passenger_id).await?;
        ensure_exists(db, &DRIVER_SCHEMA, dto.driver_id).await?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT feedback_id FROM ride_feedback WHERE ride_id = $1 AND passenger_id = $2",
        )
        .bind(dto.ride_id)
        .bind(dto.passenger_id)
        .fetch_optional(db)
        .await?;

        if existing.is_some() {
            return Err(AppError::conflict("Feedback already exists for this ride."));
        }

        let feedback_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO ride_feedback (ride_id, passenger_id, driver_id, rating, comment) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING feedback_id",
        )
        .bind(dto.ride_id)
        .bind(dto.passenger_id)
        .bind(dto.driver_id)
        .bind(dto.rating)
        .bind(empty_to_none(dto.comment))
        .fetch_one(db)
        .await?;

        Ok(CreatedFeedback { feedback_id })
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        delete_by_id(
            db,
            &FEEDBACK_SCHEMA,
            id,
            "Cannot delete feedback. It is referenced by other records.",
        )
        .await
    }
}
