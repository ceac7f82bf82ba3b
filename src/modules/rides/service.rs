use sqlx::PgPool;
use tracing::instrument;

use crate::modules::drivers::service::DRIVER_SCHEMA;
use crate::modules::passengers::service::PASSENGER_SCHEMA;
use crate::utils::errors::AppError;
use crate::utils::schema::{
    EntitySchema, FieldKind, FieldSpec, delete_by_id, empty_to_none, ensure_exists,
};

use super::model::{CreateRideDto, CreatedRide, RideDetail, RideSummary};

/// Rides are event records: created and deleted, never updated, so the field
/// list only drives the shared existence/delete guards.
pub const RIDE_SCHEMA: EntitySchema = EntitySchema {
    table: "rides",
    id_column: "ride_id",
    label: "Ride",
    fields: &[
        FieldSpec::nullable("pickup_address", "Pickup address", FieldKind::Text),
        FieldSpec::nullable("dropoff_address", "Dropoff address", FieldKind::Text),
    ],
};

const SUMMARY_QUERY: &str = "SELECT \
        r.ride_id, r.pickup_latitude, r.pickup_longitude, r.pickup_address, \
        r.dropoff_latitude, r.dropoff_longitude, r.dropoff_address, \
        r.ride_distance_km, r.ride_duration_minutes, r.started_at, r.completed_at, \
        d.driver_id, d.first_name AS driver_first_name, d.last_name AS driver_last_name, \
        d.license_number, d.vehicle_plate_number, \
        p.passenger_id, p.first_name AS passenger_first_name, \
        p.last_name AS passenger_last_name, p.phone_number AS passenger_phone \
     FROM rides r \
     INNER JOIN drivers d ON r.driver_id = d.driver_id \
     INNER JOIN passengers p ON r.passenger_id = p.passenger_id";

const DETAIL_QUERY: &str = "SELECT \
        r.ride_id, r.pickup_latitude, r.pickup_longitude, r.pickup_address, \
        r.dropoff_latitude, r.dropoff_longitude, r.dropoff_address, \
        r.ride_distance_km, r.ride_duration_minutes, r.started_at, r.completed_at, \
        d.driver_id, d.first_name AS driver_first_name, d.last_name AS driver_last_name, \
        d.middle_name AS driver_middle_name, d.phone_number AS driver_phone, \
        d.license_number, d.vehicle_plate_number, d.vehicle_ownership, \
        p.passenger_id, p.first_name AS passenger_first_name, \
        p.last_name AS passenger_last_name, p.middle_name AS passenger_middle_name, \
        p.phone_number AS passenger_phone, p.email AS passenger_email \
     FROM rides r \
     INNER JOIN drivers d ON r.driver_id = d.driver_id \
     INNER JOIN passengers p ON r.passenger_id = p.passenger_id";

pub struct RideService;

impl RideService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<RideSummary>, AppError> {
        let rides = sqlx::query_as::<_, RideSummary>(&format!(
            "{SUMMARY_QUERY} ORDER BY r.started_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(rides)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i64) -> Result<RideDetail, AppError> {
        let ride = sqlx::query_as::<_, RideDetail>(&format!("{DETAIL_QUERY} WHERE r.ride_id = $1"))
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| RIDE_SCHEMA.not_found())?;
        Ok(ride)
    }

    /// Both referenced parties must exist before insert; each missing referent
    /// gets its own 404.
    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateRideDto) -> Result<CreatedRide, AppError> {
        ensure_exists(db, &DRIVER_SCHEMA, dto.driver_id).await?;
        ensure_exists(db, &PASSENGER_SCHEMA, dto.passenger_id).await?;

        let ride_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO rides (driver_id, passenger_id, pickup_latitude, pickup_longitude, \
                                pickup_address, dropoff_latitude, dropoff_longitude, \
                                dropoff_address, ride_distance_km, ride_duration_minutes, \
                                started_at, completed_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING ride_id",
        )
        .bind(dto.driver_id)
        .bind(dto.passenger_id)
        .bind(dto.pickup_latitude)
        .bind(dto.pickup_longitude)
        .bind(empty_to_none(dto.pickup_address))
        .bind(dto.dropoff_latitude)
        .bind(dto.dropoff_longitude)
        .bind(empty_to_none(dto.dropoff_address))
        .bind(dto.ride_distance_km)
        .bind(dto.ride_duration_minutes)
        .bind(dto.started_at)
        .bind(dto.completed_at)
        .fetch_one(db)
        .await?;

        Ok(CreatedRide { ride_id })
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        delete_by_id(
            db,
            &RIDE_SCHEMA,
            id,
            "Cannot delete ride. It has associated feedback.",
        )
        .await
    }
}
