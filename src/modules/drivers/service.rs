use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::schema::{
    EntitySchema, FieldKind, FieldSpec, delete_by_id, empty_to_none, ensure_unique,
};
use crate::utils::update::apply_partial_update;

use super::model::{CreateDriverDto, CreatedDriver, Driver};

pub const DRIVER_LICENSE_NUMBER: FieldSpec =
    FieldSpec::unique("license_number", "License number", FieldKind::Text);
pub const DRIVER_QR_CODE: FieldSpec =
    FieldSpec::unique_nullable("qr_code", "QR code", FieldKind::Text);

pub const DRIVER_SCHEMA: EntitySchema = EntitySchema {
    table: "drivers",
    id_column: "driver_id",
    label: "Driver",
    fields: &[
        FieldSpec::required("first_name", "First name", FieldKind::Text),
        FieldSpec::required("last_name", "Last name", FieldKind::Text),
        FieldSpec::nullable("middle_name", "Middle name", FieldKind::Text),
        FieldSpec::required("date_of_birth", "Date of birth", FieldKind::Date),
        FieldSpec::nullable("address_region", "Address region", FieldKind::Text),
        FieldSpec::nullable("address_province", "Address province", FieldKind::Text),
        FieldSpec::nullable("address_city", "Address city", FieldKind::Text),
        FieldSpec::nullable("address_barangay", "Address barangay", FieldKind::Text),
        FieldSpec::nullable("address_street", "Address street", FieldKind::Text),
        FieldSpec::nullable("phone_number", "Phone number", FieldKind::Text),
        DRIVER_LICENSE_NUMBER,
        FieldSpec::required(
            "license_expiration_date",
            "License expiration date",
            FieldKind::Date,
        ),
        FieldSpec::required("license_status", "License status", FieldKind::Text),
        FieldSpec::nullable("vehicle_ownership", "Vehicle ownership", FieldKind::Text),
        FieldSpec::nullable("vehicle_plate_number", "Vehicle plate number", FieldKind::Text),
        DRIVER_QR_CODE,
    ],
};

const ALLOWED_LICENSE_STATUSES: [&str; 4] = ["active", "expired", "suspended", "revoked"];

const COLUMNS: &str = "driver_id, first_name, last_name, middle_name, date_of_birth, \
                       address_region, address_province, address_city, address_barangay, \
                       address_street, phone_number, license_number, license_expiration_date, \
                       license_status, vehicle_ownership, vehicle_plate_number, qr_code, \
                       registered_at";

pub struct DriverService;

impl DriverService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {COLUMNS} FROM drivers ORDER BY registered_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(drivers)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i64) -> Result<Driver, AppError> {
        let driver = sqlx::query_as::<_, Driver>(&format!(
            "SELECT {COLUMNS} FROM drivers WHERE driver_id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| DRIVER_SCHEMA.not_found())?;
        Ok(driver)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateDriverDto) -> Result<CreatedDriver, AppError> {
        ensure_unique(
            db,
            &DRIVER_SCHEMA,
            &DRIVER_LICENSE_NUMBER,
            &dto.license_number,
            None,
        )
        .await?;

        let qr_code = empty_to_none(dto.qr_code);
        if let Some(qr) = &qr_code {
            ensure_unique(db, &DRIVER_SCHEMA, &DRIVER_QR_CODE, qr, None).await?;
        }

        let license_status = dto.license_status.unwrap_or_else(|| "active".to_string());
        if !ALLOWED_LICENSE_STATUSES.contains(&license_status.as_str()) {
            return Err(AppError::validation(
                "License status must be one of: active, expired, suspended, revoked.",
            ));
        }

        let driver_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO drivers (first_name, last_name, middle_name, date_of_birth, \
                                  address_region, address_province, address_city, \
                                  address_barangay, address_street, phone_number, \
                                  license_number, license_expiration_date, license_status, \
                                  vehicle_ownership, vehicle_plate_number, qr_code) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING driver_id",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(empty_to_none(dto.middle_name))
        .bind(dto.date_of_birth)
        .bind(empty_to_none(dto.address_region))
        .bind(empty_to_none(dto.address_province))
        .bind(empty_to_none(dto.address_city))
        .bind(empty_to_none(dto.address_barangay))
        .bind(empty_to_none(dto.address_street))
        .bind(empty_to_none(dto.phone_number))
        .bind(&dto.license_number)
        .bind(dto.license_expiration_date)
        .bind(&license_status)
        .bind(empty_to_none(dto.vehicle_ownership))
        .bind(empty_to_none(dto.vehicle_plate_number))
        .bind(qr_code)
        .fetch_one(db)
        .await?;

        Ok(CreatedDriver {
            driver_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            license_number: dto.license_number,
        })
    }

    #[instrument(skip(db, payload))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        payload: &Map<String, Value>,
    ) -> Result<(), AppError> {
        apply_partial_update(db, &DRIVER_SCHEMA, id, payload).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        delete_by_id(
            db,
            &DRIVER_SCHEMA,
            id,
            "Cannot delete driver. They have associated rides or feedback.",
        )
        .await
    }
}
