use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use crate::utils::schema::{
    EntitySchema, FieldKind, FieldSpec, delete_by_id, empty_to_none, ensure_unique,
};
use crate::utils::update::apply_partial_update;

use super::model::{CreatePassengerDto, CreatedPassenger, Passenger};

pub const PASSENGER_USERNAME: FieldSpec =
    FieldSpec::unique("username", "Username", FieldKind::Text);
pub const PASSENGER_EMAIL: FieldSpec = FieldSpec::unique("email", "Email", FieldKind::Text);

pub const PASSENGER_SCHEMA: EntitySchema = EntitySchema {
    table: "passengers",
    id_column: "passenger_id",
    label: "Passenger",
    fields: &[
        FieldSpec::required("first_name", "First name", FieldKind::Text),
        FieldSpec::required("last_name", "Last name", FieldKind::Text),
        FieldSpec::nullable("middle_name", "Middle name", FieldKind::Text),
        FieldSpec::required("date_of_birth", "Date of birth", FieldKind::Date),
        PASSENGER_USERNAME,
        FieldSpec::nullable("phone_number", "Phone number", FieldKind::Text),
        PASSENGER_EMAIL,
        FieldSpec::secret("password", "password_hash", "Password"),
    ],
};

const COLUMNS: &str = "passenger_id, first_name, last_name, middle_name, date_of_birth, \
                       username, phone_number, email, registered_at";

pub struct PassengerService;

impl PassengerService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Passenger>, AppError> {
        let passengers = sqlx::query_as::<_, Passenger>(&format!(
            "SELECT {COLUMNS} FROM passengers ORDER BY registered_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(passengers)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i64) -> Result<Passenger, AppError> {
        let passenger = sqlx::query_as::<_, Passenger>(&format!(
            "SELECT {COLUMNS} FROM passengers WHERE passenger_id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| PASSENGER_SCHEMA.not_found())?;
        Ok(passenger)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(
        db: &PgPool,
        dto: CreatePassengerDto,
    ) -> Result<CreatedPassenger, AppError> {
        ensure_unique(db, &PASSENGER_SCHEMA, &PASSENGER_USERNAME, &dto.username, None).await?;
        ensure_unique(db, &PASSENGER_SCHEMA, &PASSENGER_EMAIL, &dto.email, None).await?;

        let password_hash = hash_password(&dto.password)?;

        let passenger_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO passengers (first_name, last_name, middle_name, date_of_birth, \
                                     username, phone_number, email, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING passenger_id",
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(empty_to_none(dto.middle_name))
        .bind(dto.date_of_birth)
        .bind(&dto.username)
        .bind(empty_to_none(dto.phone_number))
        .bind(&dto.email)
        .bind(&password_hash)
        .fetch_one(db)
        .await?;

        Ok(CreatedPassenger {
            passenger_id,
            first_name: dto.first_name,
            last_name: dto.last_name,
            username: dto.username,
            email: dto.email,
        })
    }

    #[instrument(skip(db, payload))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        payload: &Map<String, Value>,
    ) -> Result<(), AppError> {
        apply_partial_update(db, &PASSENGER_SCHEMA, id, payload).await
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64) -> Result<(), AppError> {
        delete_by_id(
            db,
            &PASSENGER_SCHEMA,
            id,
            "Cannot delete passenger. They have associated rides or feedback.",
        )
        .await
    }
}
