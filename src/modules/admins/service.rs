use serde_json::{Map, Value};
use sqlx::PgPool;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::password::hash_password;
use crate::utils::schema::{
    EntitySchema, FieldKind, FieldSpec, delete_by_id, empty_to_none, ensure_unique,
};
use crate::utils::update::apply_partial_update;

use super::model::{Admin, CreateAdminDto, CreatedAdmin};

pub const ADMIN_USERNAME: FieldSpec = FieldSpec::unique("username", "Username", FieldKind::Text);
pub const ADMIN_EMAIL: FieldSpec = FieldSpec::unique("email", "Email", FieldKind::Text);

pub const ADMIN_SCHEMA: EntitySchema = EntitySchema {
    table: "admins",
    id_column: "admin_id",
    label: "Admin",
    fields: &[
        ADMIN_USERNAME,
        FieldSpec::required("first_name", "First name", FieldKind::Text),
        FieldSpec::required("last_name", "Last name", FieldKind::Text),
        ADMIN_EMAIL,
        FieldSpec::nullable("phone_number", "Phone number", FieldKind::Text),
        FieldSpec::secret("password", "password_hash", "Password"),
        FieldSpec::required("role", "Role", FieldKind::Text),
        FieldSpec::required("is_active", "Active flag", FieldKind::Bool),
    ],
};

const ALLOWED_ROLES: [&str; 3] = ["super_admin", "admin", "moderator"];

const COLUMNS: &str = "admin_id, username, first_name, last_name, email, phone_number, role, \
                       is_active, registered_at, last_login_at";

pub struct AdminService;

impl AdminService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Admin>, AppError> {
        let admins = sqlx::query_as::<_, Admin>(&format!(
            "SELECT {COLUMNS} FROM admins ORDER BY registered_at DESC"
        ))
        .fetch_all(db)
        .await?;
        Ok(admins)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: i64) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(&format!(
            "SELECT {COLUMNS} FROM admins WHERE admin_id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| ADMIN_SCHEMA.not_found())?;
        Ok(admin)
    }

    #[instrument(skip(db, dto))]
    pub async fn create(db: &PgPool, dto: CreateAdminDto) -> Result<CreatedAdmin, AppError> {
        ensure_unique(db, &ADMIN_SCHEMA, &ADMIN_USERNAME, &dto.username, None).await?;
        ensure_unique(db, &ADMIN_SCHEMA, &ADMIN_EMAIL, &dto.email, None).await?;

        let role = dto.role.unwrap_or_else(|| "admin".to_string());
        if !ALLOWED_ROLES.contains(&role.as_str()) {
            return Err(AppError::validation(
                "Role must be one of: super_admin, admin, moderator.",
            ));
        }

        let password_hash = hash_password(&dto.password)?;

        let admin_id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO admins (username, first_name, last_name, email, phone_number, \
                                 password_hash, role, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING admin_id",
        )
        .bind(&dto.username)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(empty_to_none(dto.phone_number))
        .bind(&password_hash)
        .bind(&role)
        .bind(dto.is_active.unwrap_or(true))
        .fetch_one(db)
        .await?;

        Ok(CreatedAdmin {
            admin_id,
            username: dto.username,
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            role,
        })
    }

    #[instrument(skip(db, payload))]
    pub async fn update(
        db: &PgPool,
        id: i64,
        payload: &Map<String, Value>,
    ) -> Result<(), AppError> {
        apply_partial_update(db, &ADMIN_SCHEMA, id, payload).await
    }

    /// Admins cannot remove their own account; everything else follows the
    /// shared existence-checked delete. The caller's own id always exists, so
    /// the self check can run before the lookup.
    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: i64, caller_id: i64) -> Result<(), AppError> {
        if id == caller_id {
            return Err(AppError::SelfDeleteForbidden);
        }

        delete_by_id(
            db,
            &ADMIN_SCHEMA,
            id,
            "Cannot delete admin. They are referenced by other records.",
        )
        .await
    }
}
