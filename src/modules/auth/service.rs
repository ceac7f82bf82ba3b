use sqlx::PgPool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::admins::model::{Admin, AdminSummary};
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, LoginResponse};

pub struct AuthService;

impl AuthService {
    /// Unknown username, inactive account, and wrong password all produce the
    /// same response, so the endpoint cannot be used to enumerate accounts.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        #[derive(sqlx::FromRow)]
        struct AdminWithHash {
            admin_id: i64,
            username: String,
            first_name: String,
            last_name: String,
            email: String,
            role: String,
            password_hash: String,
        }

        let admin = sqlx::query_as::<_, AdminWithHash>(
            "SELECT admin_id, username, first_name, last_name, email, role, password_hash \
             FROM admins WHERE username = $1 AND is_active = TRUE",
        )
        .bind(&dto.username)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthenticated("Invalid username or password."))?;

        if !verify_password(&dto.password, &admin.password_hash)? {
            return Err(AppError::unauthenticated("Invalid username or password."));
        }

        sqlx::query("UPDATE admins SET last_login_at = NOW() WHERE admin_id = $1")
            .bind(admin.admin_id)
            .execute(db)
            .await?;

        let token = create_access_token(admin.admin_id, &admin.username, &admin.role, jwt_config)?;

        Ok(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            token,
            admin: AdminSummary {
                admin_id: admin.admin_id,
                username: admin.username,
                first_name: admin.first_name,
                last_name: admin.last_name,
                email: admin.email,
                role: admin.role,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn me(db: &PgPool, admin_id: i64) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            "SELECT admin_id, username, first_name, last_name, email, phone_number, role, \
                    is_active, registered_at, last_login_at \
             FROM admins WHERE admin_id = $1",
        )
        .bind(admin_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found("Admin not found."))?;

        Ok(admin)
    }
}
