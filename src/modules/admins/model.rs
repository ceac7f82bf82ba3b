use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Full admin row as exposed by list/get — the password hash is never
/// selected, so it can never serialize.
#[derive(Debug, Serialize, FromRow)]
pub struct Admin {
    pub admin_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub registered_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Compact projection used in the login response.
#[derive(Debug, Serialize, FromRow)]
pub struct AdminSummary {
    pub admin_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminDto {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 50, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Email must be a valid email address"))]
    pub email: String,
    pub phone_number: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    /// Defaults to `admin`; validated against the role set in the service.
    pub role: Option<String>,
    /// Defaults to active.
    pub is_active: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct CreatedAdmin {
    pub admin_id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}
