use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::modules::admins::model::{Admin, AdminSummary};

/// JWT claim set: enough identity to authorize every protected route without
/// a store round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub admin_id: i64,
    pub username: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub admin: AdminSummary,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub admin: Admin,
}
