use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and provides the authenticated
/// admin's claims (`admin_id`, `username`, `role`).
///
/// A missing or malformed `Authorization` header is a 401; a header that is
/// present but fails verification is a 403 (see `AppError::Forbidden` for why
/// that is not a 401).
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Claims);

impl AuthAdmin {
    pub fn admin_id(&self) -> i64 {
        self.0.admin_id
    }

    pub fn username(&self) -> &str {
        &self.0.username
    }

    pub fn role(&self) -> &str {
        &self.0.role
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::unauthenticated("Access denied. No token provided."))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthAdmin(claims))
    }
}
