use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Crate-wide error type. Every handler returns `Result<_, AppError>` and the
/// `IntoResponse` impl renders the `{success, message}` envelope used by the
/// whole API. Expected failures carry their user-facing message; anything
/// unexpected is wrapped in `Internal`, logged, and surfaced as a generic 500.
#[derive(Debug)]
pub enum AppError {
    /// Request payload failed validation (400).
    Validation(String),
    /// Missing credential or failed login (401).
    Unauthenticated(String),
    /// Invalid/expired token or insufficient role (403).
    ///
    /// An invalid or expired token is deliberately a 403, not a 401 — the
    /// original API contract makes that distinction and clients rely on it.
    Forbidden(String),
    /// Entity id does not exist (404).
    NotFound(String),
    /// Uniqueness violation, message names the field (400).
    Conflict(String),
    /// Update payload contained no usable fields (400).
    NoFieldsProvided,
    /// Admin attempted to delete their own account (400).
    SelfDeleteForbidden,
    /// Delete blocked because dependent rows still reference the target (400).
    ReferencedByOthers(String),
    /// Unexpected store/runtime failure (500). Detail is logged, never echoed.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn referenced_by_others(msg: impl Into<String>) -> Self {
        Self::ReferencedByOthers(msg.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_)
            | Self::Conflict(_)
            | Self::NoFieldsProvided
            | Self::SelfDeleteForbidden
            | Self::ReferencedByOthers(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Unauthenticated(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Conflict(msg)
            | Self::ReferencedByOthers(msg) => msg,
            Self::NoFieldsProvided => "No fields to update.",
            Self::SelfDeleteForbidden => "You cannot delete your own account.",
            Self::Internal(_) => "Something went wrong!",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            tracing::error!(error = ?err, "unhandled internal error");
        }

        let body = Json(json!({
            "success": false,
            "message": self.message(),
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::conflict("Username already exists.").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::unauthenticated("Access denied. No token provided.").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::forbidden("Invalid or expired token.").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AppError::not_found("Driver not found.").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::NoFieldsProvided.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_detail_is_suppressed() {
        let err = AppError::internal(anyhow::anyhow!("connection refused (10.0.0.3:5432)"));
        assert_eq!(err.message(), "Something went wrong!");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
