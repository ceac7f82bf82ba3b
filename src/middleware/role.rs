//! Role-based authorization middleware.
//!
//! Layered onto routers with `axum::middleware::from_fn_with_state`. Each
//! gate extracts the authenticated admin, parses their role, and checks it
//! against an allowed set; the check itself is a pure predicate.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthAdmin;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRole {
    SuperAdmin,
    Admin,
    Moderator,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::Admin => "admin",
            Self::Moderator => "moderator",
        }
    }

    pub fn parse(role: &str) -> Result<Self, AppError> {
        match role {
            "super_admin" => Ok(Self::SuperAdmin),
            "admin" => Ok(Self::Admin),
            "moderator" => Ok(Self::Moderator),
            _ => Err(AppError::forbidden("Access denied. Unknown role.")),
        }
    }
}

pub fn role_allowed(role: AdminRole, allowed: &[AdminRole]) -> bool {
    allowed.contains(&role)
}

pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed: &[AdminRole],
    denied_msg: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth = AuthAdmin::from_request_parts(&mut parts, &state).await?;
    let role = AdminRole::parse(auth.role())?;

    if !role_allowed(role, allowed) {
        return Err(AppError::forbidden(denied_msg));
    }

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Any authenticated admin identity (super_admin, admin, or moderator).
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        &[AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Moderator],
        "Access denied. Admin privileges required.",
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Super admins only; gates admin-account mutations.
pub async fn require_super_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        &[AdminRole::SuperAdmin],
        "Access denied. Super admin privileges required.",
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(AdminRole::parse("super_admin").unwrap(), AdminRole::SuperAdmin);
        assert_eq!(AdminRole::parse("admin").unwrap(), AdminRole::Admin);
        assert_eq!(AdminRole::parse("moderator").unwrap(), AdminRole::Moderator);
    }

    #[test]
    fn test_parse_unknown_role_is_forbidden() {
        let err = AdminRole::parse("root").unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_role_allowed() {
        let any_admin = [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Moderator];
        assert!(role_allowed(AdminRole::Moderator, &any_admin));
        assert!(role_allowed(AdminRole::SuperAdmin, &[AdminRole::SuperAdmin]));
        assert!(!role_allowed(AdminRole::Admin, &[AdminRole::SuperAdmin]));
        assert!(!role_allowed(AdminRole::Moderator, &[AdminRole::SuperAdmin]));
    }

    #[test]
    fn test_role_round_trip() {
        for role in [AdminRole::SuperAdmin, AdminRole::Admin, AdminRole::Moderator] {
            assert_eq!(AdminRole::parse(role.as_str()).unwrap(), role);
        }
    }
}
