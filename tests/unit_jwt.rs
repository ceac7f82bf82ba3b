use axum::http::StatusCode;

use ridedesk::config::jwt::JwtConfig;
use ridedesk::utils::jwt::{create_access_token, verify_token};

fn config(secret: &str, token_expiry: i64) -> JwtConfig {
    JwtConfig {
        secret: secret.to_string(),
        token_expiry,
    }
}

#[test]
fn test_roundtrip_preserves_claims() {
    let cfg = config("test-secret", 3600);
    let token = create_access_token(42, "dispatch_lead", "admin", &cfg).unwrap();

    let claims = verify_token(&token, &cfg).unwrap();
    assert_eq!(claims.admin_id, 42);
    assert_eq!(claims.username, "dispatch_lead");
    assert_eq!(claims.role, "admin");
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_wrong_secret_is_rejected() {
    let token = create_access_token(1, "root_admin", "super_admin", &config("secret-a", 3600))
        .unwrap();

    let err = verify_token(&token, &config("secret-b", 3600)).unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.message(), "Invalid or expired token.");
}

#[test]
fn test_garbage_token_is_rejected() {
    let err = verify_token("definitely.not.a-jwt", &config("test-secret", 3600)).unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.message(), "Invalid or expired token.");
}

#[test]
fn test_expired_token_is_rejected() {
    // Expiry well past the decoder's default 60s leeway.
    let cfg = config("test-secret", -120);
    let token = create_access_token(7, "old_session", "admin", &cfg).unwrap();

    let err = verify_token(&token, &cfg).unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    assert_eq!(err.message(), "Invalid or expired token.");
}

#[test]
fn test_tampered_token_is_rejected() {
    let cfg = config("test-secret", 3600);
    let token = create_access_token(9, "auditor", "moderator", &cfg).unwrap();

    let mut tampered = token.clone();
    // Flip a character in the payload segment.
    let dot = tampered.find('.').unwrap() + 1;
    let replacement = if &tampered[dot..dot + 1] == "A" { "B" } else { "A" };
    tampered.replace_range(dot..dot + 1, replacement);

    assert!(verify_token(&tampered, &cfg).is_err());
}
