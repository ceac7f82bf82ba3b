//! DB-backed tests for the uniqueness guards, the one-feedback-per-ride
//! rule, and the restricted deletes. Each test gets its own migrated
//! database via `sqlx::test`.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{
    TEST_PASSWORD, create_test_admin, create_test_driver, create_test_passenger,
    create_test_ride, generate_unique_email, generate_unique_username, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

async fn get_auth_token(app: &Router, username: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "username": username,
                "password": TEST_PASSWORD,
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["token"].as_str().unwrap().to_string()
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: &str,
    payload: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    let body = match payload {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_passenger_username_is_conflict(pool: PgPool) {
    let (_, admin_username) = create_test_admin(&pool, "admin").await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &admin_username).await;

    let username = generate_unique_username("rider");
    let payload = |email: String| {
        json!({
            "first_name": "Ana",
            "last_name": "Cruz",
            "date_of_birth": "2000-01-01",
            "username": username.clone(),
            "email": email,
            "password": "secret1",
        })
    };

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/passengers",
        &token,
        Some(payload(generate_unique_email())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["passenger_id"].is_i64());

    // Same username, different email.
    let (status, body) = send_json(
        &app,
        "POST",
        "/api/passengers",
        &token,
        Some(payload(generate_unique_email())),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Username already exists.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_admin_username_is_conflict(pool: PgPool) {
    let (_, super_username) = create_test_admin(&pool, "super_admin").await;
    let (_, existing_username) = create_test_admin(&pool, "admin").await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &super_username).await;

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/admins",
        &token,
        Some(json!({
            "username": existing_username,
            "first_name": "Dup",
            "last_name": "User",
            "email": generate_unique_email(),
            "password": "secret1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Username already exists.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_cannot_take_another_drivers_license(pool: PgPool) {
    let (_, admin_username) = create_test_admin(&pool, "admin").await;
    let (_, license_a) = create_test_driver(&pool).await;
    let (driver_b, license_b) = create_test_driver(&pool).await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &admin_username).await;

    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/drivers/{driver_b}"),
        &token,
        Some(json!({"license_number": license_a})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "License number already exists.");

    // Re-sending a driver's own license number is not a conflict.
    let (status, body) = send_json(
        &app,
        "PUT",
        &format!("/api/drivers/{driver_b}"),
        &token,
        Some(json!({"license_number": license_b, "phone_number": "09171234567"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Driver updated successfully.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_feedback_for_ride_is_conflict(pool: PgPool) {
    let (_, admin_username) = create_test_admin(&pool, "admin").await;
    let (driver_id, _) = create_test_driver(&pool).await;
    let passenger_id = create_test_passenger(&pool).await;
    let ride_id = create_test_ride(&pool, driver_id, passenger_id).await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &admin_username).await;

    let payload = json!({
        "ride_id": ride_id,
        "passenger_id": passenger_id,
        "driver_id": driver_id,
        "rating": 5,
        "comment": "Smooth ride",
    });

    let (status, body) =
        send_json(&app, "POST", "/api/feedbacks", &token, Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["data"]["feedback_id"].is_i64());

    let (status, body) = send_json(&app, "POST", "/api/feedbacks", &token, Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Feedback already exists for this ride.");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_driver_with_rides_cannot_be_deleted(pool: PgPool) {
    let (_, admin_username) = create_test_admin(&pool, "admin").await;
    let (driver_id, _) = create_test_driver(&pool).await;
    let passenger_id = create_test_passenger(&pool).await;
    create_test_ride(&pool, driver_id, passenger_id).await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &admin_username).await;

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/drivers/{driver_id}"),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Cannot delete driver. They have associated rides or feedback."
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_admin_cannot_delete_own_account(pool: PgPool) {
    let (admin_id, super_username) = create_test_admin(&pool, "super_admin").await;
    let app = setup_test_app(pool);
    let token = get_auth_token(&app, &super_username).await;

    let (status, body) = send_json(
        &app,
        "DELETE",
        &format!("/api/admins/{admin_id}"),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "You cannot delete your own account.");

    // A missing target is still a 404, not a self-delete error.
    let (status, body) = send_json(&app, "DELETE", "/api/admins/999999", &token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Admin not found.");
}
