use axum::http::StatusCode;
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::logging::logging_middleware;
use crate::middleware::role::require_admin;
use crate::modules::admins::router::init_admins_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::dashboard::router::init_dashboard_router;
use crate::modules::drivers::router::init_drivers_router;
use crate::modules::feedbacks::router::init_feedbacks_router;
use crate::modules::passengers::router::init_passengers_router;
use crate::modules::rides::router::init_rides_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    let admin_gate =
        || middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route("/", get(root))
        .nest(
            "/api",
            Router::new()
                // /auth/login is public; /auth/me carries its own extractor.
                .nest("/auth", init_auth_router())
                .nest("/dashboard", init_dashboard_router().route_layer(admin_gate()))
                .nest(
                    "/admins",
                    init_admins_router(state.clone()).route_layer(admin_gate()),
                )
                .nest("/passengers", init_passengers_router().route_layer(admin_gate()))
                .nest("/drivers", init_drivers_router().route_layer(admin_gate()))
                .nest("/rides", init_rides_router().route_layer(admin_gate()))
                .nest("/feedbacks", init_feedbacks_router().route_layer(admin_gate())),
        )
        .fallback(route_not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "RideDesk API is running!",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn route_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "message": "Route not found",
        })),
    )
}
