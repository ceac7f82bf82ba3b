use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_ride, delete_ride, get_ride, get_rides};

/// Rides are create/delete-only; there is no update route.
pub fn init_rides_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_rides).post(create_ride))
        .route("/{id}", get(get_ride).delete(delete_ride))
}
