use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_driver, delete_driver, get_driver, get_drivers, update_driver};

pub fn init_drivers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_drivers).post(create_driver))
        .route(
            "/{id}",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}
