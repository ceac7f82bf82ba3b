use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_passenger, delete_passenger, get_passenger, get_passengers, update_passenger,
};

pub fn init_passengers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_passengers).post(create_passenger))
        .route(
            "/{id}",
            get(get_passenger)
                .put(update_passenger)
                .delete(delete_passenger),
        )
}
