use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use crate::middleware::role::require_super_admin;
use crate::state::AppState;

use super::controller::{create_admin, delete_admin, get_admin, get_admins, update_admin};

/// Reads are open to any authenticated admin; account mutations are gated to
/// super admins.
pub fn init_admins_router(state: AppState) -> Router<AppState> {
    let reads = Router::new()
        .route("/", get(get_admins))
        .route("/{id}", get(get_admin));

    let writes = Router::new()
        .route("/", post(create_admin))
        .route("/{id}", put(update_admin).delete(delete_admin))
        .route_layer(middleware::from_fn_with_state(state, require_super_admin));

    reads.merge(writes)
}
