use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::auth::protect;
use crate::middleware::role::require_admin;
use crate::state::AppState;

use super::controller::{delete_user, get_profile, get_users, search_users};

/// Routes reachable by any authenticated user.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route_layer(middleware::from_fn_with_state(state, protect))
}

/// Admin-only user management. Layer order matters: `protect` is added
/// last so it runs first and attaches the identity `require_admin` checks.
pub fn init_admin_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_users))
        .route("/search", get(search_users))
        .route("/{user_id}", delete(delete_user))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, protect))
}
