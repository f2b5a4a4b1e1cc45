use crate::handlers::list_users;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn user_routes(state: AppState) -> Router {
    Router::new().route("/users", get(list_users)).with_state(state)
}
