//! User handlers. Only listing is exposed.

use crate::error::AppError;
use crate::response::ok;
use crate::serialize::serialize_user;
use crate::service::UsersService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UsersService::get_all_users(&state.pool).await?;
    Ok(ok(users.into_iter().map(serialize_user).collect::<Vec<_>>()))
}
