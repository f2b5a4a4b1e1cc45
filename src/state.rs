//! Shared application state for all routes.

use crate::config::Environment;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Long-lived pool handed to every request; closed at shutdown.
    pub pool: PgPool,
    pub environment: Environment,
}

impl AppState {
    pub fn new(pool: PgPool, environment: Environment) -> Self {
        AppState { pool, environment }
    }
}
