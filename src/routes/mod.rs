//! Route tables and the assembled application router.

mod articles;
mod common;
mod users;
pub use articles::article_routes;
pub use common::common_routes;
pub use users::user_routes;

use crate::error::AppError;
use crate::middleware::{handle_server_errors, panic_response, security_headers, BODY_LIMIT_BYTES};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

async fn route_not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Full application: every route plus the error handler, panic recovery,
/// request tracing, CORS, security headers and the body size limit.
pub fn build_router(state: AppState) -> Router {
    let environment = state.environment;
    let mut app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(article_routes(state.clone()))
        .merge(user_routes(state))
        .fallback(route_not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(environment, handle_server_errors));
    for header in security_headers() {
        app = app.layer(header);
    }
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    )
}
