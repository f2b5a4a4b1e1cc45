//! Article routes.

use crate::handlers::{create_article, delete_article, get_article, list_articles};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn article_routes(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route("/articles/:article_id", get(get_article).delete(delete_article))
        .with_state(state)
}
