//! Article handlers: list, read, create, delete.

use crate::error::AppError;
use crate::extractors::{ArticleId, ARTICLE_NOT_FOUND};
use crate::model::NewArticle;
use crate::response::{created, ok};
use crate::serialize::serialize_article;
use crate::service::{ArticlesService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Required on create, checked in this order.
const REQUIRED_FIELDS: &[&str] = &["title", "style", "content"];

pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = ArticlesService::get_all_articles(&state.pool).await?;
    Ok(ok(articles.into_iter().map(serialize_article).collect::<Vec<_>>()))
}

pub async fn get_article(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticlesService::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(ARTICLE_NOT_FOUND.into()))?;
    Ok(ok(serialize_article(article)))
}

pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(body) = payload?;
    let [title, style, content]: [String; 3] = RequestValidator::required_strings(&body, REQUIRED_FIELDS)?
        .try_into()
        .map_err(|_| AppError::Internal("required field count mismatch".into()))?;
    let new_article = NewArticle {
        title,
        style,
        content,
        date_published: None,
    };
    let article = ArticlesService::insert_article(&state.pool, &new_article).await?;
    tracing::info!(id = article.id, "article created");
    let location = format!("/articles/{}", article.id);
    Ok(created(location, serialize_article(article)))
}

pub async fn delete_article(
    State(state): State<AppState>,
    ArticleId(id): ArticleId,
) -> Result<StatusCode, AppError> {
    if !ArticlesService::delete_article(&state.pool, id).await? {
        return Err(AppError::NotFound(ARTICLE_NOT_FOUND.into()));
    }
    tracing::info!(id, "article deleted");
    Ok(StatusCode::NO_CONTENT)
}
