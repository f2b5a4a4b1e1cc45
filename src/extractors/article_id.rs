//! Extract the article id from the `:article_id` path segment.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const ARTICLE_NOT_FOUND: &str = "Article doesn't exist";

/// Article primary key taken from the path. A segment that is not an integer
/// cannot name a stored article, so it is rejected as not found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArticleId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for ArticleId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound(ARTICLE_NOT_FOUND.into()))?;
        raw.trim()
            .parse::<i32>()
            .map(ArticleId)
            .map_err(|_| AppError::NotFound(ARTICLE_NOT_FOUND.into()))
    }
}
