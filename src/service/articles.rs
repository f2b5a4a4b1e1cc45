//! Article CRUD against `blogful_articles`.

use super::{execute, fetch_all, fetch_optional};
use crate::error::AppError;
use crate::model::{Article, NewArticle, ARTICLES};
use crate::sql::{self, SqlParam};
use sqlx::PgPool;

pub struct ArticlesService;

impl ArticlesService {
    /// Every article, ordered by id.
    pub async fn get_all_articles(pool: &PgPool) -> Result<Vec<Article>, AppError> {
        let q = sql::select_all(&ARTICLES);
        Ok(fetch_all(pool, &q).await?)
    }

    /// One article by id. A missing row is `None`, not an error.
    pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Option<Article>, AppError> {
        let q = sql::select_by_id(&ARTICLES, id);
        Ok(fetch_optional(pool, &q).await?)
    }

    /// Insert one article; the database assigns `id` and, unless given, `date_published`.
    pub async fn insert_article(pool: &PgPool, new_article: &NewArticle) -> Result<Article, AppError> {
        let mut values: Vec<(&str, SqlParam)> = vec![
            ("title", new_article.title.as_str().into()),
            ("style", new_article.style.as_str().into()),
            ("content", new_article.content.as_str().into()),
        ];
        if let Some(t) = new_article.date_published {
            values.push(("date_published", t.into()));
        }
        let q = sql::insert(&ARTICLES, &values);
        fetch_optional(pool, &q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Delete by id. Returns whether a row was removed.
    pub async fn delete_article(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let q = sql::delete_by_id(&ARTICLES, id);
        Ok(execute(pool, &q).await? > 0)
    }

    /// Remove every article and reset ids. Used to isolate tests.
    pub async fn truncate_articles(pool: &PgPool) -> Result<(), AppError> {
        execute(pool, &sql::truncate(&ARTICLES)).await?;
        Ok(())
    }
}
