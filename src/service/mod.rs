//! Data access: typed operations over an explicitly supplied pool.

mod articles;
mod users;
mod validation;
pub use articles::ArticlesService;
pub use users::UsersService;
pub use validation::RequestValidator;

use crate::sql::QueryBuf;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{PgPool, Postgres};

type QueryAs<'q, O> = sqlx::query::QueryAs<'q, Postgres, O, PgArguments>;

fn bind_all<'q, O>(q: &'q QueryBuf) -> QueryAs<'q, O>
where
    O: for<'r> sqlx::FromRow<'r, PgRow>,
{
    let mut query = sqlx::query_as::<_, O>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    query
}

async fn fetch_all<O>(pool: &PgPool, q: &QueryBuf) -> Result<Vec<O>, sqlx::Error>
where
    O: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    bind_all::<O>(q).fetch_all(pool).await
}

async fn fetch_optional<O>(pool: &PgPool, q: &QueryBuf) -> Result<Option<O>, sqlx::Error>
where
    O: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    bind_all::<O>(q).fetch_optional(pool).await
}

async fn execute(pool: &PgPool, q: &QueryBuf) -> Result<u64, sqlx::Error> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.execute(pool).await?.rows_affected())
}
