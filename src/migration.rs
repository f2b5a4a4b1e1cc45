//! Versioned schema migrations, applied in order and recorded in `blogful_schema_version`.

use crate::error::{AppError, ConfigError};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

pub struct Migration {
    pub version: i32,
    pub name: &'static str,
    pub sql: &'static str,
}

pub const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_blogful_articles",
        sql: r#"
            CREATE TABLE IF NOT EXISTS blogful_articles (
                id INTEGER PRIMARY KEY GENERATED BY DEFAULT AS IDENTITY,
                title TEXT NOT NULL,
                content TEXT NOT NULL,
                date_published TIMESTAMPTZ NOT NULL DEFAULT now()
            )
        "#,
    },
    Migration {
        version: 2,
        name: "add_style_to_blogful_articles",
        sql: r#"
            ALTER TABLE blogful_articles
                ADD COLUMN IF NOT EXISTS style TEXT NOT NULL DEFAULT 'Listicle'
        "#,
    },
    Migration {
        version: 3,
        name: "create_blogful_users",
        sql: r#"
            CREATE TABLE IF NOT EXISTS blogful_users (
                id INTEGER PRIMARY KEY GENERATED BY DEFAULT AS IDENTITY,
                fullname TEXT NOT NULL,
                username TEXT NOT NULL UNIQUE,
                nickname TEXT,
                date_created TIMESTAMPTZ NOT NULL DEFAULT now()
            )
        "#,
    },
];

const VERSION_TABLE_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS blogful_schema_version (
        version INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        applied_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

/// Apply every migration newer than the recorded version. Each one runs in its
/// own transaction together with its version row. Returns how many were applied.
pub async fn apply_migrations(pool: &PgPool) -> Result<usize, AppError> {
    sqlx::query(VERSION_TABLE_DDL).execute(pool).await?;
    let (current,): (Option<i32>,) = sqlx::query_as("SELECT MAX(version) FROM blogful_schema_version")
        .fetch_one(pool)
        .await?;
    let current = current.unwrap_or(0);

    let mut applied = 0;
    for m in MIGRATIONS.iter().filter(|m| m.version > current) {
        let mut tx = pool.begin().await?;
        sqlx::query(m.sql).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO blogful_schema_version (version, name) VALUES ($1, $2)")
            .bind(m.version)
            .bind(m.name)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(version = m.version, name = m.name, "migration applied");
        applied += 1;
    }
    Ok(applied)
}

/// Create the database named in `database_url` if it does not exist, by way of the
/// `postgres` maintenance database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

/// Split a connection URL into (URL of the `postgres` database, target database name).
fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?;
    let path_and_query = &url[path_start..];
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (path_and_query.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
