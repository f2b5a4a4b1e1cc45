//! Read access to `blogful_users`, plus seeding helpers for tests and fixtures.

use super::{execute, fetch_all, fetch_optional};
use crate::error::AppError;
use crate::model::{NewUser, User, USERS};
use crate::sql::{self, SqlParam};
use sqlx::PgPool;

pub struct UsersService;

impl UsersService {
    pub async fn get_all_users(pool: &PgPool) -> Result<Vec<User>, AppError> {
        let q = sql::select_all(&USERS);
        Ok(fetch_all(pool, &q).await?)
    }

    pub async fn insert_user(pool: &PgPool, new_user: &NewUser) -> Result<User, AppError> {
        let mut values: Vec<(&str, SqlParam)> = vec![
            ("fullname", new_user.fullname.as_str().into()),
            ("username", new_user.username.as_str().into()),
        ];
        if let Some(nickname) = &new_user.nickname {
            values.push(("nickname", nickname.as_str().into()));
        }
        if let Some(t) = new_user.date_created {
            values.push(("date_created", t.into()));
        }
        let q = sql::insert(&USERS, &values);
        fetch_optional(pool, &q)
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn truncate_users(pool: &PgPool) -> Result<(), AppError> {
        execute(pool, &sql::truncate(&USERS)).await?;
        Ok(())
    }
}
