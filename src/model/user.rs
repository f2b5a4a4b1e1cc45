use crate::sql::TableDef;
use chrono::{DateTime, Utc};

pub const USERS: TableDef = TableDef {
    name: "blogful_users",
    primary_key: "id",
    columns: &["id", "fullname", "username", "nickname", "date_created"],
    insertable: &["fullname", "username", "nickname", "date_created"],
};

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub fullname: String,
    pub username: String,
    pub nickname: Option<String>,
    pub date_created: DateTime<Utc>,
}

#[derive(Clone, Debug)]
pub struct NewUser {
    pub fullname: String,
    pub username: String,
    pub nickname: Option<String>,
    pub date_created: Option<DateTime<Utc>>,
}
