//! Public JSON shapes. Only the fields listed here ever leave the service.

use crate::model::{Article, User};
use crate::sanitize::sanitize;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicArticle {
    pub id: i32,
    pub title: String,
    pub style: String,
    pub content: String,
    pub date_published: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PublicUser {
    pub id: i32,
    pub fullname: String,
    pub username: String,
    pub nickname: Option<String>,
    pub date_created: String,
}

/// Canonical timestamp form: RFC 3339, UTC, millisecond precision (`2029-01-22T16:28:32.615Z`).
pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize_article(article: Article) -> PublicArticle {
    PublicArticle {
        id: article.id,
        title: sanitize(&article.title),
        style: article.style,
        content: sanitize(&article.content),
        date_published: format_timestamp(&article.date_published),
    }
}

pub fn serialize_user(user: User) -> PublicUser {
    PublicUser {
        id: user.id,
        fullname: sanitize(&user.fullname),
        username: sanitize(&user.username),
        nickname: user.nickname.as_deref().map(sanitize),
        date_created: format_timestamp(&user.date_created),
    }
}
