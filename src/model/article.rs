use crate::sql::TableDef;
use chrono::{DateTime, Utc};

pub const ARTICLES: TableDef = TableDef {
    name: "blogful_articles",
    primary_key: "id",
    columns: &["id", "title", "style", "content", "date_published"],
    insertable: &["title", "style", "content", "date_published"],
};

#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Article {
    pub id: i32,
    pub title: String,
    pub style: String,
    pub content: String,
    pub date_published: DateTime<Utc>,
}

/// Fields a client supplies. `date_published` is only set by seeding code;
/// requests always leave it to the database.
#[derive(Clone, Debug)]
pub struct NewArticle {
    pub title: String,
    pub style: String,
    pub content: String,
    pub date_published: Option<DateTime<Utc>>,
}
