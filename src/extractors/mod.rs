mod article_id;
pub use article_id::{ArticleId, ARTICLE_NOT_FOUND};
