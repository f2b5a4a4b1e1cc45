//! Row types and table layouts.

mod article;
mod user;
pub use article::{Article, NewArticle, ARTICLES};
pub use user::{NewUser, User, USERS};
