//! HTTP handlers for articles and users.

pub mod articles;
pub mod users;
pub use articles::*;
pub use users::*;
