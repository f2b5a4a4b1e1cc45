//! Blogful: REST backend for articles (and a read-only users listing) on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod sanitize;
pub mod serialize;
pub mod service;
pub mod sql;
pub mod state;
pub mod telemetry;

pub use config::{Environment, Settings};
pub use error::{AppError, ConfigError, ServerFault};
pub use migration::{apply_migrations, ensure_database_exists};
pub use model::{Article, NewArticle, NewUser, User};
pub use routes::build_router;
pub use sanitize::sanitize;
pub use serialize::{serialize_article, serialize_user, PublicArticle, PublicUser};
pub use service::{ArticlesService, UsersService};
pub use state::AppState;
pub use telemetry::init_tracing;
