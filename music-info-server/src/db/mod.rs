//! Database layer - connection pool, migrations and repositories
//!
//! - Connection pool shared through `AppState`, no Arc<Mutex<Connection>>
//! - One SQL statement per operation, no multi-step transactions
//! - Soft delete: rows with `deleted_at` set are invisible to every query

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use sqlx::PgPool;
