//! music-info-server: HTTP service for song info records
//!
//! Create, read, update, delete and paginate song info records
//! (group, song, release date, lyrics, link) stored in PostgreSQL.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{Config, ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, ServerConfig};
