/// Post Service Library
///
/// A small microservice exposing a token-guarded CRUD API over post
/// resources, backed by PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route configuration
/// - `models`: Data structures for posts
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication and request timing
/// - `auth`: JWT token generation and validation
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
