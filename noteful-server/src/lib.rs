//! noteful-server: REST API for folders and notes
//!
//! Exposes list/create/get/update/delete for both resources over HTTP,
//! validating request bodies and escaping stored text on the way out.
//! Persistence is injected through the `Repository` trait, with a
//! PostgreSQL backend and an in-memory one.

pub mod db;
pub mod http;
pub mod models;
pub mod sanitize;

pub use db::{DbError, MemoryRepository, PgRepository, Repository};
pub use http::{
    build_app, build_router, run_server, ApiError, App, AppState, ServerConfig, ServerError,
};
