//! HTTP server layer
//!
//! Axum server with:
//! - Generic CRUD handlers instantiated per resource
//! - Record lookup as an extractor, before the handler body runs
//! - JSON error responses
//! - CORS, request tracing, timeouts and graceful shutdown

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod resource;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use resource::Resource;
pub use server::{build_app, build_router, run_server, App, ServerConfig, ServerError};
pub use state::AppState;
