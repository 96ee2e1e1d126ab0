//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Handlers see only the `Repository` trait; backends are injected
//! - Referential integrity and cascades are the store's job
//! - One write per request, no multi-statement transactions

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod postgres;
pub mod repository;

pub use memory::MemoryRepository;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgRepository;
pub use repository::{DbError, Record, Repository};
