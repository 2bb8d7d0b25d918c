//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`: the
//! SeaORM/Postgres post repository and the in-memory fallback used when no
//! database is configured.

pub mod database;
pub mod memory;

pub use database::{DatabaseConfig, SeaOrmPostRepository, connect};
pub use memory::InMemoryPostRepository;
