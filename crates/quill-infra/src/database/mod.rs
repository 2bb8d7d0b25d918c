//! Database connection management and the Postgres-backed repository.

mod connection;
pub mod entity;
mod postgres_repo;

pub use connection::{DatabaseConfig, connect};
pub use postgres_repo::SeaOrmPostRepository;
