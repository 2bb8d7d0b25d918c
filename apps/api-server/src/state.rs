//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::BlogService;
use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository, SeaOrmPostRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blog: Arc<BlogService>,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo: Arc<dyn PostRepository> = match db_config {
            Some(config) => match connect(config).await {
                Ok(conn) => Arc::new(SeaOrmPostRepository::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostRepository::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Self {
            blog: Arc::new(BlogService::new(repo)),
        }
    }

    /// State backed by the in-memory repository, for tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            blog: Arc::new(BlogService::new(Arc::new(InMemoryPostRepository::new()))),
        }
    }
}
