//! Blog service - existence and uniqueness policy over the repository port.

use std::sync::Arc;

use crate::domain::{NewPost, Post, PostUpdate};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

const ENTITY: &str = "blog post";

/// Domain service for blog posts.
///
/// The repository owns persistence; this service owns policy: it is the
/// single translation point from "absent" to a user-facing NotFound, and
/// from a storage constraint violation to a duplicate-title conflict.
pub struct BlogService {
    repo: Arc<dyn PostRepository>,
}

impl BlogService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.find_all().await.map_err(storage_error)
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_slug(slug)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::not_found(ENTITY, slug))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(storage_error)?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        validate_title(&input.title)?;

        self.repo.create(input).await.map_err(|e| match e {
            RepoError::Constraint(_) => {
                DomainError::Conflict("a post with this title already exists".to_string())
            }
            other => storage_error(other),
        })
    }

    /// Update an existing post. Existence is asserted first; a row that
    /// vanishes between the check and the write still resolves to NotFound
    /// because the repository reports zero affected rows the same way.
    pub async fn update(&self, id: &str, input: PostUpdate) -> Result<Post, DomainError> {
        validate_title(&input.title)?;
        self.find_by_id(id).await?;

        self.repo.update(id, input).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(ENTITY, id),
            other => storage_error(other),
        })
    }

    /// Delete an existing post. The repository delete itself is idempotent;
    /// the existence check here is what turns an unknown id into NotFound.
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.find_by_id(id).await?;
        self.repo.delete(id).await.map_err(storage_error)
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

fn storage_error(e: RepoError) -> DomainError {
    DomainError::Internal(e.to_string())
}
