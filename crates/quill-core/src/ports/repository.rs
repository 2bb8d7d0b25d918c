use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostUpdate};
use crate::error::RepoError;

/// Post repository port - the single owner of post persistence.
///
/// Reads map each storage row to a [`Post`], decoding the tags column
/// through the lossy tag codec. Uniqueness of the slug is delegated to the
/// storage layer; a rejected duplicate surfaces as [`RepoError::Constraint`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, newest first (`created_at` descending).
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Look up a post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError>;

    /// Look up a post by its id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Persist a new post: generates the id, derives the slug from the
    /// title, encodes tags, stamps `created_at == updated_at == now`.
    async fn create(&self, input: NewPost) -> Result<Post, RepoError>;

    /// Update title/content/summary/tags by id and stamp a fresh
    /// `updated_at`. Returns [`RepoError::NotFound`] when the id no longer
    /// exists, so a row vanishing between an existence check and this write
    /// always resolves to NotFound.
    async fn update(&self, id: &str, input: PostUpdate) -> Result<Post, RepoError>;

    /// Delete by id. Idempotent: deleting an absent id is not an error.
    async fn delete(&self, id: &str) -> Result<(), RepoError>;
}
