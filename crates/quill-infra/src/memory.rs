//! In-memory post repository - used as fallback when no database is
//! configured. Rows mirror the `blog_posts` table shape, including the
//! JSON-encoded tags column, so the tag codec is exercised on both paths.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use quill_core::domain::{NewPost, Post, PostUpdate, tags};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

#[derive(Debug, Clone)]
struct Row {
    id: String,
    title: String,
    slug: String,
    content: String,
    summary: String,
    tags: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<&Row> for Post {
    fn from(row: &Row) -> Self {
        Self {
            id: row.id.clone(),
            title: row.title.clone(),
            slug: row.slug.clone(),
            content: row.content.clone(),
            summary: row.summary.clone(),
            tags: tags::decode(row.tags.as_deref()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// In-memory repository keyed by post id. Note: data is lost on process
/// restart.
pub struct InMemoryPostRepository {
    rows: RwLock<HashMap<String, Row>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut posts: Vec<Post> = rows.values().map(Into::into).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.values().find(|r| r.slug == slug).map(Into::into))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.get(id).map(Into::into))
    }

    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(input);
        let mut rows = self.rows.write().await;

        // The database enforces this with a unique index on slug.
        if rows.values().any(|r| r.slug == post.slug) {
            return Err(RepoError::Constraint(
                "post slug already exists".to_string(),
            ));
        }

        rows.insert(
            post.id.clone(),
            Row {
                id: post.id.clone(),
                title: post.title.clone(),
                slug: post.slug.clone(),
                content: post.content.clone(),
                summary: post.summary.clone(),
                tags: Some(tags::encode(&post.tags)),
                created_at: post.created_at,
                updated_at: post.updated_at,
            },
        );

        Ok(post)
    }

    async fn update(&self, id: &str, input: PostUpdate) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(id).ok_or(RepoError::NotFound)?;

        row.title = input.title;
        row.content = input.content;
        row.summary = input.summary;
        row.tags = Some(tags::encode(&input.tags));
        row.updated_at = Utc::now();

        Ok((&*row).into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        rows.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, tags: &[&str]) -> NewPost {
        NewPost {
            title: title.to_string(),
            content: "content".to_string(),
            summary: "summary".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_then_fetch_by_slug_round_trips() {
        let repo = InMemoryPostRepository::new();
        let created = repo
            .create(input("Hello, World!", &["rust", "web"]))
            .await
            .unwrap();

        let fetched = repo.find_by_slug("hello-world").await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.tags, vec!["rust", "web"]);
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_constraint_violation() {
        let repo = InMemoryPostRepository::new();
        repo.create(input("Same Title", &[])).await.unwrap();

        let err = repo.create(input("Same Title", &[])).await.unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn find_all_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.create(input("First", &[])).await.unwrap();
        repo.create(input("Second", &[])).await.unwrap();
        repo.create(input("Third", &[])).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    }

    #[tokio::test]
    async fn update_stamps_updated_at_and_keeps_slug() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(input("Stable Slug", &[])).await.unwrap();

        let updated = repo
            .update(
                &created.id,
                PostUpdate {
                    title: "Renamed".to_string(),
                    content: "new content".to_string(),
                    summary: "new summary".to_string(),
                    tags: vec!["changed".to_string()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.slug, "stable-slug");
        assert_eq!(updated.title, "Renamed");
        assert!(updated.updated_at >= created.created_at);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo
            .update(
                "missing",
                PostUpdate {
                    title: "t".to_string(),
                    content: "c".to_string(),
                    summary: "s".to_string(),
                    tags: vec![],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = InMemoryPostRepository::new();
        let created = repo.create(input("Goner", &[])).await.unwrap();

        repo.delete(&created.id).await.unwrap();
        // Second delete of the same id is still Ok.
        repo.delete(&created.id).await.unwrap();
        repo.delete("never-existed").await.unwrap();

        assert!(repo.find_by_id(&created.id).await.unwrap().is_none());
    }
}
