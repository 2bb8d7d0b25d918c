use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::slug::slugify;

/// Post entity - a single blog post.
///
/// The `slug` is derived from the title once, at creation time, and stays
/// fixed for the lifetime of the post. `created_at` is immutable; every
/// successful update stamps a fresh `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input bundle for creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
}

/// Input bundle for updating a post. The id used for lookup comes from the
/// caller, not from this payload; the slug is never touched by an update.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Construct a new post with a generated id, derived slug, and
    /// `created_at == updated_at == now`.
    pub fn new(input: NewPost) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            slug: slugify(&input.title),
            title: input.title,
            content: input.content,
            summary: input.summary,
            tags: input.tags,
            created_at: now,
            updated_at: now,
        }
    }
}
