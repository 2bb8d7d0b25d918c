//! Data Transfer Objects - request/response types for the API.
//!
//! The wire shape is camelCase, matching the existing web consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quill_core::domain::{NewPost, Post, PostUpdate};

/// Request body for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            summary: req.summary,
            tags: req.tags,
        }
    }
}

/// Request body for updating a post.
///
/// Consumers echo the id in the body, but the path parameter is the lookup
/// key; the body id is carried for wire compatibility and otherwise ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub content: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            summary: req.summary,
            tags: req.tags,
        }
    }
}

/// A post as rendered on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            slug: post.slug,
            content: post.content,
            summary: post.summary,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
