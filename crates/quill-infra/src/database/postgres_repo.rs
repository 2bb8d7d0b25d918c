//! PostgreSQL post repository backed by SeaORM.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use quill_core::domain::{NewPost, Post, PostUpdate, tags};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPost};

/// Post repository persisting to the `blog_posts` table.
pub struct SeaOrmPostRepository {
    db: DbConn,
}

impl SeaOrmPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let rows = BlogPost::find()
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let row = BlogPost::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let row = BlogPost::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, input: NewPost) -> Result<Post, RepoError> {
        let post = Post::new(input);
        tracing::debug!(slug = %post.slug, "Inserting blog post");

        let model = blog_post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, id: &str, input: PostUpdate) -> Result<Post, RepoError> {
        // Only the mutable columns are Set; id drives the WHERE clause and
        // slug/created_at stay untouched. A missing row surfaces as
        // RecordNotUpdated, which maps to NotFound.
        let active = blog_post::ActiveModel {
            id: Set(id.to_string()),
            title: Set(input.title),
            slug: NotSet,
            content: Set(input.content),
            summary: Set(input.summary),
            tags: Set(Some(tags::encode(&input.tags))),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        };

        let model = active.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn delete(&self, id: &str) -> Result<(), RepoError> {
        // Idempotent: zero affected rows is still success.
        BlogPost::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    if matches!(e, DbErr::RecordNotUpdated) {
        return RepoError::NotFound;
    }

    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint("post slug already exists".to_string())
    } else if matches!(e, DbErr::Conn(_) | DbErr::ConnectionAcquire(_)) {
        RepoError::Connection(msg)
    } else {
        RepoError::Query(msg)
    }
}
