//! Admin blog endpoints - create/update/delete plus id-based reads.
//!
//! The API-key check happens in the AdminGate middleware before any of
//! these handlers run.

use actix_web::{HttpResponse, web};

use quill_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/admin/posts
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/admin/posts/{id}
pub async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.blog.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// POST /api/admin/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let post = state.blog.create(body.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// PUT /api/admin/posts/{id}
///
/// The path id is the lookup key; any id echoed in the body is ignored.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state.blog.update(&id, body.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/admin/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.blog.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}
