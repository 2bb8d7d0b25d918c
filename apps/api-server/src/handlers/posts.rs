//! Public blog read endpoints.

use actix_web::{HttpResponse, web};

use quill_shared::dto::PostResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn get_all(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blog.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{slug}
pub async fn get_by_slug(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state.blog.find_by_slug(&slug).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
