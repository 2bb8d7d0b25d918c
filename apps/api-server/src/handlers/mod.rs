//! HTTP handlers and route configuration.

mod admin;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Public routes
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::get_all))
                    .route("/{slug}", web::get().to(posts::get_by_slug)),
            )
            // Admin routes - the AdminGate middleware guards this prefix
            .service(
                web::scope("/admin/posts")
                    .route("", web::get().to(admin::get_all))
                    .route("", web::post().to(admin::create))
                    .route("/{id}", web::get().to(admin::get_by_id))
                    .route("/{id}", web::put().to(admin::update))
                    .route("/{id}", web::delete().to(admin::delete)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use quill_shared::dto::PostResponse;

    use crate::middleware::api_key::AdminGate;
    use crate::state::AppState;

    use super::*;

    const KEY: &str = "test-secret";

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .wrap(AdminGate::new(Some(KEY.to_string())))
                    .app_data(web::Data::new(AppState::in_memory()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn create_body(title: &str) -> serde_json::Value {
        serde_json::json!({
            "title": title,
            "content": "Some content",
            "summary": "A summary",
            "tags": ["rust", "web"],
        })
    }

    #[actix_web::test]
    async fn create_then_read_publicly_by_slug() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("Hello, World!"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);
        let created: PostResponse = test::read_body_json(res).await;
        assert_eq!(created.slug, "hello-world");

        let req = test::TestRequest::get()
            .uri("/api/posts/hello-world")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let fetched: PostResponse = test::read_body_json(res).await;
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.tags, vec!["rust", "web"]);
    }

    #[actix_web::test]
    async fn public_list_returns_json_array() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let posts: Vec<PostResponse> = test::read_body_json(res).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn unknown_slug_is_404() {
        let app = app!();

        let req = test::TestRequest::get()
            .uri("/api/posts/no-such-post")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn duplicate_title_is_409() {
        let app = app!();

        for expected in [201, 409] {
            let req = test::TestRequest::post()
                .uri("/api/admin/posts")
                .insert_header(("X-API-Key", KEY))
                .set_json(create_body("Same Title"))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), expected);
        }
    }

    #[actix_web::test]
    async fn empty_title_is_400() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("   "))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
    }

    #[actix_web::test]
    async fn update_unknown_id_is_404() {
        let app = app!();

        let req = test::TestRequest::put()
            .uri("/api/admin/posts/no-such-id")
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("Renamed"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn update_changes_fields_but_not_slug() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("Original Title"))
            .to_request();
        let created: PostResponse =
            test::read_body_json(test::call_service(&app, req).await).await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/posts/{}", created.id))
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("Renamed Title"))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let updated: PostResponse = test::read_body_json(res).await;
        assert_eq!(updated.title, "Renamed Title");
        assert_eq!(updated.slug, "original-title");
    }

    #[actix_web::test]
    async fn delete_returns_204_and_removes_the_post() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/admin/posts")
            .insert_header(("X-API-Key", KEY))
            .set_json(create_body("Short Lived"))
            .to_request();
        let created: PostResponse =
            test::read_body_json(test::call_service(&app, req).await).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/posts/{}", created.id))
            .insert_header(("X-API-Key", KEY))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 204);

        // A second delete of the same id is a 404: the service asserts
        // existence before delegating to the idempotent repository delete.
        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/posts/{}", created.id))
            .insert_header(("X-API-Key", KEY))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn admin_list_requires_the_key() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/admin/posts").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);

        let req = test::TestRequest::get()
            .uri("/api/admin/posts")
            .insert_header(("X-API-Key", KEY))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
    }

    #[actix_web::test]
    async fn health_endpoint_reports_ok() {
        let app = app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["status"], "ok");
    }
}
