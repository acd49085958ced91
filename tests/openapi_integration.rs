// tests/openapi_integration.rs
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use folio_cms::presentation::http::openapi::{ApiDoc, docs_router};
use serde_json::Value;
use tower::ServiceExt; // for oneshot
use utoipa::OpenApi;

#[test]
fn document_lists_every_public_route() {
    let doc = ApiDoc::openapi();
    let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

    for expected in [
        "/health",
        "/",
        "/content/",
        "/content/{slug}/",
        "/categories/",
        "/create/",
        "/content/{slug}/edit/",
        "/content/{slug}/delete/",
        "/content/{slug}/comment/",
        "/profile/",
        "/dashboard/",
        "/auth/register",
        "/auth/login",
        "/admin/comments/pending",
        "/admin/comments/approve",
        "/admin/content/publish",
        "/admin/categories",
        "/admin/roles",
        "/admin/users/{id}/role",
    ] {
        assert!(paths.contains(&expected), "missing path {expected}: {paths:?}");
    }
}

#[test]
fn bearer_scheme_is_registered() {
    let doc = ApiDoc::openapi();
    let components = doc.components.expect("components");
    assert!(components.security_schemes.contains_key("bearerAuth"));
    assert!(components.schemas.contains_key("ErrorResponse"));
    assert!(components.schemas.contains_key("ContentDetailDto"));
}

#[tokio::test]
async fn docs_router_serves_openapi_json() {
    let app = docs_router();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/openapi.json")
        .body(Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = body::to_bytes(resp.into_body(), 4 * 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["info"]["title"], "Folio CMS API");
}
