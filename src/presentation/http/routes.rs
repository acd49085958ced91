// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin, auth, content, pages, profile},
    middleware::require_capability,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::{DefaultBodyLimit, Request},
    http::{HeaderValue, Method},
    middleware::{Next, from_fn},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

fn admin_routes() -> Router {
    let moderation = Router::new()
        .route("/admin/comments/pending", get(admin::pending_comments))
        .route("/admin/comments/approve", post(admin::approve_comments))
        .route("/admin/comments/unapprove", post(admin::unapprove_comments))
        .route_layer(from_fn(|req: Request, next: Next| {
            require_capability(req, next, "comments", "moderate")
        }));

    let publishing = Router::new()
        .route("/admin/content/publish", post(admin::publish_content))
        .route("/admin/content/unpublish", post(admin::unpublish_content))
        .route_layer(from_fn(|req: Request, next: Next| {
            require_capability(req, next, "content", "publish")
        }));

    let categories = Router::new()
        .route("/admin/categories", post(admin::create_category))
        .route("/admin/categories/{id}", delete(admin::delete_category))
        .route_layer(from_fn(|req: Request, next: Next| {
            require_capability(req, next, "categories", "manage")
        }));

    let users = Router::new()
        .route("/admin/roles", get(admin::list_roles))
        .route("/admin/roles/{id}", delete(admin::delete_role))
        .route("/admin/users/{id}/role", put(admin::assign_role))
        .route_layer(from_fn(|req: Request, next: Next| {
            require_capability(req, next, "users", "manage")
        }));

    moderation.merge(publishing).merge(categories).merge(users)
}

pub fn build_router(state: HttpState) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);
    let body_limit = DefaultBodyLimit::max(state.settings.body_limit_bytes());

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(pages::home))
        .route("/content/", get(pages::content_list))
        .route("/content/{slug}/", get(pages::content_detail))
        .route("/categories/", get(pages::categories))
        .route(
            "/create/",
            get(content::create_form).post(content::create_content),
        )
        .route(
            "/content/{slug}/edit/",
            get(content::edit_form).post(content::edit_content),
        )
        .route(
            "/content/{slug}/delete/",
            get(content::delete_confirmation).post(content::delete_content),
        )
        .route("/content/{slug}/comment/", post(content::add_comment))
        .route(
            "/profile/",
            get(profile::profile).post(profile::update_profile),
        )
        .route("/dashboard/", get(profile::dashboard))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .merge(admin_routes())
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
