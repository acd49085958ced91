// src/presentation/http/middleware/require_capabilities.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Rejects the request unless the bearer token grants `resource:action`.
///
/// Usage: `axum::middleware::from_fn(|req, next| require_capability(req, next, "comments", "moderate"))`
pub async fn require_capability(
    req: Request<Body>,
    next: Next,
    resource: &'static str,
    action: &'static str,
) -> Response {
    let Some(header) = req.headers().typed_get::<Authorization<Bearer>>() else {
        return HttpError::from_error(ApplicationError::unauthorized(
            "missing Authorization header",
        ))
        .into_response();
    };

    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    match state
        .services
        .authenticate_and_authorize(header.token(), resource, action)
        .await
    {
        Ok(_) => next.run(req).await,
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
