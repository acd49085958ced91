// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::{comments::AddCommentCommand, content::DeleteContentCommand},
    dto::{ContentFormSchema, DeleteConfirmationDto, EditContentFormDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::forms::{self, ContentFormUpload};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
    response::Redirect,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentRequest {
    pub body: String,
}

fn detail_location(slug: &str) -> String {
    format!("/content/{slug}/")
}

#[utoipa::path(
    get,
    path = "/create/",
    responses(
        (status = 200, description = "Choices and limits for the create form.", body = ContentFormSchema),
        (status = 403, description = "Missing content:create.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn create_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ContentFormSchema>> {
    state
        .services
        .content_queries
        .create_form(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/create/",
    request_body(content = ContentFormUpload, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Created; redirects to the detail page."),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 403, description = "Missing content:create.", body = ErrorResponse),
        (status = 413, description = "Upload too large.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn create_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Redirect> {
    let command = forms::read_create_form(multipart).await?;
    let created = state
        .services
        .content_commands
        .create_content(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to(&detail_location(&created.slug)))
}

#[utoipa::path(
    get,
    path = "/content/{slug}/edit/",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Current values and form choices.", body = EditContentFormDto),
        (status = 403, description = "Not the author.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<EditContentFormDto>> {
    state
        .services
        .content_queries
        .edit_form(&user, &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/content/{slug}/edit/",
    params(("slug" = String, Path, description = "Content slug")),
    request_body(content = ContentFormUpload, content_type = "multipart/form-data"),
    responses(
        (status = 303, description = "Saved; redirects to the detail page."),
        (status = 400, description = "Invalid fields.", body = ErrorResponse),
        (status = 403, description = "Not the author.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse),
        (status = 409, description = "Edited concurrently.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn edit_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    multipart: Multipart,
) -> HttpResult<Redirect> {
    let command = forms::read_update_form(slug, multipart).await?;
    let updated = state
        .services
        .content_commands
        .update_content(&user, command)
        .await
        .into_http()?;

    Ok(Redirect::to(&detail_location(&updated.slug)))
}

#[utoipa::path(
    get,
    path = "/content/{slug}/delete/",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "What deleting will remove.", body = DeleteConfirmationDto),
        (status = 403, description = "Not the author.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn delete_confirmation(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DeleteConfirmationDto>> {
    state
        .services
        .content_queries
        .delete_confirmation(&user, &slug)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/content/{slug}/delete/",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 303, description = "Deleted; redirects to the content list."),
        (status = 403, description = "Not the author.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn delete_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Redirect> {
    state
        .services
        .content_commands
        .delete_content(&user, DeleteContentCommand { slug })
        .await
        .into_http()?;

    Ok(Redirect::to("/content/"))
}

#[utoipa::path(
    post,
    path = "/content/{slug}/comment/",
    params(("slug" = String, Path, description = "Content slug")),
    request_body = CommentRequest,
    responses(
        (status = 303, description = "Comment stored; redirects to the detail page."),
        (status = 400, description = "Comment too short.", body = ErrorResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse),
        (status = 404, description = "Unknown slug.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(slug): Path<String>,
    Json(payload): Json<CommentRequest>,
) -> HttpResult<Redirect> {
    let location = detail_location(&slug);
    state
        .services
        .comment_commands
        .add_comment(
            &user,
            AddCommentCommand {
                slug,
                body: payload.body,
            },
        )
        .await
        .into_http()?;

    Ok(Redirect::to(&location))
}
