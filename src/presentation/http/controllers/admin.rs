// src/presentation/http/controllers/admin.rs
use crate::application::{
    commands::{
        categories::CreateCategoryCommand, comments::ModerateCommentsCommand,
        content::SetPublicationCommand, users::AssignRoleCommand,
    },
    dto::{AuthenticatedUser, BulkResultDto, CategoryDto, CommentDto, RoleDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct BulkIdsRequest {
    pub ids: Vec<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignRoleRequest {
    /// `null` removes the user's role.
    pub role_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/admin/comments/pending",
    responses(
        (status = 200, description = "Comments awaiting approval, oldest first.", body = [CommentDto]),
        (status = 403, description = "Missing comments:moderate.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn pending_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .pending(&user)
        .await
        .into_http()
        .map(Json)
}

async fn moderate(
    state: HttpState,
    user: &AuthenticatedUser,
    ids: Vec<i64>,
    approve: bool,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .comment_commands
        .moderate(user, ModerateCommentsCommand { ids, approve })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/comments/approve",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Number of comments approved.", body = BulkResultDto),
        (status = 400, description = "No ids given.", body = ErrorResponse),
        (status = 403, description = "Missing comments:moderate.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn approve_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkIdsRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    moderate(state, &user, payload.ids, true).await
}

#[utoipa::path(
    post,
    path = "/admin/comments/unapprove",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Number of comments hidden again.", body = BulkResultDto),
        (status = 400, description = "No ids given.", body = ErrorResponse),
        (status = 403, description = "Missing comments:moderate.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn unapprove_comments(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkIdsRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    moderate(state, &user, payload.ids, false).await
}

async fn set_publication(
    state: HttpState,
    user: &AuthenticatedUser,
    ids: Vec<i64>,
    publish: bool,
) -> HttpResult<Json<BulkResultDto>> {
    state
        .services
        .content_commands
        .set_publication(user, SetPublicationCommand { ids, publish })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/content/publish",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Number of items published.", body = BulkResultDto),
        (status = 403, description = "Missing content:publish.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn publish_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkIdsRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    set_publication(state, &user, payload.ids, true).await
}

#[utoipa::path(
    post,
    path = "/admin/content/unpublish",
    request_body = BulkIdsRequest,
    responses(
        (status = 200, description = "Number of items returned to draft.", body = BulkResultDto),
        (status = 403, description = "Missing content:publish.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn unpublish_content(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<BulkIdsRequest>,
) -> HttpResult<Json<BulkResultDto>> {
    set_publication(state, &user, payload.ids, false).await
}

#[utoipa::path(
    post,
    path = "/admin/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created.", body = CategoryDto),
        (status = 400, description = "Invalid name or slug.", body = ErrorResponse),
        (status = 409, description = "Name or slug taken.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn create_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateCategoryRequest>,
) -> HttpResult<(StatusCode, Json<CategoryDto>)> {
    let category = state
        .services
        .category_commands
        .create_category(
            &user,
            CreateCategoryCommand {
                name: payload.name,
                slug: payload.slug,
                description: payload.description,
            },
        )
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    delete,
    path = "/admin/categories/{id}",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted; content links removed."),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_category(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .category_commands
        .delete_category(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/admin/roles",
    responses(
        (status = 200, description = "All roles with their capabilities.", body = [RoleDto]),
        (status = 403, description = "Missing users:manage.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_roles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<RoleDto>>> {
    state
        .services
        .user_queries
        .list_roles(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/roles/{id}",
    params(("id" = i64, Path, description = "Role id")),
    responses(
        (status = 204, description = "Role deleted; its users are left without a role."),
        (status = 404, description = "Unknown role.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_role(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_role(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/admin/users/{id}/role",
    params(("id" = i64, Path, description = "User id")),
    request_body = AssignRoleRequest,
    responses(
        (status = 200, description = "User with the new role.", body = UserDto),
        (status = 404, description = "Unknown user or role.", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn assign_role(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<AssignRoleRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .assign_role(
            &user,
            AssignRoleCommand {
                user_id: id,
                role_id: payload.role_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}
