// src/presentation/http/controllers/profile.rs
use super::pages::PageParams;
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{DashboardDto, ProfileDto, UserDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Query,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub bio: Option<String>,
    /// An empty string clears the avatar.
    pub avatar: Option<String>,
}

#[utoipa::path(
    get,
    path = "/profile/",
    params(PageParams),
    responses(
        (status = 200, description = "The caller and their content.", body = ProfileDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<ProfileDto>> {
    state
        .services
        .user_queries
        .profile(&user, params.page())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/profile/",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile.", body = UserDto),
        (status = 400, description = "Nothing to update or bio too long.", body = ErrorResponse),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .update_profile(
            &user,
            UpdateProfileCommand {
                bio: payload.bio,
                avatar: payload.avatar,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/dashboard/",
    params(PageParams),
    responses(
        (status = 200, description = "Authoring statistics and own content.", body = DashboardDto),
        (status = 401, description = "Not signed in.", body = ErrorResponse)
    ),
    tag = "Profile"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<DashboardDto>> {
    state
        .services
        .content_queries
        .dashboard(&user, params.page())
        .await
        .into_http()
        .map(Json)
}
