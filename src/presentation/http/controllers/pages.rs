// src/presentation/http/controllers/pages.rs
use crate::application::{
    dto::{CategoryDto, ContentDetailDto, ContentListPageDto, HomePageDto},
    queries::content::ContentListQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::MaybeAuthenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// Case-insensitive text searched in titles and bodies.
    pub q: Option<String>,
    /// Category slug.
    pub category: Option<String>,
    /// One-based; anything unparsable means the first page.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// One-based; anything unparsable means the first page.
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
}

/// Lenient page parsing: `?page=` and `?page=abc` fall back to page one.
pub(crate) fn parse_page(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
}

impl PageParams {
    pub fn page(&self) -> Option<u32> {
        parse_page(self.page.as_deref())
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Latest published content and all categories.", body = HomePageDto)
    ),
    security(()),
    tag = "Pages"
)]
pub async fn home(Extension(state): Extension<HttpState>) -> HttpResult<Json<HomePageDto>> {
    state
        .services
        .content_queries
        .home()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/content/",
    params(ContentListParams),
    responses(
        (status = 200, description = "Published content, newest first.", body = ContentListPageDto),
        (status = 404, description = "Unknown category.", body = ErrorResponse)
    ),
    security(()),
    tag = "Pages"
)]
pub async fn content_list(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<ContentListPageDto>> {
    state
        .services
        .content_queries
        .list(ContentListQuery {
            q: params.q,
            category: params.category,
            page: parse_page(params.page.as_deref()),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/content/{slug}/",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Content with approved comments and documents.", body = ContentDetailDto),
        (status = 404, description = "Unknown slug or not visible to the caller.", body = ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn content_detail(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(actor): MaybeAuthenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<ContentDetailDto>> {
    let detail = state
        .services
        .content_queries
        .detail(actor.as_ref(), &slug)
        .await
        .into_http()?;

    if let Err(err) = state
        .services
        .content_commands
        .record_view(detail.content.id)
        .await
    {
        tracing::warn!(error = %err, slug = %slug, "failed to record content view");
    }

    Ok(Json(detail))
}

#[utoipa::path(
    get,
    path = "/categories/",
    responses(
        (status = 200, description = "Every category, by name.", body = [CategoryDto])
    ),
    security(()),
    tag = "Pages"
)]
pub async fn categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .category_queries
        .list_all()
        .await
        .into_http()
        .map(Json)
}
