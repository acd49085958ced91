// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::auth::register,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::pages::home,
        crate::presentation::http::controllers::pages::content_list,
        crate::presentation::http::controllers::pages::content_detail,
        crate::presentation::http::controllers::pages::categories,
        crate::presentation::http::controllers::content::create_form,
        crate::presentation::http::controllers::content::create_content,
        crate::presentation::http::controllers::content::edit_form,
        crate::presentation::http::controllers::content::edit_content,
        crate::presentation::http::controllers::content::delete_confirmation,
        crate::presentation::http::controllers::content::delete_content,
        crate::presentation::http::controllers::content::add_comment,
        crate::presentation::http::controllers::profile::profile,
        crate::presentation::http::controllers::profile::update_profile,
        crate::presentation::http::controllers::profile::dashboard,
        crate::presentation::http::controllers::admin::pending_comments,
        crate::presentation::http::controllers::admin::approve_comments,
        crate::presentation::http::controllers::admin::unapprove_comments,
        crate::presentation::http::controllers::admin::publish_content,
        crate::presentation::http::controllers::admin::unpublish_content,
        crate::presentation::http::controllers::admin::create_category,
        crate::presentation::http::controllers::admin::delete_category,
        crate::presentation::http::controllers::admin::list_roles,
        crate::presentation::http::controllers::admin::delete_role,
        crate::presentation::http::controllers::admin::assign_role
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::forms::ContentFormUpload,
            crate::presentation::http::controllers::auth::RegisterRequest,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::auth::LoginResponse,
            crate::presentation::http::controllers::content::CommentRequest,
            crate::presentation::http::controllers::profile::UpdateProfileRequest,
            crate::presentation::http::controllers::admin::BulkIdsRequest,
            crate::presentation::http::controllers::admin::CreateCategoryRequest,
            crate::presentation::http::controllers::admin::AssignRoleRequest,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::UserDto,
            crate::application::dto::RoleDto,
            crate::application::dto::CapabilityView,
            crate::application::dto::CategoryDto,
            crate::application::dto::ContentDto,
            crate::application::dto::ContentSummaryDto,
            crate::application::dto::CommentDto,
            crate::application::dto::DocumentDto,
            crate::application::dto::HomePageDto,
            crate::application::dto::ContentListPageDto,
            crate::application::dto::ContentDetailDto,
            crate::application::dto::CategoryChoice,
            crate::application::dto::ContentFormSchema,
            crate::application::dto::EditContentFormDto,
            crate::application::dto::DeleteConfirmationDto,
            crate::application::dto::AuthorStatsDto,
            crate::application::dto::DashboardDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::BulkResultDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration and bearer tokens"),
        (name = "Pages", description = "Public reading endpoints"),
        (name = "Content", description = "Authoring, editing and commenting"),
        (name = "Profile", description = "The signed-in user's own pages"),
        (name = "Admin", description = "Moderation, publishing, categories and roles"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Folio CMS API",
        description = "Content management backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let mut urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            urls.push("http://localhost:8080".to_string());
        }

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    // the swagger router also serves the raw document at /openapi.json
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new().merge(swagger).merge(redoc)
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH`, returning where it went.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
