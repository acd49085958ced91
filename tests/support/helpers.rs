// tests/support/helpers.rs
use std::sync::Arc;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use folio_cms::application::{
    ports::{
        security::{PasswordHasher, TokenManager},
        storage::FileStorage,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationServices, Ports, Repositories, ServiceSettings},
};
use folio_cms::infrastructure::util::DefaultSlugGenerator;
use folio_cms::presentation::http::{
    routes::build_router,
    state::{HttpSettings, HttpState},
};
use serde_json::Value;

use super::mocks::{DummyPasswordHasher, DummyTokenManager, InMemoryStore, MemoryStorage, TestClock};

/// Services and router wired against the in-memory adapters, with handles
/// kept so tests can inspect what was persisted.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub storage: Arc<MemoryStorage>,
    pub clock: Arc<TestClock>,
    pub services: Arc<ApplicationServices>,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_settings(ServiceSettings::default())
    }

    pub fn with_settings(settings: ServiceSettings) -> Self {
        Self::build(InMemoryStore::seeded(), settings)
    }

    pub fn build(store: InMemoryStore, settings: ServiceSettings) -> Self {
        let store = Arc::new(store);
        let storage = Arc::new(MemoryStorage::new());
        let clock = Arc::new(TestClock::new());

        let repos = Repositories {
            users: store.clone(),
            roles: store.clone(),
            categories: store.clone(),
            content_write: store.clone(),
            content_read: store.clone(),
            comments: store.clone(),
            documents: store.clone(),
        };
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
        let token_manager: Arc<dyn TokenManager> = Arc::new(DummyTokenManager::new());
        let clock_port: Arc<dyn Clock> = clock.clone();
        let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
        let storage_port: Arc<dyn FileStorage> = storage.clone();
        let ports = Ports {
            password_hasher,
            token_manager,
            clock: clock_port,
            slugger,
            storage: storage_port,
        };

        let services = Arc::new(ApplicationServices::new(repos, ports, settings));
        let state = HttpState {
            services: Arc::clone(&services),
            settings: HttpSettings {
                upload_limit: settings.upload_limit,
                allowed_origins: Vec::new(),
            },
        };

        Self {
            store,
            storage,
            clock,
            services,
            router: build_router(state),
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, payload: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(payload.to_string())).unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes).expect("expected a JSON body")
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    json
}
