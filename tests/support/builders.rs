// tests/support/builders.rs
use axum::body::Body;
use axum::http::{Request, header::AUTHORIZATION};
use bytes::Bytes;
use folio_cms::application::{dto::AuthenticatedUser, ports::storage::FileUpload};

use super::mocks::{ADMIN_TOKEN, AUTHOR_TOKEN, OTHER_AUTHOR_TOKEN, VIEWER_TOKEN, test_user};

const BOUNDARY: &str = "folio-test-boundary";

pub fn admin() -> AuthenticatedUser {
    test_user(ADMIN_TOKEN).unwrap()
}

pub fn author() -> AuthenticatedUser {
    test_user(AUTHOR_TOKEN).unwrap()
}

pub fn viewer() -> AuthenticatedUser {
    test_user(VIEWER_TOKEN).unwrap()
}

pub fn other_author() -> AuthenticatedUser {
    test_user(OTHER_AUTHOR_TOKEN).unwrap()
}

pub fn upload(file_name: &str, content_type: &str, bytes: &'static [u8]) -> FileUpload {
    FileUpload {
        file_name: file_name.into(),
        content_type: Some(content_type.into()),
        bytes: Bytes::from_static(bytes),
    }
}

/// Hand-assembled `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn into_request(mut self, uri: &str, token: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(self.body)).unwrap()
    }
}
