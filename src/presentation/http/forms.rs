// src/presentation/http/forms.rs
use crate::application::{
    commands::content::{CreateContentCommand, UpdateContentCommand},
    ports::storage::FileUpload,
};
use axum::extract::Multipart;
use serde::Deserialize;
use utoipa::ToSchema;

use super::error::{HttpError, HttpResult};

/// Fields of the create and edit forms, as sent in `multipart/form-data`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContentFormUpload {
    pub title: String,
    pub body: String,
    /// Repeat the field once per selected category id.
    pub categories: Option<Vec<i64>>,
    /// Name of a category to create or reuse.
    pub new_category: Option<String>,
    /// `true`, `on` or `1` publishes immediately. On edit any other value
    /// unpublishes and leaving the field out keeps the current state.
    pub publish: Option<String>,
    /// RFC 3339 timestamp; schedules publication.
    pub publish_at: Option<String>,
    /// JSON object.
    pub metadata: Option<String>,
    #[schema(value_type = Option<String>, format = Binary)]
    pub featured_image: Option<Vec<u8>>,
    /// Create only.
    #[schema(value_type = Option<String>, format = Binary)]
    pub document: Option<Vec<u8>>,
    /// Create only; required with `document`.
    pub document_title: Option<String>,
    /// Edit only; the `updated_at` the form was rendered from.
    pub updated_at: Option<String>,
}

/// Raw form values before they are turned into a command.
#[derive(Debug, Default)]
struct ContentForm {
    title: String,
    body: String,
    categories: Vec<String>,
    new_category: Option<String>,
    publish: Option<bool>,
    publish_at: Option<String>,
    metadata: Option<String>,
    featured_image: Option<FileUpload>,
    document: Option<FileUpload>,
    document_title: Option<String>,
    updated_at: Option<String>,
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl ContentForm {
    async fn read(mut multipart: Multipart) -> HttpResult<Self> {
        let mut form = ContentForm::default();

        while let Some(field) = multipart.next_field().await.map_err(HttpError::from)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match name.as_str() {
                "featured_image" | "document" => {
                    let file_name = field.file_name().unwrap_or_default().to_owned();
                    let content_type = field.content_type().map(str::to_owned);
                    let bytes = field.bytes().await.map_err(HttpError::from)?;
                    // browsers send an empty part when no file was chosen
                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    let upload = FileUpload {
                        file_name,
                        content_type,
                        bytes,
                    };
                    if name == "document" {
                        form.document = Some(upload);
                    } else {
                        form.featured_image = Some(upload);
                    }
                }
                _ => {
                    let value = field.text().await.map_err(HttpError::from)?;
                    form.apply_text(&name, value);
                }
            }
        }

        Ok(form)
    }

    fn apply_text(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "body" => self.body = value,
            "categories" => self.categories.push(value),
            "new_category" => self.new_category = non_blank(value),
            "publish" => self.publish = Some(truthy(&value)),
            "publish_at" => self.publish_at = non_blank(value),
            "metadata" => self.metadata = non_blank(value),
            "document_title" => self.document_title = non_blank(value),
            "updated_at" => self.updated_at = non_blank(value),
            other => tracing::debug!(field = other, "ignoring unknown form field"),
        }
    }
}

pub async fn read_create_form(multipart: Multipart) -> HttpResult<CreateContentCommand> {
    let form = ContentForm::read(multipart).await?;
    Ok(CreateContentCommand {
        title: form.title,
        body: form.body,
        categories: form.categories,
        new_category: form.new_category,
        publish: form.publish.unwrap_or(false),
        publish_at: form.publish_at,
        metadata: form.metadata,
        featured_image: form.featured_image,
        document: form.document,
        document_title: form.document_title,
    })
}

/// Document fields are not accepted on edit and are dropped.
pub async fn read_update_form(slug: String, multipart: Multipart) -> HttpResult<UpdateContentCommand> {
    let form = ContentForm::read(multipart).await?;
    if form.document.is_some() {
        tracing::debug!(slug = %slug, "ignoring document upload on edit");
    }
    Ok(UpdateContentCommand {
        slug,
        title: form.title,
        body: form.body,
        categories: form.categories,
        new_category: form.new_category,
        publish: form.publish,
        publish_at: form.publish_at,
        metadata: form.metadata,
        featured_image: form.featured_image,
        expected_updated_at: form.updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_values_are_accepted() {
        for value in ["true", "on", "1", " ON "] {
            assert!(truthy(value), "{value}");
        }
        for value in ["", "false", "off", "0"] {
            assert!(!truthy(value), "{value}");
        }
    }

    #[test]
    fn repeated_category_fields_accumulate() {
        let mut form = ContentForm::default();
        form.apply_text("categories", "1".into());
        form.apply_text("categories", "3".into());
        form.apply_text("new_category", "   ".into());
        assert_eq!(form.categories, vec!["1".to_string(), "3".to_string()]);
        assert!(form.new_category.is_none());
    }
}
