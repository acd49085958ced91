// src/application/commands/content/update.rs
use super::{ContentCommandService, create::parse_category_ids, uploads::parse_metadata};
use crate::{
    application::{
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult, FormErrors},
        ports::storage::FileUpload,
    },
    domain::{
        category::CategorySelection,
        content::{
            ContentBody, ContentSlug, ContentTitle, ContentUpdate, IsContentAuthorSpec,
        },
        errors::DomainError,
    },
};
use chrono::{DateTime, Utc};

/// An edit form submission. Title and body are always replaced; leaving
/// out categories keeps the current ones, leaving out metadata keeps
/// the stored map and leaving out `publish` and `publish_at` keeps the
/// publication state. The slug never changes.
#[derive(Debug, Clone, Default)]
pub struct UpdateContentCommand {
    pub slug: String,
    pub title: String,
    pub body: String,
    pub categories: Vec<String>,
    pub new_category: Option<String>,
    /// `Some(false)` unpublishes.
    pub publish: Option<bool>,
    pub publish_at: Option<String>,
    pub metadata: Option<String>,
    pub featured_image: Option<FileUpload>,
    /// `updated_at` as shown on the edit form; a mismatch is a conflict.
    pub expected_updated_at: Option<String>,
}

impl ContentCommandService {
    pub async fn update_content(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        let slug = ContentSlug::new(command.slug.clone())?;
        let content = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("content not found"))?;

        if !IsContentAuthorSpec::new(&content, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can edit this content",
            ));
        }

        let UpdateContentCommand {
            slug: _,
            title,
            body,
            categories,
            new_category,
            publish,
            publish_at,
            metadata,
            featured_image,
            expected_updated_at,
        } = command;

        let mut errors = FormErrors::new();
        let title = errors.check("title", ContentTitle::new(title));
        let body = errors.check("body", ContentBody::new(body));
        let selection = parse_category_ids(&categories, &mut errors)
            .and_then(|ids| errors.check("new_category", CategorySelection::new(ids, new_category)))
            .and_then(|selection| {
                errors.check("categories", selection.resolve_for_edit(&content.categories))
            });
        let publication = self.requested_publication(
            content.publication,
            publish,
            publish_at.as_deref(),
            &mut errors,
        );
        let metadata = match metadata.as_deref().map(|raw| parse_metadata(Some(raw))) {
            None => Some(None),
            Some(Ok(map)) => Some(Some(map)),
            Some(Err(msg)) => {
                errors.add("metadata", msg);
                None
            }
        };
        self.check_upload("featured_image", featured_image.as_ref(), &mut errors);
        let original_updated_at = match expected_updated_at.as_deref() {
            None => Some(content.updated_at),
            Some(raw) => errors.check(
                "updated_at",
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|parsed| parsed.with_timezone(&Utc))
                    .map_err(|_| DomainError::validation("enter a valid RFC 3339 timestamp")),
            ),
        };

        let (
            Some(title),
            Some(body),
            Some(selection),
            Some(publication),
            Some(metadata),
            Some(original_updated_at),
        ) = (title, body, selection, publication, metadata, original_updated_at)
        else {
            return Err(ApplicationError::Form(errors));
        };
        errors.into_result()?;

        if original_updated_at != content.updated_at {
            return Err(ApplicationError::conflict(
                "content was modified by another request; reload and try again",
            ));
        }

        self.ensure_can_change_publication(actor, content.publication, publication)?;

        let mut update = ContentUpdate::new(content.id, original_updated_at)
            .with_title(title)
            .with_body(body);
        if publication != content.publication {
            update = update.with_publication(publication);
        }
        if let Some(selection) = selection {
            update = update.with_categories(self.resolve_categories(selection).await?);
        }
        if let Some(metadata) = metadata {
            update = update.with_metadata(metadata);
        }

        let stored = self
            .store_uploads(&[featured_image.as_ref()])
            .await?
            .into_iter()
            .next()
            .flatten();
        if let Some(file) = &stored {
            update = update.with_featured_image(Some(file.key.clone()));
        }
        update.set_updated_at(self.clock.now());

        let updated = match self.write_repo.update(update).await {
            Ok(updated) => updated,
            Err(err) => {
                if let Some(file) = stored {
                    self.discard_files(&[file.key]).await;
                }
                return Err(err.into());
            }
        };

        if stored.is_some() {
            if let Some(previous) = content.featured_image {
                self.discard_files(&[previous]).await;
            }
        }

        tracing::info!(
            content_id = updated.id.0,
            slug = %updated.slug,
            status = updated.publication.label(),
            "content updated"
        );
        Ok(updated.into())
    }
}
