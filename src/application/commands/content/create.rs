// src/application/commands/content/create.rs
use super::{ContentCommandService, uploads::parse_metadata};
use crate::{
    application::{
        capability::ensure_capability,
        dto::{AuthenticatedUser, ContentDto},
        error::{ApplicationError, ApplicationResult, FormErrors},
        ports::storage::FileUpload,
    },
    domain::{
        category::CategorySelection,
        content::{ContentBody, ContentTitle, NewContent, Publication},
        document::{DocumentDraft, DocumentTitle},
    },
};

/// A content form submission as received; every field is validated by
/// [`ContentCommandService::create_content`].
#[derive(Debug, Clone, Default)]
pub struct CreateContentCommand {
    pub title: String,
    pub body: String,
    /// Raw ids of existing categories.
    pub categories: Vec<String>,
    pub new_category: Option<String>,
    pub publish: bool,
    pub publish_at: Option<String>,
    pub metadata: Option<String>,
    pub featured_image: Option<FileUpload>,
    pub document: Option<FileUpload>,
    pub document_title: Option<String>,
}

impl CreateContentCommand {
    pub fn builder() -> CreateContentCommandBuilder {
        CreateContentCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateContentCommandBuilder {
    command: CreateContentCommand,
}

impl CreateContentCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.command.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.command.body = body.into();
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.command.categories.push(id.to_string());
        self
    }

    pub fn new_category(mut self, name: impl Into<String>) -> Self {
        self.command.new_category = Some(name.into());
        self
    }

    pub fn publish(mut self, publish: bool) -> Self {
        self.command.publish = publish;
        self
    }

    pub fn publish_at(mut self, at: impl Into<String>) -> Self {
        self.command.publish_at = Some(at.into());
        self
    }

    pub fn metadata(mut self, raw: impl Into<String>) -> Self {
        self.command.metadata = Some(raw.into());
        self
    }

    pub fn featured_image(mut self, upload: FileUpload) -> Self {
        self.command.featured_image = Some(upload);
        self
    }

    pub fn document(mut self, upload: FileUpload, title: Option<String>) -> Self {
        self.command.document = Some(upload);
        self.command.document_title = title;
        self
    }

    pub fn build(self) -> CreateContentCommand {
        self.command
    }
}

/// Category ids arrive as form strings; anything that is not a positive
/// integer is an invalid choice.
pub(super) fn parse_category_ids(raw: &[String], errors: &mut FormErrors) -> Option<Vec<i64>> {
    let mut ids = Vec::with_capacity(raw.len());
    for value in raw.iter().map(|value| value.trim()).filter(|value| !value.is_empty()) {
        match value.parse::<i64>() {
            Ok(id) if id > 0 => ids.push(id),
            _ => {
                errors.add("categories", format!("select a valid choice; {value} is not one of the available categories"));
                return None;
            }
        }
    }
    Some(ids)
}

impl ContentCommandService {
    pub async fn create_content(
        &self,
        actor: &AuthenticatedUser,
        command: CreateContentCommand,
    ) -> ApplicationResult<ContentDto> {
        ensure_capability(actor, "content", "create")?;

        let CreateContentCommand {
            title,
            body,
            categories,
            new_category,
            publish,
            publish_at,
            metadata,
            featured_image,
            document,
            document_title,
        } = command;

        let mut errors = FormErrors::new();
        let title = errors.check("title", ContentTitle::new(title));
        let body = errors.check("body", ContentBody::new(body));
        let selection = parse_category_ids(&categories, &mut errors)
            .and_then(|ids| errors.check("new_category", CategorySelection::new(ids, new_category)))
            .and_then(|selection| errors.check("categories", selection.require_for_create()));
        let publication = self.requested_publication(
            Publication::Draft,
            Some(publish),
            publish_at.as_deref(),
            &mut errors,
        );
        let metadata = match parse_metadata(metadata.as_deref()) {
            Ok(map) => Some(map),
            Err(msg) => {
                errors.add("metadata", msg);
                None
            }
        };
        self.check_upload("featured_image", featured_image.as_ref(), &mut errors);
        let document_title = match &document {
            Some(upload) => {
                self.check_upload("document", Some(upload), &mut errors);
                errors.check(
                    "document_title",
                    DocumentTitle::new(document_title.unwrap_or_default()),
                )
            }
            None => None,
        };

        let (Some(title), Some(body), Some(selection), Some(publication), Some(metadata)) =
            (title, body, selection, publication, metadata)
        else {
            return Err(ApplicationError::Form(errors));
        };
        errors.into_result()?;

        self.ensure_can_change_publication(actor, Publication::Draft, publication)?;
        let categories = self.resolve_categories(selection).await?;
        let slug = self.slug_service.generate_unique_slug(&title).await?;

        let mut stored = self
            .store_uploads(&[featured_image.as_ref(), document.as_ref()])
            .await?
            .into_iter();
        let featured = stored.next().flatten();
        let document_file = stored.next().flatten();
        let stored_keys: Vec<String> = featured
            .iter()
            .chain(document_file.iter())
            .map(|file| file.key.clone())
            .collect();

        let now = self.clock.now();
        let document = match (document_file, document_title) {
            (Some(file), Some(title)) => Some(DocumentDraft {
                title,
                file,
                uploaded_by: actor.id,
                uploaded_at: now,
            }),
            _ => None,
        };

        let new_content = NewContent {
            title,
            slug,
            body,
            author_id: actor.id,
            categories,
            publication,
            featured_image: featured.map(|file| file.key),
            metadata,
            document,
            created_at: now,
        };

        let created = match self.write_repo.create(new_content).await {
            Ok(created) => created,
            Err(err) => {
                self.discard_files(&stored_keys).await;
                return Err(err.into());
            }
        };

        tracing::info!(
            content_id = created.id.0,
            slug = %created.slug,
            author_id = %actor.id,
            status = created.publication.label(),
            "content created"
        );
        Ok(created.into())
    }
}
