use super::ContentQueryService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::{
            AuthenticatedUser, CategoryChoice, ContentFormSchema, DeleteConfirmationDto,
            EditContentFormDto,
        },
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        category::CategoryId,
        content::{Content, ContentBody, ContentTitle, IsContentAuthorSpec},
    },
};

impl ContentQueryService {
    pub async fn create_form(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ContentFormSchema> {
        ensure_capability(actor, "content", "create")?;
        self.form_schema(actor, &[]).await
    }

    pub async fn edit_form(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<EditContentFormDto> {
        let content = self.load_owned(actor, slug).await?;
        let selected: Vec<CategoryId> = content.categories.iter().map(|c| c.id).collect();
        let form = self.form_schema(actor, &selected).await?;
        Ok(EditContentFormDto {
            content: content.into(),
            form,
        })
    }

    pub async fn delete_confirmation(
        &self,
        actor: &AuthenticatedUser,
        slug: &str,
    ) -> ApplicationResult<DeleteConfirmationDto> {
        let content = self.load_owned(actor, slug).await?;
        let comment_count = self
            .comment_repo
            .list_for_content(content.id, false)
            .await?
            .len() as u64;
        let document_count = self.document_repo.list_by_content(content.id).await?.len() as u64;
        Ok(DeleteConfirmationDto {
            content: content.into(),
            comment_count,
            document_count,
        })
    }

    async fn load_owned(&self, actor: &AuthenticatedUser, slug: &str) -> ApplicationResult<Content> {
        let content = self.load_by_slug(slug).await?;
        if !IsContentAuthorSpec::new(&content, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "only the author can change this content",
            ));
        }
        Ok(content)
    }

    async fn form_schema(
        &self,
        actor: &AuthenticatedUser,
        selected: &[CategoryId],
    ) -> ApplicationResult<ContentFormSchema> {
        let categories = self.category_repo.list_all().await?;
        Ok(ContentFormSchema {
            categories: categories
                .into_iter()
                .map(|category| CategoryChoice {
                    selected: selected.contains(&category.id),
                    id: category.id.into(),
                    name: category.name.into(),
                })
                .collect(),
            title_max_length: ContentTitle::MAX_LEN,
            body_min_length: ContentBody::MIN_LEN,
            max_upload_bytes: self.upload_limit.max_bytes(),
            can_publish: actor.has_capability("content", "publish"),
        })
    }
}
