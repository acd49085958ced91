use crate::domain::errors::DomainError;

const CNT_CONTENT_SLUG: &str = "contents_slug_key";
const CNT_CONTENT_AUTHOR: &str = "contents_author_id_fkey";
const CNT_CONTENT_PUBLISHED_CHECK: &str = "contents_published_requires_timestamp_chk";
const CNT_CATEGORY_NAME: &str = "categories_name_key";
const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_CONTENT_CATEGORY: &str = "content_categories_category_id_fkey";
const CNT_COMMENT_CONTENT: &str = "comments_content_id_fkey";
const CNT_DOCUMENT_CONTENT: &str = "documents_content_id_fkey";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_ROLE: &str = "users_role_id_fkey";
const CNT_ROLE_NAME: &str = "roles_name_key";

/// Translates constraint violations into domain errors. Slug races are
/// reported as validation failures so the client can simply resubmit.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            db_err
                .code()
                .and_then(|code| map_sqlstate(code.as_ref()))
                .unwrap_or_else(|| DomainError::Persistence(db_err.message().to_string()))
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_CONTENT_SLUG => DomainError::Validation(
            "another item claimed this slug at the same time; please submit again".into(),
        ),
        CNT_CONTENT_PUBLISHED_CHECK => {
            DomainError::Validation("published content requires a publication date".into())
        }
        CNT_CATEGORY_SLUG => {
            DomainError::Validation("category slug already in use; please submit again".into())
        }
        CNT_CATEGORY_NAME => DomainError::Conflict("category already exists".into()),
        CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
        CNT_ROLE_NAME => DomainError::Conflict("role already exists".into()),
        CNT_CONTENT_AUTHOR => DomainError::NotFound("author not found".into()),
        CNT_CONTENT_CATEGORY => DomainError::NotFound("category not found".into()),
        CNT_COMMENT_CONTENT | CNT_DOCUMENT_CONTENT => {
            DomainError::NotFound("content not found".into())
        }
        CNT_USER_ROLE => DomainError::NotFound("role not found".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}

fn map_sqlstate(code: &str) -> Option<DomainError> {
    match code {
        "22001" => Some(DomainError::Validation("value too long".into())),
        "23505" => Some(DomainError::Conflict("unique constraint violated".into())),
        "23503" => Some(DomainError::NotFound("referenced record not found".into())),
        "23514" => Some(DomainError::Validation("check constraint violated".into())),
        _ => None,
    }
}
