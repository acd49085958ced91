use std::collections::HashSet;

use crate::domain::content::entity::Content;
use crate::domain::user::value_objects::{Capability, UserId};

/// Published content is public; anything else is visible to its author
/// and to holders of `content:view_drafts`.
pub struct CanViewContentSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    content: &'a Content,
    user_id: Option<UserId>,
}

impl<'a> CanViewContentSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        content: &'a Content,
        user_id: Option<UserId>,
    ) -> Self {
        Self {
            capabilities,
            content,
            user_id,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.content.is_published()
            || self
                .user_id
                .is_some_and(|id| self.content.is_authored_by(id))
            || self
                .capabilities
                .iter()
                .any(|cap| cap.matches("content", "view_drafts"))
    }
}

/// Edit and delete are reserved to the author; no capability overrides it.
pub struct IsContentAuthorSpec<'a> {
    content: &'a Content,
    user_id: UserId,
}

impl<'a> IsContentAuthorSpec<'a> {
    pub fn new(content: &'a Content, user_id: UserId) -> Self {
        Self { content, user_id }
    }

    pub fn is_satisfied(&self) -> bool {
        self.content.is_authored_by(self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentBody, ContentId, ContentSlug, ContentTitle, Publication};
    use chrono::Utc;
    use serde_json::Map;

    fn content(publication: Publication) -> Content {
        Content {
            id: ContentId(1),
            title: ContentTitle::new("Draft").unwrap(),
            slug: ContentSlug::new("draft").unwrap(),
            body: ContentBody::new("Some draft body text").unwrap(),
            author_id: UserId(7),
            categories: Vec::new(),
            publication,
            view_count: 0,
            featured_image: None,
            metadata: Map::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn drafts_are_hidden_from_anonymous_readers() {
        let none = HashSet::new();
        let draft = content(Publication::Draft);
        assert!(!CanViewContentSpec::new(&none, &draft, None).is_satisfied());
        assert!(!CanViewContentSpec::new(&none, &draft, Some(UserId(8))).is_satisfied());
    }

    #[test]
    fn drafts_are_visible_to_author_and_reviewers() {
        let none = HashSet::new();
        let reviewers = HashSet::from([Capability::new("content", "view_drafts")]);
        let draft = content(Publication::Draft);
        assert!(CanViewContentSpec::new(&none, &draft, Some(UserId(7))).is_satisfied());
        assert!(CanViewContentSpec::new(&reviewers, &draft, None).is_satisfied());
    }

    #[test]
    fn published_content_is_public() {
        let none = HashSet::new();
        let published = content(Publication::Published(Utc::now()));
        assert!(CanViewContentSpec::new(&none, &published, None).is_satisfied());
    }

    #[test]
    fn only_the_author_matches() {
        let item = content(Publication::Draft);
        assert!(IsContentAuthorSpec::new(&item, UserId(7)).is_satisfied());
        assert!(!IsContentAuthorSpec::new(&item, UserId(1)).is_satisfied());
    }
}
