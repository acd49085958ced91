// tests/support/mocks/store.rs
//! One in-memory database implementing every repository trait. It mirrors
//! the Postgres adapters closely enough for the services to behave the
//! same: optimistic locking on update, cascades on delete and the same
//! error kinds for constraint violations.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use folio_cms::domain::{
    category::{
        Category, CategoryAssignment, CategoryId, CategoryName, CategoryRepository, CategorySlug,
        NewCategory,
    },
    comment::{Comment, CommentId, CommentRepository, NewComment},
    content::{
        AuthorStats, Content, ContentFilter, ContentId, ContentReadRepository, ContentSlug,
        ContentUpdate, ContentWriteRepository, NewContent, PageRequest, Publication,
        RemovedContent,
    },
    document::{Document, DocumentId, DocumentRepository},
    errors::{DomainError, DomainResult},
    user::{
        BuiltinRole, NewRole, NewUser, PasswordHash, Role, RoleId, RoleName, RoleRepository,
        User, UserId, UserRepository, UserUpdate, Username,
    },
};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::time::fixed_now;

pub const ADMIN_ID: i64 = 1;
pub const AUTHOR_ID: i64 = 2;
pub const VIEWER_ID: i64 = 3;
pub const OTHER_AUTHOR_ID: i64 = 4;

#[derive(Debug, Clone)]
struct UserRecord {
    id: UserId,
    username: Username,
    password_hash: PasswordHash,
    role_id: Option<RoleId>,
    bio: String,
    avatar: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

#[derive(Default)]
struct State {
    last_ids: HashMap<&'static str, i64>,
    roles: Vec<Role>,
    users: Vec<UserRecord>,
    categories: Vec<Category>,
    /// Stored without categories; `links` is the source of truth.
    contents: Vec<Content>,
    links: Vec<(ContentId, CategoryId)>,
    comments: Vec<Comment>,
    documents: Vec<Document>,
    /// Next content insert finds its slug already taken by a concurrent writer.
    slug_race: bool,
}

impl State {
    fn next_id(&mut self, table: &'static str) -> i64 {
        let id = self.last_ids.entry(table).or_insert(0);
        *id += 1;
        *id
    }

    fn to_user(&self, record: &UserRecord) -> User {
        let role = record
            .role_id
            .and_then(|id| self.roles.iter().find(|role| role.id == id).cloned());
        User {
            id: record.id,
            username: record.username.clone(),
            password_hash: record.password_hash.clone(),
            role,
            bio: record.bio.clone(),
            avatar: record.avatar.clone(),
            is_active: record.is_active,
            created_at: record.created_at,
        }
    }

    fn hydrate(&self, content: &Content) -> Content {
        let mut categories: Vec<Category> = self
            .links
            .iter()
            .filter(|(content_id, _)| *content_id == content.id)
            .filter_map(|(_, category_id)| {
                self.categories.iter().find(|c| c.id == *category_id).cloned()
            })
            .collect();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        Content {
            categories,
            ..content.clone()
        }
    }

    fn content_mut(&mut self, id: ContentId) -> DomainResult<&mut Content> {
        self.contents
            .iter_mut()
            .find(|content| content.id == id)
            .ok_or_else(|| DomainError::NotFound("content not found".into()))
    }

    fn ensure_categories_exist(&self, ids: &[CategoryId]) -> DomainResult<()> {
        if ids
            .iter()
            .all(|id| self.categories.iter().any(|category| category.id == *id))
        {
            Ok(())
        } else {
            Err(DomainError::NotFound("category not found".into()))
        }
    }

    fn insert_category(&mut self, category: NewCategory) -> DomainResult<Category> {
        if self.categories.iter().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("category already exists".into()));
        }
        if self.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Validation(
                "category slug already in use; please submit again".into(),
            ));
        }
        let id = CategoryId(self.next_id("categories"));
        let stored = Category {
            id,
            name: category.name,
            slug: category.slug,
            description: category.description,
        };
        self.categories.push(stored.clone());
        Ok(stored)
    }

    /// Reuses a category created concurrently under the same name.
    fn get_or_create_category(&mut self, category: NewCategory) -> DomainResult<CategoryId> {
        if let Some(existing) = self.categories.iter().find(|c| c.name == category.name) {
            return Ok(existing.id);
        }
        self.insert_category(category).map(|c| c.id)
    }

    fn link(&mut self, content_id: ContentId, assignment: CategoryAssignment) -> DomainResult<()> {
        let mut ids = assignment.existing;
        if let Some(create) = assignment.create {
            ids.push(self.get_or_create_category(create)?);
        }
        for id in ids {
            if !self.links.contains(&(content_id, id)) {
                self.links.push((content_id, id));
            }
        }
        Ok(())
    }

    fn matches(&self, content: &Content, filter: &ContentFilter) -> bool {
        if filter.published_only && !content.is_published() {
            return false;
        }
        if let Some(author) = filter.author {
            if content.author_id != author {
                return false;
            }
        }
        if let Some(search) = &filter.search {
            let needle = search.to_lowercase();
            if !content.title.as_str().to_lowercase().contains(&needle)
                && !content.body.as_str().to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(slug) = &filter.category {
            let linked = self.links.iter().any(|(content_id, category_id)| {
                *content_id == content.id
                    && self
                        .categories
                        .iter()
                        .any(|c| c.id == *category_id && c.slug == *slug)
            });
            if !linked {
                return false;
            }
        }
        true
    }
}

pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self {
            state: Mutex::new(State::default()),
        }
    }

    /// Built-in roles plus four users: an admin, two authors and a viewer.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut state = store.lock();
            for builtin in BuiltinRole::ALL {
                let id = RoleId(state.next_id("roles"));
                state.roles.push(Role {
                    id,
                    name: RoleName::new(builtin.name()).unwrap(),
                    description: builtin.description().to_string(),
                });
            }
            let role_for = |state: &State, builtin: BuiltinRole| {
                state
                    .roles
                    .iter()
                    .find(|role| role.name.as_str() == builtin.name())
                    .map(|role| role.id)
            };
            let seeds = [
                ("admin", BuiltinRole::Admin),
                ("author", BuiltinRole::Author),
                ("viewer", BuiltinRole::Viewer),
                ("other", BuiltinRole::Author),
            ];
            for (username, builtin) in seeds {
                let id = UserId(state.next_id("users"));
                let role_id = role_for(&*state, builtin);
                state.users.push(UserRecord {
                    id,
                    username: Username::new(username).unwrap(),
                    password_hash: PasswordHash::new("hashed:password123").unwrap(),
                    role_id,
                    bio: String::new(),
                    avatar: None,
                    is_active: true,
                    created_at: fixed_now(),
                });
            }
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Makes the next content insert lose a slug race: another row with
    /// the same slug is committed between the slug check and the insert.
    pub fn race_next_content_slug(&self) {
        self.lock().slug_race = true;
    }

    /// Inserts a category directly, bypassing the services.
    pub fn add_category(&self, name: &str, slug: &str) -> Category {
        self.lock()
            .insert_category(NewCategory {
                name: CategoryName::new(name).unwrap(),
                slug: CategorySlug::new(slug).unwrap(),
                description: String::new(),
            })
            .unwrap()
    }

    pub fn content_by_slug(&self, slug: &str) -> Option<Content> {
        let state = self.lock();
        state
            .contents
            .iter()
            .find(|content| content.slug.as_str() == slug)
            .map(|content| state.hydrate(content))
    }

    pub fn content_count(&self) -> usize {
        self.lock().contents.len()
    }

    pub fn comment_count(&self) -> usize {
        self.lock().comments.len()
    }

    pub fn document_count(&self) -> usize {
        self.lock().documents.len()
    }

    pub fn category_count(&self) -> usize {
        self.lock().categories.len()
    }

    pub fn user_role(&self, id: i64) -> Option<String> {
        let state = self.lock();
        state
            .users
            .iter()
            .find(|user| user.id.0 == id)
            .and_then(|user| state.to_user(user).role_name().map(str::to_string))
    }
}

#[async_trait]
impl ContentWriteRepository for InMemoryStore {
    async fn create(&self, content: NewContent) -> DomainResult<Content> {
        let mut state = self.lock();
        if std::mem::take(&mut state.slug_race) {
            let id = ContentId(state.next_id("contents"));
            state.contents.push(Content {
                id,
                title: content.title.clone(),
                slug: content.slug.clone(),
                body: content.body.clone(),
                author_id: UserId(OTHER_AUTHOR_ID),
                categories: Vec::new(),
                publication: Publication::Draft,
                view_count: 0,
                featured_image: None,
                metadata: content.metadata.clone(),
                created_at: content.created_at,
                updated_at: content.created_at,
            });
        }
        if state.contents.iter().any(|c| c.slug == content.slug) {
            return Err(DomainError::Validation(
                "another item claimed this slug at the same time; please submit again".into(),
            ));
        }
        if !state.users.iter().any(|u| u.id == content.author_id) {
            return Err(DomainError::NotFound("author not found".into()));
        }
        state.ensure_categories_exist(&content.categories.existing)?;

        let id = ContentId(state.next_id("contents"));
        let stored = Content {
            id,
            title: content.title,
            slug: content.slug,
            body: content.body,
            author_id: content.author_id,
            categories: Vec::new(),
            publication: content.publication,
            view_count: 0,
            featured_image: content.featured_image,
            metadata: content.metadata,
            created_at: content.created_at,
            updated_at: content.created_at,
        };
        state.contents.push(stored.clone());
        state.link(id, content.categories)?;

        if let Some(draft) = content.document {
            let document_id = DocumentId(state.next_id("documents"));
            state.documents.push(Document {
                id: document_id,
                title: draft.title,
                content_id: Some(id),
                file: draft.file,
                uploaded_by: draft.uploaded_by,
                uploaded_at: draft.uploaded_at,
            });
        }

        Ok(state.hydrate(&stored))
    }

    async fn update(&self, update: ContentUpdate) -> DomainResult<Content> {
        let mut state = self.lock();
        if let Some(assignment) = &update.categories {
            state.ensure_categories_exist(&assignment.existing)?;
        }

        let content = state.content_mut(update.id)?;
        if content.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "content was modified by another request".into(),
            ));
        }
        if let Some(title) = update.title {
            content.title = title;
        }
        if let Some(body) = update.body {
            content.body = body;
        }
        if let Some(publication) = update.publication {
            content.publication = publication;
        }
        if let Some(featured_image) = update.featured_image {
            content.featured_image = featured_image;
        }
        if let Some(metadata) = update.metadata {
            content.metadata = metadata;
        }
        content.updated_at = update.updated_at;
        let updated = content.clone();

        if let Some(assignment) = update.categories {
            state.links.retain(|(content_id, _)| *content_id != update.id);
            state.link(update.id, assignment)?;
        }

        Ok(state.hydrate(&updated))
    }

    async fn delete(&self, id: ContentId) -> DomainResult<RemovedContent> {
        let mut state = self.lock();
        state.content_mut(id)?;

        let file_keys = state
            .documents
            .iter()
            .filter(|doc| doc.content_id == Some(id))
            .map(|doc| doc.file.key.clone())
            .collect();
        state.documents.retain(|doc| doc.content_id != Some(id));
        state.comments.retain(|comment| comment.content_id != id);
        state.links.retain(|(content_id, _)| *content_id != id);
        state.contents.retain(|content| content.id != id);

        Ok(RemovedContent { file_keys })
    }

    async fn set_publication_bulk(
        &self,
        ids: &[ContentId],
        publish: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut state = self.lock();
        let mut touched = 0;
        for content in state.contents.iter_mut().filter(|c| ids.contains(&c.id)) {
            let changes = if publish {
                !content.is_published()
            } else {
                content.publication != Publication::Draft
            };
            if !changes {
                continue;
            }
            if publish {
                content.publish(now);
            } else {
                content.unpublish(now);
            }
            touched += 1;
        }
        Ok(touched)
    }

    async fn publish_due(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let mut state = self.lock();
        let mut touched = 0;
        for content in state.contents.iter_mut() {
            if let Publication::Scheduled(at) = content.publication {
                if at <= now {
                    content.publication = Publication::Published(at);
                    content.updated_at = now;
                    touched += 1;
                }
            }
        }
        Ok(touched)
    }

    async fn increment_view_count(&self, id: ContentId) -> DomainResult<()> {
        let mut state = self.lock();
        if let Some(content) = state.contents.iter_mut().find(|c| c.id == id) {
            content.view_count += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<Content>> {
        let state = self.lock();
        Ok(state
            .contents
            .iter()
            .find(|c| c.id == id)
            .map(|c| state.hydrate(c)))
    }

    async fn find_by_slug(&self, slug: &ContentSlug) -> DomainResult<Option<Content>> {
        let state = self.lock();
        Ok(state
            .contents
            .iter()
            .find(|c| c.slug == *slug)
            .map(|c| state.hydrate(c)))
    }

    async fn list_page(
        &self,
        filter: &ContentFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Content>, u64)> {
        let state = self.lock();
        let mut matched: Vec<&Content> = state
            .contents
            .iter()
            .filter(|c| state.matches(c, filter))
            .collect();
        // published_at DESC NULLS LAST, created_at DESC, id DESC
        matched.sort_by_key(|c| {
            (
                c.published_at().is_none(),
                Reverse(c.published_at()),
                Reverse(c.created_at),
                Reverse(c.id),
            )
        });
        let total = matched.len() as u64;
        let items = matched
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|c| state.hydrate(c))
            .collect();
        Ok((items, total))
    }

    async fn stats_for_author(&self, author: UserId) -> DomainResult<AuthorStats> {
        let state = self.lock();
        let mut stats = AuthorStats::default();
        for content in state.contents.iter().filter(|c| c.author_id == author) {
            stats.total += 1;
            stats.total_views += content.view_count;
            match content.publication {
                Publication::Published(_) => stats.published += 1,
                Publication::Scheduled(_) => stats.scheduled += 1,
                Publication::Draft => stats.drafts += 1,
            }
        }
        Ok(stats)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.lock().categories.clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()).then(a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &CategoryName) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| c.name == *name)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &CategorySlug) -> DomainResult<Option<Category>> {
        Ok(self
            .lock()
            .categories
            .iter()
            .find(|c| c.slug == *slug)
            .cloned())
    }

    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        self.lock().insert_category(category)
    }

    async fn delete(&self, id: CategoryId) -> DomainResult<()> {
        let mut state = self.lock();
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(DomainError::NotFound("category not found".into()));
        }
        state.links.retain(|(_, category_id)| *category_id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut state = self.lock();
        if !state.contents.iter().any(|c| c.id == comment.content_id) {
            return Err(DomainError::NotFound("content not found".into()));
        }
        let id = CommentId(state.next_id("comments"));
        let stored = Comment {
            id,
            content_id: comment.content_id,
            author_id: comment.author_id,
            body: comment.body,
            is_approved: comment.is_approved,
            created_at: comment.created_at,
            updated_at: comment.created_at,
        };
        state.comments.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_content(
        &self,
        content_id: ContentId,
        approved_only: bool,
    ) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .lock()
            .comments
            .iter()
            .filter(|c| c.content_id == content_id && (c.is_approved || !approved_only))
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn list_pending(&self) -> DomainResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .lock()
            .comments
            .iter()
            .filter(|c| !c.is_approved)
            .cloned()
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }

    async fn set_approval(
        &self,
        ids: &[CommentId],
        approved: bool,
        now: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let mut state = self.lock();
        let mut touched = 0;
        for comment in state
            .comments
            .iter_mut()
            .filter(|c| ids.contains(&c.id) && c.is_approved != approved)
        {
            if approved {
                comment.approve(now);
            } else {
                comment.unapprove(now);
            }
            touched += 1;
        }
        Ok(touched)
    }

    async fn count_pending_for_author(&self, author: UserId) -> DomainResult<u64> {
        let state = self.lock();
        let count = state
            .comments
            .iter()
            .filter(|comment| !comment.is_approved)
            .filter(|comment| {
                state
                    .contents
                    .iter()
                    .any(|c| c.id == comment.content_id && c.author_id == author)
            })
            .count();
        Ok(count as u64)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryStore {
    async fn list_by_content(&self, content_id: ContentId) -> DomainResult<Vec<Document>> {
        let mut documents: Vec<Document> = self
            .lock()
            .documents
            .iter()
            .filter(|d| d.content_id == Some(content_id))
            .cloned()
            .collect();
        documents.sort_by_key(|d| (d.uploaded_at, d.id.0));
        Ok(documents)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.lock().users.len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let id = UserId(state.next_id("users"));
        let record = UserRecord {
            id,
            username: new_user.username,
            password_hash: new_user.password_hash,
            role_id: new_user.role_id,
            bio: String::new(),
            avatar: None,
            is_active: new_user.is_active,
            created_at: new_user.created_at,
        };
        state.users.push(record.clone());
        Ok(state.to_user(&record))
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut state = self.lock();
        if let Some(Some(role_id)) = update.role_id {
            if !state.roles.iter().any(|role| role.id == role_id) {
                return Err(DomainError::NotFound("role not found".into()));
            }
        }
        let record = state
            .users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;
        if let Some(bio) = update.bio {
            record.bio = bio;
        }
        if let Some(avatar) = update.avatar {
            record.avatar = avatar;
        }
        if let Some(role_id) = update.role_id {
            record.role_id = role_id;
        }
        let record = record.clone();
        Ok(state.to_user(&record))
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let state = self.lock();
        Ok(state
            .users
            .iter()
            .find(|u| u.username == *username)
            .map(|u| state.to_user(u)))
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.lock();
        Ok(state
            .users
            .iter()
            .find(|u| u.id == id)
            .map(|u| state.to_user(u)))
    }
}

#[async_trait]
impl RoleRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Role>> {
        let mut roles = self.lock().roles.clone();
        roles.sort_by_key(|role| role.id.0);
        Ok(roles)
    }

    async fn find_by_id(&self, id: RoleId) -> DomainResult<Option<Role>> {
        Ok(self.lock().roles.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_name(&self, name: &RoleName) -> DomainResult<Option<Role>> {
        Ok(self.lock().roles.iter().find(|r| r.name == *name).cloned())
    }

    async fn get_or_create(&self, role: NewRole) -> DomainResult<(Role, bool)> {
        let mut state = self.lock();
        if let Some(existing) = state.roles.iter().find(|r| r.name == role.name) {
            return Ok((existing.clone(), false));
        }
        let id = RoleId(state.next_id("roles"));
        let created = Role {
            id,
            name: role.name,
            description: role.description,
        };
        state.roles.push(created.clone());
        Ok((created, true))
    }

    async fn delete(&self, id: RoleId) -> DomainResult<()> {
        let mut state = self.lock();
        let before = state.roles.len();
        state.roles.retain(|r| r.id != id);
        if state.roles.len() == before {
            return Err(DomainError::NotFound("role not found".into()));
        }
        for user in state.users.iter_mut().filter(|u| u.role_id == Some(id)) {
            user.role_id = None;
        }
        Ok(())
    }
}
