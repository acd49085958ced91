use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};

/// Publication state of a content item.
///
/// Stored as the `(is_published, published_at)` column pair:
///
/// | state       | is_published | published_at |
/// |-------------|--------------|--------------|
/// | `Draft`     | false        | null         |
/// | `Scheduled` | false        | timestamp    |
/// | `Published` | true         | timestamp    |
///
/// A published item without a timestamp cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Publication {
    #[default]
    Draft,
    Scheduled(DateTime<Utc>),
    Published(DateTime<Utc>),
}

impl Publication {
    pub fn from_columns(
        is_published: bool,
        published_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        match (is_published, published_at) {
            (false, None) => Ok(Self::Draft),
            (false, Some(at)) => Ok(Self::Scheduled(at)),
            (true, Some(at)) => Ok(Self::Published(at)),
            (true, None) => Err(DomainError::Validation(
                "published content requires a publication date".into(),
            )),
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published(_))
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Draft => None,
            Self::Scheduled(at) | Self::Published(at) => Some(*at),
        }
    }

    /// Keeps an existing timestamp; a draft is stamped with `now`.
    pub fn publish(self, now: DateTime<Utc>) -> Self {
        Self::Published(self.published_at().unwrap_or(now))
    }

    pub fn unpublish(self) -> Self {
        Self::Draft
    }

    pub fn schedule(self, at: DateTime<Utc>) -> DomainResult<Self> {
        match self {
            Self::Published(_) => Err(DomainError::Validation(
                "published content cannot be scheduled; unpublish it first".into(),
            )),
            Self::Draft | Self::Scheduled(_) => Ok(Self::Scheduled(at)),
        }
    }

    /// True for scheduled items whose time has come.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        matches!(self, Self::Scheduled(at) if *at <= now)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled(_) => "scheduled",
            Self::Published(_) => "published",
        }
    }
}
