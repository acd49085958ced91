use super::ContentCommandService;
use crate::{
    application::{
        capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationResult, FormErrors},
    },
    domain::{
        content::Publication,
        errors::{DomainError, DomainResult},
    },
};
use chrono::{DateTime, NaiveDateTime, Utc};

/// Accepts RFC 3339 or the `YYYY-MM-DDTHH:MM[:SS]` form produced by
/// `datetime-local` inputs, read as UTC.
pub fn parse_publish_at(raw: &str) -> DomainResult<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::validation("enter a valid date and time"))
}

impl ContentCommandService {
    /// Works out the publication state a form submission asks for,
    /// recording field errors for unparseable or impossible requests.
    /// With neither `publish` nor `publish_at` given the state is kept.
    pub(super) fn requested_publication(
        &self,
        current: Publication,
        publish: Option<bool>,
        publish_at: Option<&str>,
        errors: &mut FormErrors,
    ) -> Option<Publication> {
        let now = self.clock.now();
        if publish == Some(true) {
            return Some(current.publish(now));
        }

        let Some(raw) = publish_at.filter(|raw| !raw.trim().is_empty()) else {
            return Some(match publish {
                Some(false) => current.unpublish(),
                _ => current,
            });
        };

        let at = errors.check("publish_at", parse_publish_at(raw))?;
        let scheduled = errors.check("publish_at", current.schedule(at))?;
        if scheduled.is_due(now) {
            Some(scheduled.publish(now))
        } else {
            Some(scheduled)
        }
    }

    /// Changing the publication state needs `content:publish`.
    pub(super) fn ensure_can_change_publication(
        &self,
        actor: &AuthenticatedUser,
        current: Publication,
        requested: Publication,
    ) -> ApplicationResult<()> {
        if current == requested {
            return Ok(());
        }
        ensure_capability(actor, "content", "publish")
    }
}

#[cfg(test)]
mod tests {
    use super::parse_publish_at;
    use chrono::{TimeZone, Utc};

    #[test]
    fn accepts_rfc3339_with_offset() {
        let parsed = parse_publish_at("2030-01-01T10:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2030, 1, 1, 8, 0, 0).unwrap());
    }

    #[test]
    fn accepts_datetime_local_inputs() {
        let parsed = parse_publish_at("2030-01-01T10:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_publish_at("next tuesday").is_err());
    }
}
