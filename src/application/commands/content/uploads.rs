use super::ContentCommandService;
use crate::{
    application::{
        error::{ApplicationResult, FormErrors},
        ports::storage::FileUpload,
    },
    domain::document::StoredFile,
};
use serde_json::{Map, Value};

impl ContentCommandService {
    /// Size check for an optional upload; records a field error on failure.
    pub(super) fn check_upload(
        &self,
        field: &str,
        upload: Option<&FileUpload>,
        errors: &mut FormErrors,
    ) {
        if let Some(upload) = upload {
            errors.check(field, self.settings.upload_limit.check(upload.size()));
        }
    }

    /// Stores every upload or none of them.
    pub(super) async fn store_uploads(
        &self,
        uploads: &[Option<&FileUpload>],
    ) -> ApplicationResult<Vec<Option<StoredFile>>> {
        let mut stored = Vec::with_capacity(uploads.len());
        for upload in uploads {
            let Some(upload) = upload else {
                stored.push(None);
                continue;
            };
            match self.storage.store(upload).await {
                Ok(file) => stored.push(Some(file)),
                Err(err) => {
                    let keys: Vec<String> = stored.into_iter().flatten().map(|f| f.key).collect();
                    self.discard_files(&keys).await;
                    return Err(err);
                }
            }
        }
        Ok(stored)
    }

    /// Best-effort removal; failures are logged and swallowed.
    pub(super) async fn discard_files(&self, keys: &[String]) {
        for key in keys {
            if let Err(err) = self.storage.remove(key).await {
                tracing::warn!(key = %key, error = %err, "failed to remove stored file");
            }
        }
    }
}

/// Empty input means an empty object; anything else must be a JSON object.
pub(super) fn parse_metadata(raw: Option<&str>) -> Result<Map<String, Value>, String> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Map::new());
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("metadata must be a JSON object".to_string()),
        Err(err) => Err(format!("metadata is not valid JSON: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_metadata;

    #[test]
    fn blank_metadata_is_an_empty_object() {
        assert!(parse_metadata(None).unwrap().is_empty());
        assert!(parse_metadata(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn metadata_must_be_an_object() {
        assert!(parse_metadata(Some("[1, 2]")).is_err());
        assert!(parse_metadata(Some("{not json")).is_err());
        let parsed = parse_metadata(Some(r#"{"lang": "en"}"#)).unwrap();
        assert_eq!(parsed["lang"], "en");
    }
}
