/// Endless sequence of slug candidates: `base`, `base-1`, `base-2`, ...
///
/// Callers take candidates until one is not in use. Uniqueness is only
/// guaranteed by the storage constraint; this sequence just picks a likely
/// free value.
///
/// A bounded sequence never yields a candidate longer than `max_len`: the
/// base is cut back to a hyphen boundary to leave room for the suffix.
#[derive(Debug, Clone)]
pub struct SlugCandidates {
    base: String,
    next_suffix: u64,
    max_len: Option<usize>,
}

impl SlugCandidates {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            next_suffix: 0,
            max_len: None,
        }
    }

    pub fn bounded(base: impl Into<String>, max_len: usize) -> Self {
        Self {
            max_len: Some(max_len),
            ..Self::new(base)
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn next_candidate(&mut self) -> String {
        let suffix = if self.next_suffix == 0 {
            String::new()
        } else {
            format!("-{}", self.next_suffix)
        };
        self.next_suffix += 1;

        let base = match self.max_len {
            Some(max_len) => truncate_at_hyphen(&self.base, max_len.saturating_sub(suffix.len())),
            None => self.base.as_str(),
        };
        format!("{base}{suffix}")
    }
}

/// Longest prefix of `slug` within `limit` characters, preferring to end
/// just before a hyphen. Falls back to a hard cut when no hyphen fits.
fn truncate_at_hyphen(slug: &str, limit: usize) -> &str {
    if slug.chars().count() <= limit {
        return slug;
    }
    let hard_cut = slug
        .char_indices()
        .nth(limit)
        .map_or(slug.len(), |(idx, _)| idx);
    let head = &slug[..hard_cut];
    if slug[hard_cut..].starts_with('-') {
        return head.trim_end_matches('-');
    }
    match head.rfind('-') {
        Some(idx) if idx > 0 => head[..idx].trim_end_matches('-'),
        _ => head.trim_end_matches('-'),
    }
}

impl Iterator for SlugCandidates {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_candidate())
    }
}
