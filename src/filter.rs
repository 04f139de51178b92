use crate::types::FileRecord;

/// A normalized, case-insensitive substring query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    /// An empty query matches every record.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// True when the query occurs in the record's path or content, ignoring case.
    pub fn matches(&self, record: &FileRecord) -> bool {
        self.is_empty()
            || record.path_key().contains(&self.needle)
            || record.content_key().contains(&self.needle)
    }
}
