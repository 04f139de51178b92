use crate::format::count_lines;
use crate::matcher::{self, FileCategory};
use serde::{Serialize, Serializer};
use serde::ser::SerializeStruct;
use std::hash::{Hash, Hasher};

/// One discovered file: its scan-relative path and its text content.
///
/// Records are immutable. Two records are the same file when their paths are
/// equal, regardless of content.
#[derive(Debug, Clone)]
pub struct FileRecord {
    path: String,
    content: String,
    path_key: String,
    content_key: String,
}

impl FileRecord {
    /// Creates a record. On Windows `path` has `\` separators rewritten to
    /// `/`; elsewhere it is kept as given.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path: String = path.into();
        #[cfg(windows)]
        let path = path.replace('\\', "/");
        let content = content.into();
        Self {
            path_key: path.to_lowercase(),
            content_key: content.to_lowercase(),
            path,
            content,
        }
    }

    /// The path relative to the scan root, using `/` separators.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The file content, or a placeholder such as `Error reading file: ...`
    /// when the content could not be read.
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn category(&self) -> FileCategory {
        matcher::classify(&self.path)
    }

    /// The last path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Size of the held content in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn line_count(&self) -> usize {
        count_lines(&self.content)
    }

    pub(crate) fn path_key(&self) -> &str {
        &self.path_key
    }

    pub(crate) fn content_key(&self) -> &str {
        &self.content_key
    }
}

impl PartialEq for FileRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for FileRecord {}

impl Hash for FileRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl Serialize for FileRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("FileRecord", 3)?;
        record.serialize_field("path", &self.path)?;
        record.serialize_field("category", &self.category())?;
        record.serialize_field("content", &self.content)?;
        record.end()
    }
}
