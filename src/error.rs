use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum ExplorerError {
    #[error("Cannot open scan root {path}: {source}")]
    ScanRoot {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ignore pattern: {0}")]
    Pattern(String),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl ExplorerError {
    pub(crate) fn scan_root(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExplorerError::ScanRoot {
            path: path.into(),
            source,
        }
    }
}
