use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerOptions {
    /// Scan root. `None` resolves the process working directory on every load.
    pub root: Option<PathBuf>,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
    pub file_size_limit: Option<u64>,
    pub binary_detection: BinaryDetection,
}
impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            root: None,
            respect_gitignore: false,
            max_depth: None,
            follow_links: false,
            ignore_patterns: Vec::new(),
            file_size_limit: None,
            binary_detection: BinaryDetection::None,
        }
    }
}
#[derive(Debug, Default)]
pub struct ExplorerBuilder {
    options: ExplorerOptions,
}
impl ExplorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.options.root = Some(root.into());
        self
    }
    pub fn current_dir(mut self) -> Self {
        self.options.root = None;
        self
    }
    pub fn respect_gitignore(mut self, yes: bool) -> Self {
        self.options.respect_gitignore = yes;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn file_size_limit(mut self, limit: Option<u64>) -> Self {
        self.options.file_size_limit = limit;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn build(self) -> ExplorerOptions {
        self.options
    }
}
