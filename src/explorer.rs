use crate::error::ExplorerError;
use crate::filter::Query;
use crate::matcher;
use crate::options::{BinaryDetection, ExplorerOptions};
use crate::types::FileRecord;
use ignore::WalkBuilder;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
const SNIFF_LEN: usize = 4096;
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";
pub const TOO_LARGE_PLACEHOLDER: &str = "[File too large, content omitted]";
pub const BINARY_PLACEHOLDER: &str = "[Binary file, content omitted]";
struct Walker {
    root: PathBuf,
    follow_links: bool,
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &ExplorerOptions) -> Result<Self, ExplorerError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .git_ignore(options.respect_gitignore)
            .git_global(options.respect_gitignore)
            .git_exclude(options.respect_gitignore)
            .parents(options.respect_gitignore)
            .hidden(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .ignore(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !options.ignore_patterns.is_empty() {
            let mut glob_builder = globset::GlobSetBuilder::new();
            for pattern in &options.ignore_patterns {
                let glob = globset::Glob::new(pattern).map_err(|e| {
                    ExplorerError::Pattern(format!("'{}': {}", pattern, e))
                })?;
                glob_builder.add(glob);
            }
            let matcher = glob_builder
                .build()
                .map_err(|e| ExplorerError::Pattern(e.to_string()))?;
            let base = root.to_path_buf();
            builder.filter_entry(move |entry| {
                let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
                if relative.as_os_str().is_empty() {
                    return true;
                }
                !(matcher.is_match(relative) || matcher.is_match(entry.file_name()))
            });
        }
        Ok(Self {
            root: root.to_path_buf(),
            follow_links: options.follow_links,
            inner: builder.build(),
        })
    }
    /// Yields `(absolute, relative)` pairs for regular files and for links to
    /// regular files. Entries that fail to be visited are skipped.
    fn into_files(self) -> impl Iterator<Item = (PathBuf, String)> {
        let root = self.root;
        let follow_links = self.follow_links;
        self.inner.filter_map(move |result| match result {
            Ok(entry) => {
                if !is_file_entry(&entry, follow_links) {
                    return None;
                }
                let relative = relative_path(&root, entry.path())?;
                Some((entry.into_path(), relative))
            }
            Err(_e) => {
                #[cfg(feature = "logging")]
                tracing::debug!("Skipping entry: {}", _e);
                None
            }
        })
    }
}
/// Unfollowed links are not descended into, but a link whose target is a
/// regular file is collected and read through.
fn is_file_entry(entry: &ignore::DirEntry, follow_links: bool) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() && !follow_links => {
            fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
        }
        _ => false,
    }
}
/// Joins the components below `root` with `/`. Names that are not valid
/// UTF-8 yield `None`, since a lossy rendering could collide with another path.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect();
    let Some(parts) = parts else {
        #[cfg(feature = "logging")]
        tracing::debug!("Skipping non UTF-8 path: {}", path.display());
        return None;
    };
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
/// Reads a matched file as text. Failures become placeholder content so one
/// unreadable file never aborts a scan.
fn read_file_content(
    path: &Path,
    binary_detection: BinaryDetection,
    size_limit: Option<u64>,
) -> String {
    if let Some(limit) = size_limit {
        match fs::metadata(path) {
            Ok(metadata) if metadata.len() > limit => {
                #[cfg(feature = "logging")]
                tracing::debug!(
                    "File too large ({} > {}), skipping content",
                    metadata.len(),
                    limit
                );
                return TOO_LARGE_PLACEHOLDER.to_string();
            }
            Ok(_) => {}
            Err(e) => return read_error(path, &e),
        }
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return read_error(path, &e),
    };
    let head = &bytes[..bytes.len().min(SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => head.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(head).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return BINARY_PLACEHOLDER.to_string();
    }
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
fn read_error(_path: &Path, error: &std::io::Error) -> String {
    #[cfg(feature = "logging")]
    tracing::debug!("Cannot read {}: {}", _path.display(), error);
    format!("{}{}", READ_ERROR_PREFIX, error)
}
#[cfg(not(feature = "parallel"))]
fn read_records(paths: Vec<(PathBuf, String)>, options: &ExplorerOptions) -> Vec<FileRecord> {
    paths
        .into_iter()
        .map(|(path, relative)| {
            let content =
                read_file_content(&path, options.binary_detection, options.file_size_limit);
            FileRecord::new(relative, content)
        })
        .collect()
}
#[cfg(feature = "parallel")]
fn read_records(paths: Vec<(PathBuf, String)>, options: &ExplorerOptions) -> Vec<FileRecord> {
    paths
        .into_par_iter()
        .map(|(path, relative)| {
            let content =
                read_file_content(&path, options.binary_detection, options.file_size_limit);
            FileRecord::new(relative, content)
        })
        .collect()
}
fn resolve_root(options: &ExplorerOptions) -> Result<PathBuf, ExplorerError> {
    let root = match &options.root {
        Some(root) => root.clone(),
        None => std::env::current_dir().map_err(|e| ExplorerError::scan_root(".", e))?,
    };
    fs::read_dir(&root).map_err(|e| ExplorerError::scan_root(&root, e))?;
    Ok(root)
}
fn scan(options: &ExplorerOptions) -> Result<(PathBuf, Vec<FileRecord>), ExplorerError> {
    let root = resolve_root(options)?;
    #[cfg(feature = "logging")]
    tracing::debug!("Scanning {}", root.display());
    let walker = Walker::new(&root, options)?;
    let matched: Vec<(PathBuf, String)> = walker
        .into_files()
        .filter(|(_, relative)| matcher::is_recognized(relative))
        .collect();
    let files = read_records(matched, options);
    #[cfg(feature = "logging")]
    tracing::info!("Discovered {} files under {}", files.len(), root.display());
    Ok((root, files))
}
/// Owns the snapshot of discovered files and answers queries against it.
///
/// The snapshot only changes through [`Explorer::load_files`], which replaces
/// it wholesale after a successful scan. Readers borrow it, so they never see
/// a half-built listing.
#[derive(Debug, Default)]
pub struct Explorer {
    options: ExplorerOptions,
    root: Option<PathBuf>,
    files: Vec<FileRecord>,
}
impl Explorer {
    pub fn new(options: ExplorerOptions) -> Self {
        Self {
            options,
            root: None,
            files: Vec::new(),
        }
    }
    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }
    /// The root of the last successful scan.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }
    /// Scans the root and replaces the snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the root cannot be resolved or opened, or when an ignore
    /// pattern is invalid. The previous snapshot is kept in that case.
    pub fn load_files(&mut self) -> Result<(), ExplorerError> {
        let (root, files) = scan(&self.options)?;
        self.root = Some(root);
        self.files = files;
        Ok(())
    }
    /// The current snapshot in scan order; empty before the first load.
    pub fn all_files(&self) -> &[FileRecord] {
        &self.files
    }
    /// Records whose path or content contains `query`, ignoring case, in scan
    /// order. An empty query returns the whole snapshot.
    pub fn filter_files(&self, query: &str) -> Vec<&FileRecord> {
        self.filter_query(&Query::new(query))
    }
    #[cfg(not(feature = "parallel"))]
    pub fn filter_query(&self, query: &Query) -> Vec<&FileRecord> {
        if query.is_empty() {
            return self.files.iter().collect();
        }
        self.files.iter().filter(|r| query.matches(r)).collect()
    }
    #[cfg(feature = "parallel")]
    pub fn filter_query(&self, query: &Query) -> Vec<&FileRecord> {
        if query.is_empty() {
            return self.files.iter().collect();
        }
        self.files.par_iter().filter(|r| query.matches(r)).collect()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/work");
        let path = root.join(".cursor").join("rules").join("a.mdc");
        assert_eq!(
            relative_path(root, &path).as_deref(),
            Some(".cursor/rules/a.mdc")
        );
        assert_eq!(relative_path(root, root), None);
    }
    #[cfg(unix)]
    #[test]
    fn relative_paths_reject_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;
        let root = Path::new("/work");
        let path = root.join(".claude").join(OsStr::from_bytes(b"bad\xff.md"));
        assert_eq!(relative_path(root, &path), None);
    }
    #[test]
    fn missing_file_gets_error_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("CLAUDE.md");
        for limit in [None, Some(10)] {
            let content = read_file_content(&missing, BinaryDetection::None, limit);
            assert!(content.starts_with(READ_ERROR_PREFIX));
            assert!(content.len() > READ_ERROR_PREFIX.len());
        }
    }
    #[cfg(unix)]
    #[test]
    fn directory_read_gets_error_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let content = read_file_content(dir.path(), BinaryDetection::None, None);
        assert!(content.starts_with(READ_ERROR_PREFIX));
        let record = FileRecord::new(".claude/settings.json", content);
        assert!(Query::new("settings").matches(&record));
        assert!(Query::new("error reading").matches(&record));
    }
    #[test]
    fn empty_explorer_has_no_files() {
        let explorer = Explorer::default();
        assert!(explorer.all_files().is_empty());
        assert!(explorer.filter_files("anything").is_empty());
        assert!(explorer.root().is_none());
    }
}
