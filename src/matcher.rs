//! Classification of scan-relative paths into the recognized file categories.
//!
//! Every function here is a pure function of its input. Paths are expected to
//! be relative to the scan root. On Windows `\` separators are treated like
//! `/`; elsewhere `\` is an ordinary file name character.

use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

const RULES_DIR: &str = ".cursor/rules/";
const RULE_SUFFIX: &str = ".mdc";
const PRIMARY_CONFIG_NAME: &str = "CLAUDE.md";
const SECONDARY_CONFIG_DIR: &str = ".claude/";

/// The kind of a discovered file, derived from its path alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileCategory {
    /// `<any>/.cursor/rules/<name>.mdc`, direct children only.
    RuleFile,
    /// A file named exactly `CLAUDE.md`, anywhere in the tree.
    PrimaryConfig,
    /// A direct child of `.claude/` at the scan root.
    SecondaryConfig,
    Unrecognized,
}

impl FileCategory {
    /// The recognized categories, in classification precedence order.
    pub const RECOGNIZED: [FileCategory; 3] = [
        FileCategory::RuleFile,
        FileCategory::PrimaryConfig,
        FileCategory::SecondaryConfig,
    ];

    pub fn is_recognized(self) -> bool {
        self != FileCategory::Unrecognized
    }

    pub fn label(self) -> &'static str {
        match self {
            FileCategory::RuleFile => "Cursor Rule",
            FileCategory::PrimaryConfig => "Claude Config",
            FileCategory::SecondaryConfig => "Configuration",
            FileCategory::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies `path`. Rule files are tested first, then the primary config
/// name, then the secondary config directory; the first match wins.
pub fn classify(path: &str) -> FileCategory {
    let path = normalize(path);
    if is_rule_file(&path) {
        FileCategory::RuleFile
    } else if is_primary_config(&path) {
        FileCategory::PrimaryConfig
    } else if is_secondary_config(&path) {
        FileCategory::SecondaryConfig
    } else {
        FileCategory::Unrecognized
    }
}

/// The scan inclusion predicate.
pub fn is_recognized(path: &str) -> bool {
    classify(path).is_recognized()
}

#[cfg(windows)]
fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

#[cfg(not(windows))]
fn normalize(path: &str) -> Cow<'_, str> {
    Cow::Borrowed(path)
}

fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn is_rule_file(path: &str) -> bool {
    // The rules directory must be the file's parent, so only the last
    // occurrence of the segment pair can qualify.
    let Some(idx) = path.rfind(RULES_DIR) else {
        return false;
    };
    let on_boundary = idx == 0 || path.as_bytes()[idx - 1] == b'/';
    let name = &path[idx + RULES_DIR.len()..];
    on_boundary && !name.contains('/') && name.ends_with(RULE_SUFFIX)
}

fn is_primary_config(path: &str) -> bool {
    base_name(path) == PRIMARY_CONFIG_NAME
}

fn is_secondary_config(path: &str) -> bool {
    path.strip_prefix(SECONDARY_CONFIG_DIR)
        .is_some_and(|rest| !rest.is_empty() && !rest.contains('/'))
}
