//! Metadata summaries for the details and statistics panels.

use crate::format::{content_preview, format_file_size};
use crate::matcher::FileCategory;
use crate::types::FileRecord;
use serde::Serialize;
use std::fmt;

const PREVIEW_LINES: usize = 5;
const PREVIEW_LINE_LEN: usize = 50;

/// Display-ready metadata for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDetails {
    pub name: String,
    pub path: String,
    pub category: FileCategory,
    pub size: String,
    pub lines: usize,
    pub preview: String,
}

impl FileDetails {
    pub fn from_record(record: &FileRecord) -> Self {
        Self {
            name: record.file_name().to_string(),
            path: record.path().to_string(),
            category: record.category(),
            size: format_file_size(record.size()),
            lines: record.line_count(),
            preview: content_preview(record.content(), PREVIEW_LINES, PREVIEW_LINE_LEN),
        }
    }
}

impl fmt::Display for FileDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f)?;
        writeln!(f, "Path:  {}", self.path)?;
        writeln!(f, "Type:  {}", self.category)?;
        writeln!(f, "Size:  {}", self.size)?;
        writeln!(f, "Lines: {}", self.lines)?;
        writeln!(f)?;
        writeln!(f, "Content Preview:")?;
        write!(f, "{}", self.preview)
    }
}

/// Counts over the full snapshot and the current filtered view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub filtered: usize,
    pub rule_files: usize,
    pub primary_configs: usize,
    pub secondary_configs: usize,
}

impl Stats {
    /// Per-category counts are taken over `all`, not over `filtered`.
    pub fn collect<'a>(
        all: &[FileRecord],
        filtered: impl IntoIterator<Item = &'a FileRecord>,
    ) -> Self {
        let mut stats = Stats {
            total: all.len(),
            filtered: filtered.into_iter().count(),
            ..Default::default()
        };
        for record in all {
            match record.category() {
                FileCategory::RuleFile => stats.rule_files += 1,
                FileCategory::PrimaryConfig => stats.primary_configs += 1,
                FileCategory::SecondaryConfig => stats.secondary_configs += 1,
                FileCategory::Unrecognized => {}
            }
        }
        stats
    }

    pub fn count(&self, category: FileCategory) -> usize {
        match category {
            FileCategory::RuleFile => self.rule_files,
            FileCategory::PrimaryConfig => self.primary_configs,
            FileCategory::SecondaryConfig => self.secondary_configs,
            FileCategory::Unrecognized => 0,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Files: {}", self.total)?;
        writeln!(f, "Filtered:    {}", self.filtered)?;
        writeln!(f)?;
        write!(f, "By Type:")?;
        for category in FileCategory::RECOGNIZED {
            write!(f, "\n  {}: {}", category, self.count(category))?;
        }
        Ok(())
    }
}
