//! Browsing state driven by typed events: the current query, the filtered
//! view it produces and the selected entry of that view.

use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::types::FileRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search text changed; the first result becomes selected.
    SearchChanged(String),
    SelectNext,
    SelectPrevious,
    /// Select an index of the current filtered view. Out-of-range indices
    /// are ignored.
    Select(usize),
    /// Rescan and re-apply the current query.
    Refresh,
}

#[derive(Debug)]
pub struct Session {
    explorer: Explorer,
    query: String,
    selected: Option<usize>,
    status: Option<String>,
}

impl Session {
    /// Wraps an explorer, selecting the first record of its current snapshot.
    pub fn new(explorer: Explorer) -> Self {
        let mut session = Self {
            explorer,
            query: String::new(),
            selected: None,
            status: None,
        };
        session.select_first();
        session
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered view for the current query, in scan order.
    pub fn visible(&self) -> Vec<&FileRecord> {
        self.explorer.filter_files(&self.query)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&FileRecord> {
        let index = self.selected?;
        self.visible().get(index).copied()
    }

    /// The message left by the last failed refresh, cleared by the next
    /// successful one.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one event.
    ///
    /// # Errors
    ///
    /// Only [`Event::Refresh`] can fail; the previous listing and selection
    /// are kept and the error text is stored as the status message.
    pub fn handle(&mut self, event: Event) -> Result<(), ExplorerError> {
        match event {
            Event::SearchChanged(query) => {
                self.query = query;
                self.select_first();
            }
            Event::SelectNext => {
                let len = self.visible().len();
                if let Some(index) = self.selected {
                    if index + 1 < len {
                        self.selected = Some(index + 1);
                    }
                }
            }
            Event::SelectPrevious => {
                if let Some(index) = self.selected {
                    self.selected = Some(index.saturating_sub(1));
                }
            }
            Event::Select(index) => {
                if index < self.visible().len() {
                    self.selected = Some(index);
                }
            }
            Event::Refresh => {
                if let Err(e) = self.explorer.load_files() {
                    self.status = Some(format!("Refresh failed: {}", e));
                    return Err(e);
                }
                self.status = None;
                self.select_first();
            }
        }
        Ok(())
    }

    /// One-line summary: visible and total counts plus the selected file.
    pub fn status_line(&self) -> String {
        let current = self.selected().map(|r| r.file_name()).unwrap_or("None");
        let mut line = format!(
            "Files: {}/{} | Current: {}",
            self.visible().len(),
            self.explorer.all_files().len(),
            current
        );
        if let Some(status) = &self.status {
            line.push_str(" | ");
            line.push_str(status);
        }
        line
    }

    fn select_first(&mut self) {
        self.selected = if self.visible().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}
