//! # Rules Explorer
//!
//! `rules_explorer` discovers the rule and assistant configuration files of a
//! project and answers substring queries over them. Three kinds of file are
//! recognized (see [`classify`]):
//!
//! - Cursor rules: `.cursor/rules/*.mdc`, at any depth, direct children only.
//! - `CLAUDE.md`, anywhere in the tree.
//! - Direct children of `.claude/` at the scan root.
//!
//! An [`Explorer`] holds the snapshot produced by its last successful scan.
//! Filtering is case-insensitive containment against path or content and
//! always returns records in scan order. [`Session`] layers selection and
//! refresh handling on top for interactive front-ends.
//!
//! # Features
//!
//! - `parallel`: Reads file contents and evaluates queries using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use rules_explorer::{Explorer, ExplorerBuilder};
//!
//! let mut explorer = Explorer::new(ExplorerBuilder::new().root(".").build());
//! explorer.load_files().expect("Failed to scan directory");
//!
//! for file in explorer.filter_files("testing") {
//!     println!("{} ({})", file.path(), file.category());
//! }
//! ```

mod details;
mod error;
mod explorer;
mod filter;
pub mod format;
pub mod matcher;
mod options;
pub mod output;
mod session;
mod types;

pub use details::{FileDetails, Stats};
pub use error::ExplorerError;
pub use explorer::{BINARY_PLACEHOLDER, Explorer, READ_ERROR_PREFIX, TOO_LARGE_PLACEHOLDER};
pub use filter::Query;
pub use matcher::{FileCategory, classify};
pub use options::{BinaryDetection, ExplorerBuilder, ExplorerOptions};
pub use session::{Event, Session};
pub use types::FileRecord;
