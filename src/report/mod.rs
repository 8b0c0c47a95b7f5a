//! Tree-and-contents report
//!
//! Writes a single text file holding a header, the rendered directory tree and
//! one section per readable file:
//!
//! ```text
//! 文件路径结构图:
//! ├── src
//! │   └── main.rs
//! └── README.md
//!
//!
//! ----- README.md -----
//! <contents>
//!
//! ```
//!
//! # Module Structure
//!
//! - `config` - report configuration and fixed labels
//! - `format` - section markers, and splitting a report back into sections
//! - `read` - per-file read outcome (text / decode error / I/O error)
//! - `writer` - `ReportWriter`, which runs both traversals

mod config;
mod format;
mod read;
mod writer;

pub use config::{DEFAULT_OUTPUT_FILE, LOCK_FILE, REPORT_HEADER, ReportConfig};
pub use format::{SECTION_SEPARATOR, Section, section_marker, split_sections};
pub use read::{ReadOutcome, read_text};
pub use writer::{ReportSummary, ReportWriter, SkipReason, SkippedFile};
