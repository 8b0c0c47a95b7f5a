//! treecat - dump a directory as a tree plus file contents, or flatten it

pub mod console;
pub mod error;
pub mod flatten;
pub mod render;
pub mod report;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use console::{ColorMode, Console};
pub use error::{Result, TreecatError};
pub use flatten::{Collision, FlattenConfig, FlattenSummary, Flattener, flattened_name};
pub use render::{TreeGlyphs, TreeNode, TreeRenderer};
pub use report::{
    ReadOutcome, ReportConfig, ReportSummary, ReportWriter, SkipReason, SkippedFile, read_text,
    split_sections,
};
pub use walk::{DirWalker, Entry, EntryKind, ExclusionFilter, WalkerConfig};
