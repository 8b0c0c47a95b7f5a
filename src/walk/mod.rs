//! Filtered directory traversal
//!
//! `DirWalker` produces a lazy, depth-first, pre-order stream of entries below
//! a root directory. Every entry is checked against an `ExclusionFilter` before
//! it is yielded; excluded directories are never entered.

mod config;
mod entry;
mod filter;
mod walker;

pub use config::{DEPENDENCY_DIR, WalkerConfig};
pub use entry::{Entry, EntryKind};
pub use filter::ExclusionFilter;
pub use walker::{DirWalker, Entries};
