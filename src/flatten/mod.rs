//! Flatten a directory tree into a single folder
//!
//! Every visited file is copied into `<root>/<dest>/`, renamed by joining its
//! relative path components with `_` (`src/app/main.rs` -> `src_app_main.rs`).
//! Distinct paths can map to the same name; the later copy wins.

mod config;
mod copy;
mod flattener;
mod name;

pub use config::{DEFAULT_DEST_DIR, FlattenConfig};
pub use copy::{copy_preserving_times, is_same_file, same_contents};
pub use flattener::{Collision, FlattenSummary, Flattener};
pub use name::flattened_name;
