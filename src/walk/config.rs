//! Configuration for the directory walker

use std::path::PathBuf;

/// Dependency folder skipped by every traversal.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Configuration for walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Skip entries whose name starts with `.`
    pub skip_hidden: bool,
    /// Names excluded for files and directories alike. Entries containing
    /// `*`, `?` or `[` are matched as glob patterns.
    pub excluded_names: Vec<String>,
    /// Names excluded only when the entry is a file
    pub excluded_file_names: Vec<String>,
    /// Exact paths excluded regardless of their name
    pub excluded_paths: Vec<PathBuf>,
    /// Visit siblings in file name order instead of listing order
    pub sort: bool,
}

impl WalkerConfig {
    pub fn with_excluded_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_names.push(name.into());
        self
    }

    pub fn with_excluded_file_name(mut self, name: impl Into<String>) -> Self {
        self.excluded_file_names.push(name.into());
        self
    }

    pub fn with_excluded_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.excluded_paths.push(path.into());
        self
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            skip_hidden: true,
            excluded_names: vec![DEPENDENCY_DIR.to_string()],
            excluded_file_names: Vec::new(),
            excluded_paths: Vec::new(),
            sort: true,
        }
    }
}
