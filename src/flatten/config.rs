//! Flattener configuration

use crate::walk::WalkerConfig;

/// Destination folder created in the traversal root.
pub const DEFAULT_DEST_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Name of the destination folder directly below the root
    pub dest_dir_name: String,
    pub walker: WalkerConfig,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            dest_dir_name: DEFAULT_DEST_DIR.to_string(),
            walker: WalkerConfig::default(),
        }
    }
}
