//! Report configuration

use crate::render::TreeGlyphs;
use crate::walk::WalkerConfig;

/// Report file written into the traversal root.
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// First line of every report.
pub const REPORT_HEADER: &str = "文件路径结构图:";

/// Lock file left out of the content sections.
pub const LOCK_FILE: &str = "package-lock.json";

/// Configuration for a report run.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// File name of the report, created in the root
    pub output_name: String,
    pub header: String,
    /// Walker settings shared by the tree and the content traversal
    pub walker: WalkerConfig,
    /// Files listed in the tree but left out of the content sections
    pub content_excluded_files: Vec<String>,
    /// File name of the running program, left out of the content sections
    pub self_name: Option<String>,
    pub glyphs: TreeGlyphs,
}

impl ReportConfig {
    /// Names excluded from the content traversal only.
    pub fn content_only_exclusions(&self) -> Vec<String> {
        let mut names = self.content_excluded_files.clone();
        if let Some(name) = &self.self_name {
            names.push(name.clone());
        }
        names
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_FILE.to_string(),
            header: REPORT_HEADER.to_string(),
            walker: WalkerConfig::default(),
            content_excluded_files: vec![LOCK_FILE.to_string()],
            self_name: None,
            glyphs: TreeGlyphs::default(),
        }
    }
}
