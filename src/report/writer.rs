//! ReportWriter - renders the tree and concatenates file contents

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TreecatError};
use crate::render::{TreeNode, TreeRenderer};
use crate::walk::DirWalker;

use super::config::ReportConfig;
use super::format::{SECTION_SEPARATOR, section_marker};
use super::read::{ReadOutcome, read_text};

/// Why a file's content section was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Encoding,
    Io,
}

/// A file listed in the tree whose content could not be included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: SkipReason,
    pub detail: String,
}

/// Outcome of a report run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub output: PathBuf,
    pub tree_lines: usize,
    /// Directories and files shown in the tree
    pub directories: usize,
    pub files: usize,
    pub files_written: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Writes the tree-and-contents report for a root directory.
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.config.output_name)
    }

    /// Walker for the tree listing. The report file itself is never listed.
    fn tree_walker(&self, root: &Path) -> Result<DirWalker> {
        let config = self
            .config
            .walker
            .clone()
            .with_excluded_path(self.output_path(root));
        DirWalker::new(config)
    }

    /// Walker for the content sections: the tree rules plus content-only names.
    fn content_walker(&self, root: &Path) -> Result<DirWalker> {
        let mut config = self
            .config
            .walker
            .clone()
            .with_excluded_path(self.output_path(root));
        config
            .excluded_file_names
            .extend(self.config.content_only_exclusions());
        DirWalker::new(config)
    }

    /// Build the tree shown at the top of the report.
    pub fn build_tree(&self, root: &Path) -> Result<TreeNode> {
        let name = root
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string());
        TreeNode::from_entries(name, self.tree_walker(root)?.walk(root)?)
    }

    pub fn render_tree(&self, root: &Path) -> Result<String> {
        let tree = self.build_tree(root)?;
        Ok(TreeRenderer::new(self.config.glyphs.clone()).render_to_string(&tree))
    }

    /// Write the report file, overwriting any previous one.
    ///
    /// `on_skip` is called for every file whose content is left out.
    pub fn write<F>(&self, root: &Path, on_skip: F) -> Result<ReportSummary>
    where
        F: FnMut(&SkippedFile),
    {
        if !root.is_dir() {
            return Err(TreecatError::RootNotFound(root.to_path_buf()));
        }

        let output = self.output_path(root);
        let write_err = |source| TreecatError::WriteReport {
            path: output.clone(),
            source,
        };

        let file = File::create(&output).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        let summary = match self.write_to(root, &mut out, on_skip) {
            Err(TreecatError::Io(source)) => return Err(write_err(source)),
            other => other?,
        };
        out.flush().map_err(write_err)?;

        tracing::info!(
            output = %output.display(),
            files = summary.files_written,
            skipped = summary.skipped.len(),
            "report written"
        );
        Ok(summary)
    }

    /// Write the report into any writer.
    pub fn write_to<W, F>(&self, root: &Path, out: &mut W, mut on_skip: F) -> Result<ReportSummary>
    where
        W: Write,
        F: FnMut(&SkippedFile),
    {
        writeln!(out, "{}", self.config.header)?;
        let tree = self.build_tree(root)?;
        let tree_lines = TreeRenderer::new(self.config.glyphs.clone()).render(&tree, out)?;
        let (directories, files) = tree.counts();
        out.write_all(SECTION_SEPARATOR.as_bytes())?;

        let mut files_written = 0;
        let mut skipped = Vec::new();

        for entry in self.content_walker(root)?.walk(root)? {
            let entry = entry?;
            if !entry.is_file() {
                continue;
            }
            let relative = entry.relative_display();

            let skip = match read_text(&entry.path) {
                ReadOutcome::Text(content) => {
                    out.write_all(section_marker(&relative).as_bytes())?;
                    out.write_all(content.as_bytes())?;
                    out.write_all(SECTION_SEPARATOR.as_bytes())?;
                    files_written += 1;
                    tracing::debug!(path = %relative, "section written");
                    continue;
                }
                ReadOutcome::Decode(e) => SkippedFile {
                    path: relative,
                    reason: SkipReason::Encoding,
                    detail: e.to_string(),
                },
                ReadOutcome::Io(e) => SkippedFile {
                    path: relative,
                    reason: SkipReason::Io,
                    detail: e.to_string(),
                },
            };

            tracing::debug!(path = %skip.path, detail = %skip.detail, "section skipped");
            on_skip(&skip);
            skipped.push(skip);
        }

        Ok(ReportSummary {
            output: self.output_path(root),
            tree_lines,
            directories,
            files,
            files_written,
            skipped,
        })
    }
}
