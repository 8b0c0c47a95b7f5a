//! Entries produced by the walker

use std::fs::FileType;
use std::path::{Path, PathBuf};

/// Whether an entry is listed as a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Classify a path from its (non-followed) file type.
    ///
    /// Symlinks are classified by their target; a broken link counts as a file.
    pub fn classify(path: &Path, file_type: Option<FileType>) -> Self {
        match file_type {
            Some(ft) if ft.is_dir() => EntryKind::Dir,
            Some(ft) if ft.is_symlink() => {
                if path.metadata().is_ok_and(|m| m.is_dir()) {
                    EntryKind::Dir
                } else {
                    EntryKind::File
                }
            }
            Some(_) => EntryKind::File,
            None if path.is_dir() => EntryKind::Dir,
            None => EntryKind::File,
        }
    }
}

/// A single visited filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full path, joined onto the traversal root
    pub path: PathBuf,
    /// Path relative to the traversal root
    pub relative: PathBuf,
    /// Depth below the root (immediate children are at depth 1)
    pub depth: usize,
    pub kind: EntryKind,
    /// The entry is a symlink. Symlinked directories are never entered.
    pub is_symlink: bool,
}

impl Entry {
    pub fn new(root: &Path, path: PathBuf, depth: usize, file_type: Option<FileType>) -> Self {
        let relative = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.clone());
        let kind = EntryKind::classify(&path, file_type);
        let is_symlink = file_type.is_some_and(|ft| ft.is_symlink());
        Self {
            path,
            relative,
            depth,
            kind,
            is_symlink,
        }
    }

    /// The final path component, or "." for a bare root.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// Relative path as shown in report section headers.
    pub fn relative_display(&self) -> String {
        self.relative.display().to_string()
    }
}
