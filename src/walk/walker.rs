//! DirWalker - lazy pre-order traversal with an exclusion predicate

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::{Walk, WalkBuilder};

use crate::error::{Result, TreecatError};

use super::config::WalkerConfig;
use super::entry::{Entry, EntryKind};
use super::filter::ExclusionFilter;

/// Directory walker. Each call to `walk` re-reads the filesystem.
#[derive(Debug, Clone)]
pub struct DirWalker {
    config: WalkerConfig,
    filter: Arc<ExclusionFilter>,
}

impl DirWalker {
    pub fn new(config: WalkerConfig) -> Result<Self> {
        let filter = ExclusionFilter::from_config(&config)?;
        Ok(Self {
            config,
            filter: Arc::new(filter),
        })
    }

    /// Start a traversal below `root`.
    ///
    /// The root itself is neither yielded nor filtered. Symlinks are yielded
    /// but never followed.
    pub fn walk(&self, root: &Path) -> Result<Entries> {
        if !root.is_dir() {
            return Err(TreecatError::RootNotFound(root.to_path_buf()));
        }

        let filter = Arc::clone(&self.filter);
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |dent| {
                if dent.depth() == 0 {
                    return true;
                }
                let kind = EntryKind::classify(dent.path(), dent.file_type());
                !filter.is_excluded(dent.path(), kind)
            });
        if self.config.sort {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }

        Ok(Entries {
            root: root.to_path_buf(),
            inner: builder.build(),
        })
    }

    /// Walk and collect every entry, stopping at the first error.
    pub fn collect(&self, root: &Path) -> Result<Vec<Entry>> {
        self.walk(root)?.collect()
    }
}

/// Lazy stream of entries from a single traversal.
pub struct Entries {
    root: PathBuf,
    inner: Walk,
}

impl Iterator for Entries {
    type Item = Result<Entry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let dent = match self.inner.next()? {
                Ok(dent) => dent,
                Err(source) => {
                    let path = error_path(&source)
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    return Some(Err(TreecatError::Walk { path, source }));
                }
            };
            if dent.depth() == 0 {
                continue;
            }
            let file_type = dent.file_type();
            let depth = dent.depth();
            let entry = Entry::new(&self.root, dent.into_path(), depth, file_type);
            tracing::trace!(path = %entry.relative.display(), "visit");
            return Some(Ok(entry));
        }
    }
}

/// Find the path an `ignore` error refers to, if any.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn relatives(walker: &DirWalker, root: &Path) -> Vec<String> {
        walker
            .collect(root)
            .unwrap()
            .into_iter()
            .map(|e| e.relative.to_string_lossy().replace('\\', "/"))
            .collect()
    }

    #[test]
    fn test_preorder_sorted() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.txt", "b");
        write(dir.path(), "a/z.txt", "z");
        write(dir.path(), "a/inner/deep.txt", "d");

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        assert_eq!(
            relatives(&walker, dir.path()),
            vec!["a", "a/inner", "a/inner/deep.txt", "a/z.txt", "b.txt"]
        );
    }

    #[test]
    fn test_excluded_dirs_not_entered() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "keep.txt", "k");
        write(dir.path(), "node_modules/pkg/index.js", "x");
        write(dir.path(), ".git/config", "x");
        write(dir.path(), "sub/node_modules/dep.js", "x");
        write(dir.path(), "sub/.hidden", "x");

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        assert_eq!(relatives(&walker, dir.path()), vec!["keep.txt", "sub"]);
    }

    #[test]
    fn test_unsorted_walk_is_preorder() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "b.txt", "b");
        write(dir.path(), "a/z.txt", "z");
        write(dir.path(), "a/inner/deep.txt", "d");
        write(dir.path(), "c/one.txt", "1");
        write(dir.path(), "node_modules/skip.js", "x");

        let sorted = DirWalker::new(WalkerConfig::default()).unwrap();
        let unsorted = DirWalker::new(WalkerConfig {
            sort: false,
            ..Default::default()
        })
        .unwrap();

        let listed = relatives(&unsorted, dir.path());
        let mut expected = relatives(&sorted, dir.path());
        let mut actual = listed.clone();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);

        // Every parent appears before its children
        for (i, rel) in listed.iter().enumerate() {
            if let Some((parent, _)) = rel.rsplit_once('/') {
                let parent_pos = listed.iter().position(|p| p == parent).unwrap();
                assert!(parent_pos < i, "{} listed before its parent", rel);
            }
        }

        // Each subtree is contiguous
        for (i, rel) in listed.iter().enumerate() {
            let prefix = format!("{}/", rel);
            let end = listed[i + 1..]
                .iter()
                .position(|p| !p.starts_with(&prefix))
                .map_or(listed.len(), |n| i + 1 + n);
            assert!(
                listed[end..].iter().all(|p| !p.starts_with(&prefix)),
                "subtree of {} is split",
                rel
            );
        }
    }

    #[test]
    fn test_depths() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a/b/c.txt", "c");

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        let depths: Vec<usize> = walker
            .collect(dir.path())
            .unwrap()
            .iter()
            .map(|e| e.depth)
            .collect();
        assert_eq!(depths, vec![1, 2, 3]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "one.txt", "1");

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        assert_eq!(relatives(&walker, dir.path()), vec!["one.txt"]);

        write(dir.path(), "two.txt", "2");
        assert_eq!(relatives(&walker, dir.path()), vec!["one.txt", "two.txt"]);
    }

    #[test]
    fn test_missing_root() {
        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        let result = walker.walk(Path::new("/nonexistent/treecat/root"));
        assert!(matches!(result, Err(TreecatError::RootNotFound(_))));
    }

    #[test]
    fn test_hidden_root_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".project");
        write(&root, "main.rs", "fn main() {}");

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        assert_eq!(relatives(&walker, &root), vec!["main.rs"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_not_followed() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        write(dir.path(), "sub/file.txt", "f");
        symlink("..", dir.path().join("sub").join("parent")).unwrap();

        let walker = DirWalker::new(WalkerConfig::default()).unwrap();
        let entries = walker.collect(dir.path()).unwrap();
        let link = entries
            .iter()
            .find(|e| e.name() == "parent")
            .expect("symlink should be listed");
        assert!(link.is_symlink);
        assert!(link.is_dir());
        assert_eq!(entries.len(), 3);
    }
}
