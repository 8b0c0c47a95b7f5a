//! Flattener - copies every visited file into one destination folder

use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{Result, TreecatError};
use crate::walk::{DirWalker, Entry};

use super::config::FlattenConfig;
use super::copy::{copy_preserving_times, is_same_file, same_contents};
use super::name::flattened_name;

/// Two source files that mapped to the same flattened name.
/// The file at `overwritten_by` replaced the copy of `first`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub name: String,
    pub first: PathBuf,
    pub overwritten_by: PathBuf,
}

/// Outcome of a flatten run.
#[derive(Debug, Clone, Serialize)]
pub struct FlattenSummary {
    pub destination: PathBuf,
    pub copied: usize,
    /// Files already sitting at their flattened location
    pub unchanged: usize,
    pub collisions: Vec<Collision>,
}

pub struct Flattener {
    config: FlattenConfig,
    walker: DirWalker,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Result<Self> {
        let mut components = Path::new(&config.dest_dir_name).components();
        let single_name = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_name {
            return Err(TreecatError::InvalidDestination(config.dest_dir_name));
        }

        let walker = DirWalker::new(config.walker.clone())?;
        Ok(Self { config, walker })
    }

    pub fn destination(&self, root: &Path) -> PathBuf {
        root.join(&self.config.dest_dir_name)
    }

    /// Copy every file below `root` into the destination folder.
    ///
    /// The file list is taken before the first copy, so files copied during
    /// this run are never revisited. Any copy failure aborts the run.
    pub fn run(&self, root: &Path) -> Result<FlattenSummary> {
        let entries: Vec<Entry> = self.walker.collect(root)?;

        let destination = self.destination(root);
        fs::create_dir_all(&destination).map_err(|source| TreecatError::CreateDestination {
            path: destination.clone(),
            source,
        })?;

        let mut summary = FlattenSummary {
            destination: destination.clone(),
            copied: 0,
            unchanged: 0,
            collisions: Vec::new(),
        };
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for entry in entries.iter().filter(|e| e.is_file()) {
            let name = flattened_name(&entry.relative, &self.config.dest_dir_name);
            let target = destination.join(&name);

            if is_same_file(&entry.path, &target) {
                tracing::debug!(path = %entry.relative.display(), "already in place");
                summary.unchanged += 1;
                seen.entry(name).or_insert_with(|| entry.relative.clone());
                continue;
            }

            // Overwriting identical bytes loses nothing, so reruns stay quiet
            if let Some(first) = seen.insert(name.clone(), entry.relative.clone()) {
                if !same_contents(&entry.path, &target) {
                    tracing::warn!(
                        name = %name,
                        first = %first.display(),
                        overwritten_by = %entry.relative.display(),
                        "flattened name collision, earlier copy overwritten"
                    );
                    summary.collisions.push(Collision {
                        name: name.clone(),
                        first,
                        overwritten_by: entry.relative.clone(),
                    });
                }
            }

            copy_preserving_times(&entry.path, &target).map_err(|source| TreecatError::Copy {
                from: entry.path.clone(),
                to: target.clone(),
                source,
            })?;
            tracing::debug!(from = %entry.relative.display(), to = %name, "copied");
            summary.copied += 1;
        }

        tracing::info!(
            destination = %destination.display(),
            copied = summary.copied,
            unchanged = summary.unchanged,
            "flatten finished"
        );
        Ok(summary)
    }
}
