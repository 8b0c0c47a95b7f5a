//! Exclusion rules applied to every entry during a walk

use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{Result, TreecatError};

use super::config::WalkerConfig;
use super::entry::EntryKind;

/// A single name rule: an exact name, or a glob pattern when the name
/// contains glob metacharacters.
#[derive(Debug, Clone)]
enum NameRule {
    Exact(String),
    Glob(Pattern),
}

impl NameRule {
    fn parse(name: &str) -> Result<Self> {
        if name.contains(['*', '?', '[']) {
            Pattern::new(name)
                .map(NameRule::Glob)
                .map_err(|source| TreecatError::InvalidPattern {
                    pattern: name.to_string(),
                    source,
                })
        } else {
            Ok(NameRule::Exact(name.to_string()))
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            NameRule::Exact(exact) => exact == name,
            NameRule::Glob(pattern) => pattern.matches(name),
        }
    }
}

/// Exclusion predicate evaluated on each entry before it is yielded.
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    skip_hidden: bool,
    names: Vec<NameRule>,
    file_names: Vec<NameRule>,
    paths: Vec<PathBuf>,
}

impl ExclusionFilter {
    /// Build the filter, failing on malformed glob patterns.
    pub fn from_config(config: &WalkerConfig) -> Result<Self> {
        let names = config
            .excluded_names
            .iter()
            .map(|n| NameRule::parse(n))
            .collect::<Result<Vec<_>>>()?;
        let file_names = config
            .excluded_file_names
            .iter()
            .map(|n| NameRule::parse(n))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            skip_hidden: config.skip_hidden,
            names,
            file_names,
            paths: config.excluded_paths.clone(),
        })
    }

    /// Check if an entry should be skipped (and, for directories, not entered).
    pub fn is_excluded(&self, path: &Path, kind: EntryKind) -> bool {
        let name = match path.file_name() {
            Some(n) => n.to_string_lossy(),
            None => return false,
        };

        if self.skip_hidden && name.starts_with('.') {
            return true;
        }
        if self.names.iter().any(|rule| rule.matches(&name)) {
            return true;
        }
        if kind == EntryKind::File && self.file_names.iter().any(|rule| rule.matches(&name)) {
            return true;
        }
        self.paths.iter().any(|p| p == path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(config: WalkerConfig) -> ExclusionFilter {
        ExclusionFilter::from_config(&config).unwrap()
    }

    #[test]
    fn test_hidden_entries_excluded() {
        let f = filter(WalkerConfig::default());
        assert!(f.is_excluded(Path::new("root/.git"), EntryKind::Dir));
        assert!(f.is_excluded(Path::new("root/.secret"), EntryKind::File));
        assert!(!f.is_excluded(Path::new("root/a.txt"), EntryKind::File));
    }

    #[test]
    fn test_hidden_entries_kept_when_disabled() {
        let f = filter(WalkerConfig {
            skip_hidden: false,
            ..Default::default()
        });
        assert!(!f.is_excluded(Path::new("root/.env"), EntryKind::File));
    }

    #[test]
    fn test_dependency_dir_excluded() {
        let f = filter(WalkerConfig::default());
        assert!(f.is_excluded(Path::new("root/node_modules"), EntryKind::Dir));
        assert!(f.is_excluded(Path::new("root/sub/node_modules"), EntryKind::Dir));
        assert!(!f.is_excluded(Path::new("root/node_modules_backup"), EntryKind::Dir));
    }

    #[test]
    fn test_file_only_names_do_not_hit_directories() {
        let f = filter(WalkerConfig::default().with_excluded_file_name("package-lock.json"));
        assert!(f.is_excluded(Path::new("root/package-lock.json"), EntryKind::File));
        assert!(!f.is_excluded(Path::new("root/package-lock.json"), EntryKind::Dir));
    }

    #[test]
    fn test_glob_names() {
        let f = filter(WalkerConfig::default().with_excluded_name("*.log"));
        assert!(f.is_excluded(Path::new("root/debug.log"), EntryKind::File));
        assert!(!f.is_excluded(Path::new("root/debug.txt"), EntryKind::File));
    }

    #[test]
    fn test_exact_path_exclusion() {
        let f = filter(WalkerConfig::default().with_excluded_path("root/output.txt"));
        assert!(f.is_excluded(Path::new("root/output.txt"), EntryKind::File));
        assert!(!f.is_excluded(Path::new("root/sub/output.txt"), EntryKind::File));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let result = ExclusionFilter::from_config(&WalkerConfig::default().with_excluded_name("[a"));
        assert!(matches!(result, Err(TreecatError::InvalidPattern { .. })));
    }

    #[test]
    fn test_bare_root_never_excluded() {
        let f = filter(WalkerConfig::default());
        assert!(!f.is_excluded(Path::new("/"), EntryKind::Dir));
    }
}
