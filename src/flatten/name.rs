//! Flattened file names

use std::path::{Component, Path};

/// Derive the single-level name for a file at `relative` below the root.
///
/// Components are joined with `_`. A file directly inside the destination
/// folder loses the `<dest>_` prefix, so it maps onto itself.
pub fn flattened_name(relative: &Path, dest_dir_name: &str) -> String {
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    let joined = parts.join("_");

    if parts.len() == 2 && parts[0] == dest_dir_name {
        let prefix = format!("{dest_dir_name}_");
        if let Some(stripped) = joined.strip_prefix(&prefix) {
            return stripped.to_string();
        }
    }
    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(rel: &[&str]) -> String {
        let path: std::path::PathBuf = rel.iter().collect();
        flattened_name(&path, "output")
    }

    #[test]
    fn test_top_level_file_unchanged() {
        assert_eq!(name(&["a.txt"]), "a.txt");
    }

    #[test]
    fn test_nested_components_joined() {
        assert_eq!(name(&["sub", "deep.txt"]), "sub_deep.txt");
        assert_eq!(
            name(&["src", "components", "task", "TaskForm.tsx"]),
            "src_components_task_TaskForm.tsx"
        );
    }

    #[test]
    fn test_destination_prefix_stripped() {
        assert_eq!(name(&["output", "x.txt"]), "x.txt");
    }

    #[test]
    fn test_prefix_kept_below_destination_subfolder() {
        assert_eq!(name(&["output", "nested", "x.txt"]), "output_nested_x.txt");
    }

    #[test]
    fn test_prefix_kept_for_similar_folder() {
        assert_eq!(name(&["outputs", "x.txt"]), "outputs_x.txt");
    }

    #[test]
    fn test_custom_destination() {
        let path: std::path::PathBuf = ["flat", "x.txt"].iter().collect();
        assert_eq!(flattened_name(&path, "flat"), "x.txt");
        assert_eq!(flattened_name(&path, "output"), "flat_x.txt");
    }
}
