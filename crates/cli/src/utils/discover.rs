use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use buildrules_core::Config;

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Project paths of every directory under `root` holding a build file, sorted
pub fn find_build_files(root: &Path, config: &Config) -> Result<Vec<String>> {
    let mut project_paths = BTreeSet::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if !config.build_file_names.iter().any(|name| name == file_name) {
            continue;
        }

        let Some(directory) = entry.path().parent() else {
            continue;
        };
        let relative = directory.strip_prefix(root)?;
        let project_path = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        project_paths.insert(project_path);
    }

    Ok(project_paths.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_build_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("BUCK"), "").unwrap();
        fs::create_dir_all(root.join("a/b")).unwrap();
        fs::write(root.join("a/b/TARGETS"), "").unwrap();
        fs::write(root.join("a/b/BUCK"), "").unwrap();
        fs::create_dir_all(root.join("c")).unwrap();
        fs::write(root.join("c/lib.py"), "").unwrap();
        fs::create_dir_all(root.join(".hidden")).unwrap();
        fs::write(root.join(".hidden/BUCK"), "").unwrap();

        let found = find_build_files(root, &Config::default()).unwrap();
        assert_eq!(found, vec!["".to_string(), "a/b".to_string()]);
    }
}
