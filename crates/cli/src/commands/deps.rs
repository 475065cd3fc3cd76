use anyhow::{Context, Result, anyhow};
use std::path::Path;

use buildrules_core::label::split_label;

use super::open_root;

pub fn deps_command(label: &str, root: Option<&Path>) -> Result<()> {
    let (package, name) =
        split_label(label).ok_or_else(|| anyhow!("Invalid target label `{label}`, expected //path:name"))?;

    let (root, mut loader) = open_root(root)?;
    let build_file = loader
        .load(&root, package)
        .with_context(|| format!("Failed to parse build file for `{package}`"))?;

    let target = build_file
        .target(name)
        .ok_or_else(|| anyhow!("Target `{label}` not found in {}", build_file.path.display()))?;

    for dependency in &target.dependencies {
        println!("{dependency}");
    }

    Ok(())
}
