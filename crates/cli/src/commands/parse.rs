use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::open_root;
use crate::display::print_targets;

pub fn parse_command(project_path: &str, root: Option<&Path>, json: bool) -> Result<()> {
    let (root, mut loader) = open_root(root)?;
    let project_path = project_path.trim_matches('/');
    debug!("Parsing project {} under {}", project_path, root.display());

    let build_file = loader
        .load(&root, project_path)
        .with_context(|| format!("Failed to parse build file for `{project_path}`"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&build_file.targets)?);
    } else {
        println!("📄 {}", build_file.path.display());
        print_targets(&build_file.targets);
    }

    Ok(())
}
