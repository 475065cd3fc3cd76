use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use buildrules_core::BuildTarget;

use super::open_root;
use crate::display::print_targets;
use crate::utils::find_build_files;

#[derive(Debug, Serialize)]
struct ScannedProject {
    project_path: String,
    targets: Vec<BuildTarget>,
}

pub fn scan_command(root: Option<&Path>, json: bool) -> Result<()> {
    let (root, mut loader) = open_root(root)?;

    let project_paths = find_build_files(&root, loader.config())?;
    debug!("Found {} build files under {}", project_paths.len(), root.display());

    let mut projects = Vec::with_capacity(project_paths.len());
    for project_path in project_paths {
        let build_file = loader
            .load(&root, &project_path)
            .with_context(|| format!("Failed to parse build file for `{project_path}`"))?;
        projects.push(ScannedProject {
            project_path,
            targets: build_file.targets.clone(),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        println!("❌ No build files found under {}", root.display());
        return Ok(());
    }

    let total: usize = projects.iter().map(|project| project.targets.len()).sum();
    println!("✅ Found {} target(s) in {} build file(s)", total, projects.len());
    for project in &projects {
        println!("\n📁 //{}", project.project_path);
        print_targets(&project.targets);
    }

    Ok(())
}
