pub mod deps;
pub mod parse;
pub mod scan;

pub use deps::deps_command;
pub use parse::parse_command;
pub use scan::scan_command;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use buildrules_core::{BuildFileLoader, Config};

/// Resolve the root directory and build a loader from its configuration
pub(crate) fn open_root(root: Option<&Path>) -> Result<(PathBuf, BuildFileLoader)> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };

    let config = Config::load(&root)
        .with_context(|| format!("Failed to load configuration from {}", root.display()))?;
    let loader = BuildFileLoader::new(config)?;

    Ok((root, loader))
}
