use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Loader configuration, read from `.buildrules.json` at the project root
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", default)]
pub struct Config {
    /// Build file names tried in each directory, first match wins
    pub build_file_names: Vec<String>,

    /// Number of parsed build files kept in memory
    pub cache_capacity: usize,

    /// Statement calls that do not declare targets
    pub skip_rules: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            build_file_names: vec!["BUCK".to_string(), "TARGETS".to_string()],
            cache_capacity: 64,
            skip_rules: vec!["load".to_string()],
        }
    }
}

impl Config {
    pub const FILE_NAME: &'static str = ".buildrules.json";

    /// Load `<root>/.buildrules.json`, or the defaults when it does not exist
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(Self::FILE_NAME);
        if path.is_file() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.build_file_names.is_empty() {
            return Err(Error::ConfigError(
                "build_file_names must not be empty".to_string(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(Error::ConfigError(
                "cache_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether calls to `rule_kind` are skipped instead of parsed
    pub fn skips(&self, rule_kind: &str) -> bool {
        self.skip_rules.iter().any(|skipped| skipped == rule_kind)
    }
}
