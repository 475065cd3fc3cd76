//! Load build files and turn every rule call into a target

mod config;

pub use config::Config;

use lru::LruCache;
use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::registry::RuleRegistry;
use crate::starlark::StarlarkParser;
use crate::target::BuildTarget;

/// Targets declared by one build file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFile {
    pub path: PathBuf,
    /// Directory of the build file, relative to the root
    pub project_path: String,
    /// Targets in declaration order
    pub targets: Vec<BuildTarget>,
}

impl BuildFile {
    pub fn target(&self, name: &str) -> Option<&BuildTarget> {
        self.targets.iter().find(|target| target.name == name)
    }
}

struct CachedBuildFile {
    content_hash: String,
    build_file: Arc<BuildFile>,
}

/// Loads build files through the rule registry, memoising parsed files
pub struct BuildFileLoader {
    parser: StarlarkParser,
    registry: RuleRegistry,
    config: Config,
    cache: LruCache<PathBuf, CachedBuildFile>,
}

impl BuildFileLoader {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let capacity = NonZeroUsize::new(config.cache_capacity).ok_or_else(|| {
            Error::ConfigError("cache_capacity must be greater than zero".to_string())
        })?;

        Ok(Self {
            parser: StarlarkParser::new()?,
            registry: RuleRegistry::new(),
            config,
            cache: LruCache::new(capacity),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Locate the build file for `project_path`
    pub fn find_build_file(&self, root: &Path, project_path: &str) -> Result<PathBuf> {
        let directory = if project_path.is_empty() {
            root.to_path_buf()
        } else {
            root.join(project_path)
        };

        let found = self
            .config
            .build_file_names
            .iter()
            .map(|name| directory.join(name))
            .find(|candidate| candidate.is_file());

        found.ok_or(Error::BuildFileNotFound(directory))
    }

    /// Load the build file for `project_path`.
    ///
    /// The first failing target aborts the load; its error is returned as is
    /// and nothing is cached for the file.
    pub fn load(&mut self, root: &Path, project_path: &str) -> Result<Arc<BuildFile>> {
        let path = self.find_build_file(root, project_path)?;
        let content = fs::read_to_string(&path)?;
        let content_hash = format!("{:x}", md5::compute(content.as_bytes()));

        if let Some(cached) = self.cache.get(&path) {
            if cached.content_hash == content_hash {
                debug!("Cache hit for {:?}", path);
                return Ok(Arc::clone(&cached.build_file));
            }
            debug!("Cached entry for {:?} is stale", path);
        }

        let targets = self
            .parse_source(&content, root, project_path)
            .inspect_err(|e| warn!("Failed to load {:?}: {}", path, e))?;
        debug!("Loaded {} targets from {:?}", targets.len(), path);

        let build_file = Arc::new(BuildFile {
            path: path.clone(),
            project_path: project_path.to_string(),
            targets,
        });
        self.cache.put(
            path,
            CachedBuildFile {
                content_hash,
                build_file: Arc::clone(&build_file),
            },
        );

        Ok(build_file)
    }

    /// Parse in-memory build file content, uncached
    pub fn parse_source(
        &mut self,
        content: &str,
        root: &Path,
        project_path: &str,
    ) -> Result<Vec<BuildTarget>> {
        let ast = self.parser.parse_build_file(content)?;

        let mut targets = Vec::new();
        for call in ast.calls() {
            if let Some(rule_kind) = call.function_name() {
                if self.config.skips(rule_kind) {
                    debug!("Skipping `{}` call", rule_kind);
                    continue;
                }
            }
            targets.push(self.registry.parse_call(&call, root, project_path)?);
        }

        Ok(targets)
    }

    /// Drop the cached entry for a build file path
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.cache.pop(path).is_some()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_files(&self) -> usize {
        self.cache.len()
    }
}
