//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.ctext/config.toml` - User-wide defaults
//! - Project: `.ctext/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config, field by field.
//! Command-line flags are applied on top by the driver.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::RepoPath;
use crate::generator::GenerateFormat;
use crate::ops::describe::PackageConfig;
use crate::resolver::{Registry, UpstreamDecl};

/// Merged configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package settings
    pub package: PackageSection,

    /// Generator settings
    pub generate: GenerateSection,

    /// Declared upstream packages, on top of the built-in ones
    pub upstream: BTreeMap<String, UpstreamDecl>,
}

/// `[package]` section. Unset fields fall back to [`PackageConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PackageSection {
    pub name: Option<String>,
    pub repo_root: Option<RepoPath>,
    pub include_core: Option<bool>,
    pub core: Option<String>,
    pub base: Option<Vec<String>>,
    pub test_harness: Option<String>,
}

/// `[generate]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GenerateSection {
    /// Output format (json, cmake, all)
    pub format: Option<String>,

    /// Directory the generated files are written to
    pub output_dir: Option<PathBuf>,

    /// Directory the repositories are checked out under
    pub workspace_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        // Package settings
        if other.package.name.is_some() {
            self.package.name = other.package.name;
        }
        if other.package.repo_root.is_some() {
            self.package.repo_root = other.package.repo_root;
        }
        if other.package.include_core.is_some() {
            self.package.include_core = other.package.include_core;
        }
        if other.package.core.is_some() {
            self.package.core = other.package.core;
        }
        if other.package.base.is_some() {
            self.package.base = other.package.base;
        }
        if other.package.test_harness.is_some() {
            self.package.test_harness = other.package.test_harness;
        }

        // Generate settings
        if other.generate.format.is_some() {
            self.generate.format = other.generate.format;
        }
        if other.generate.output_dir.is_some() {
            self.generate.output_dir = other.generate.output_dir;
        }
        if other.generate.workspace_dir.is_some() {
            self.generate.workspace_dir = other.generate.workspace_dir;
        }

        // Upstream declarations replace by name
        self.upstream.extend(other.upstream);
    }

    /// Resolve the package settings against the defaults.
    pub fn package_config(&self) -> PackageConfig {
        let defaults = PackageConfig::default();
        let section = self.package.clone();
        PackageConfig {
            name: section.name.unwrap_or(defaults.name),
            repo_root: section.repo_root.unwrap_or(defaults.repo_root),
            include_core: section.include_core.unwrap_or(defaults.include_core),
            core: section.core.unwrap_or(defaults.core),
            base: section.base.unwrap_or(defaults.base),
            test_harness: section.test_harness.unwrap_or(defaults.test_harness),
        }
    }

    /// Parse the generator format from config string.
    pub fn format(&self) -> Option<GenerateFormat> {
        self.generate.format.as_ref().and_then(|s| match s.parse() {
            Ok(format) => Some(format),
            Err(e) => {
                tracing::warn!("ignoring [generate] format: {}", e);
                None
            }
        })
    }

    /// Registry with the built-in upstreams plus the declared ones.
    pub fn registry(&self, repo_root: &RepoPath) -> Registry {
        let mut registry = Registry::with_defaults(repo_root);
        for (name, decl) in &self.upstream {
            registry.register_external(decl.to_external(name, repo_root));
        }
        registry
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.ctext/config.toml)
/// 2. Global config (~/.ctext/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        if global_path.exists() {
            tracing::debug!("loading global config {}", global_path.display());
            config.merge(Config::load_or_default(global_path));
        }
    }

    if project_path.exists() {
        tracing::debug!("loading project config {}", project_path.display());
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global config directory (~/.ctext).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".ctext"))
}

/// Get the global config path (~/.ctext/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.ctext/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".ctext").join("config.toml")
}
