//! Package descriptor construction.
//!
//! One parameterised builder covers every variant of the package: the name,
//! the repository root, the base packages and whether the core package is
//! linked in are all configuration.

use std::sync::Arc;

use crate::core::{BuildTarget, Package, PackageBuilder, RepoPath};
use crate::resolver::{PackageError, PackageProvider, Registry, Resolver};

/// Default repository root of the upstream packages.
pub const DEFAULT_REPO_ROOT: &str = "github.com/jurgen-kluft";

/// What to build and what it links against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageConfig {
    /// Package name, also the library target name
    pub name: String,

    /// Repository root; the package lives at `<repo_root>/<name>`
    pub repo_root: RepoPath,

    /// Link the core package into the library and the tests
    pub include_core: bool,

    /// Name of the core package
    pub core: String,

    /// Base packages the library links against, in link order
    pub base: Vec<String>,

    /// Name of the unit-test harness package
    pub test_harness: String,
}

impl Default for PackageConfig {
    fn default() -> Self {
        PackageConfig {
            name: "ctext".to_string(),
            repo_root: RepoPath::parse(DEFAULT_REPO_ROOT),
            include_core: true,
            core: "ccore".to_string(),
            base: vec!["cbase".to_string()],
            test_harness: "cunittest".to_string(),
        }
    }
}

impl PackageConfig {
    /// The `xtext` flavour: x-prefixed upstreams and no core package.
    pub fn xtext() -> Self {
        PackageConfig {
            name: "xtext".to_string(),
            include_core: false,
            core: "xcore".to_string(),
            base: vec!["xbase".to_string()],
            test_harness: "xunittest".to_string(),
            ..PackageConfig::default()
        }
    }

    /// Repository path of the package itself.
    pub fn path(&self) -> RepoPath {
        self.repo_root.join(&self.name)
    }

    /// Name of the unit-test target.
    pub fn test_name(&self) -> String {
        format!("{}_test", self.name)
    }

    /// Every upstream package name in resolution order.
    pub fn upstream_names(&self) -> Vec<&str> {
        let mut names = vec![self.test_harness.as_str()];
        if self.include_core {
            names.push(self.core.as_str());
        }
        names.extend(self.base.iter().map(String::as_str));
        names
    }
}

/// Build the descriptor of the configured package.
pub fn get_package(config: &PackageConfig, registry: &Registry) -> Result<Package, PackageError> {
    let mut resolver = registry.resolver(&config.name);
    build_package(config, &mut resolver)
}

/// Build the descriptor using an existing resolution.
pub fn build_package(
    config: &PackageConfig,
    resolver: &mut Resolver<'_>,
) -> Result<Package, PackageError> {
    crate::core::package::validate_name(&config.name)?;

    // Dependencies
    let harness = resolver.require(&config.test_harness)?;
    let core = if config.include_core {
        Some(resolver.require(&config.core)?)
    } else {
        None
    };
    let base = config
        .base
        .iter()
        .map(|name| resolver.require(name))
        .collect::<Result<Vec<_>, _>>()?;

    let path = config.path();
    let mut builder = PackageBuilder::new(&config.name, path.clone())?;
    builder.add_package(harness.clone());
    if let Some(core) = &core {
        builder.add_package(core.clone());
    }
    for pkg in &base {
        builder.add_package(pkg.clone());
    }

    let main_lib = Arc::new(
        BuildTarget::library(&config.name, path.clone())
            .with_dependencies(base.iter().map(|p| p.main_lib().clone()))
            .with_dependencies(core.iter().map(|p| p.main_lib().clone())),
    );

    let unittest = Arc::new(
        BuildTarget::test(config.test_name(), path)
            .with_dependency(harness.main_lib().clone())
            .with_dependencies(core.iter().map(|p| p.main_lib().clone()))
            .with_dependencies(base.iter().map(|p| p.main_lib().clone()))
            .with_dependency(main_lib.clone()),
    );

    tracing::debug!(
        "built `{}`: lib -> [{}], test -> [{}]",
        config.name,
        main_lib.dependency_names().join(", "),
        unittest.dependency_names().join(", ")
    );

    Ok(builder.finish(main_lib, unittest))
}

/// A configured package used as a provider, so one configured package can
/// be the upstream of another.
#[derive(Debug, Clone)]
pub struct ConfiguredPackage(pub PackageConfig);

impl PackageProvider for ConfiguredPackage {
    fn provide(&self, resolver: &mut Resolver<'_>) -> Result<Package, PackageError> {
        build_package(&self.0, resolver)
    }
}
