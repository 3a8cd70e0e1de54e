//! Package providers - anything that can produce a descriptor on request.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::core::{BuildTarget, Package, PackageBuilder, RepoPath};
use crate::resolver::errors::PackageError;
use crate::resolver::Resolver;

/// Produces a package descriptor, resolving its own upstreams through the
/// resolver it is handed.
pub trait PackageProvider {
    fn provide(&self, resolver: &mut Resolver<'_>) -> Result<Package, PackageError>;
}

/// Provider backed by a factory function.
pub struct FnProvider<F>(pub F);

impl<F> PackageProvider for FnProvider<F>
where
    F: Fn(&mut Resolver<'_>) -> Result<Package, PackageError>,
{
    fn provide(&self, resolver: &mut Resolver<'_>) -> Result<Package, PackageError> {
        (self.0)(resolver)
    }
}

impl<F> fmt::Debug for FnProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnProvider")
    }
}

/// An upstream package known only by its declaration.
///
/// Its library links against the libraries of `deps`; its test target links
/// against its own library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalPackage {
    pub name: String,
    pub path: RepoPath,
    pub deps: Vec<String>,
}

impl ExternalPackage {
    /// Declare a leaf package.
    pub fn new(name: impl Into<String>, path: RepoPath) -> Self {
        ExternalPackage {
            name: name.into(),
            path,
            deps: Vec::new(),
        }
    }

    /// Declare a package at `root/<name>`.
    pub fn under(root: &RepoPath, name: impl Into<String>) -> Self {
        let name = name.into();
        let path = root.join(&name);
        Self::new(name, path)
    }

    /// Add upstream package names.
    pub fn with_deps(mut self, deps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.deps.extend(deps.into_iter().map(Into::into));
        self
    }
}

impl PackageProvider for ExternalPackage {
    fn provide(&self, resolver: &mut Resolver<'_>) -> Result<Package, PackageError> {
        let upstream = self
            .deps
            .iter()
            .map(|dep| resolver.require(dep))
            .collect::<Result<Vec<_>, _>>()?;

        let mut builder = PackageBuilder::new(&self.name, self.path.clone())?;
        for pkg in &upstream {
            builder.add_package(pkg.clone());
        }

        let main_lib = Arc::new(
            BuildTarget::library(&self.name, self.path.clone())
                .with_dependencies(upstream.iter().map(|p| p.main_lib().clone())),
        );
        let unittest = Arc::new(
            BuildTarget::test(format!("{}_test", self.name), self.path.clone())
                .with_dependency(main_lib.clone()),
        );

        Ok(builder.finish(main_lib, unittest))
    }
}

/// `[upstream.<name>]` entry in configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpstreamDecl {
    /// Repository path; defaults to `<repo_root>/<name>`
    pub path: Option<RepoPath>,

    /// Upstream package names
    pub deps: Vec<String>,
}

impl UpstreamDecl {
    /// Turn the declaration into a provider.
    pub fn to_external(&self, name: &str, repo_root: &RepoPath) -> ExternalPackage {
        let path = self.path.clone().unwrap_or_else(|| repo_root.join(name));
        ExternalPackage::new(name, path).with_deps(self.deps.iter().cloned())
    }
}
