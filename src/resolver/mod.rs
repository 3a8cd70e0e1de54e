//! Upstream package resolution.
//!
//! A [`Registry`] maps package names to providers. Descriptor builders never
//! look packages up globally; they receive a [`Resolver`] and ask it for the
//! packages they need. The resolver tracks the packages currently being
//! built so that providers requiring each other are reported as a cycle
//! instead of recursing forever.

pub mod errors;
pub mod provider;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::core::{Package, RepoPath};

pub use errors::PackageError;
pub use provider::{ExternalPackage, FnProvider, PackageProvider, UpstreamDecl};

/// Upstream packages known by default, all located under the repository root.
pub const DEFAULT_UPSTREAMS: &[&str] = &["cbase", "ccore", "cunittest", "xbase", "xunittest"];

/// Named package providers.
#[derive(Default)]
pub struct Registry {
    providers: BTreeMap<String, Box<dyn PackageProvider>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Registry {
            providers: BTreeMap::new(),
        }
    }

    /// Create a registry declaring [`DEFAULT_UPSTREAMS`] as leaf packages.
    pub fn with_defaults(repo_root: &RepoPath) -> Self {
        let mut registry = Registry::new();
        for name in DEFAULT_UPSTREAMS {
            registry.register_external(ExternalPackage::under(repo_root, *name));
        }
        registry
    }

    /// Register a provider, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, provider: impl PackageProvider + 'static) {
        let name = name.into();
        if self.providers.insert(name.clone(), Box::new(provider)).is_some() {
            tracing::debug!("replacing provider for `{}`", name);
        }
    }

    /// Register a factory function.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&mut Resolver<'_>) -> Result<Package, PackageError> + 'static,
    {
        self.register(name, FnProvider(f));
    }

    /// Register a declared upstream package under its own name.
    pub fn register_external(&mut self, package: ExternalPackage) {
        self.register(package.name.clone(), package);
    }

    /// Check if a provider is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.providers.keys().cloned().collect()
    }

    /// Start a resolution on behalf of `root`.
    pub fn resolver(&self, root: impl Into<String>) -> Resolver<'_> {
        Resolver {
            registry: self,
            stack: vec![root.into()],
        }
    }

    /// Build a registered package.
    pub fn get_package(&self, name: &str) -> Result<Arc<Package>, PackageError> {
        let mut resolver = Resolver {
            registry: self,
            stack: Vec::new(),
        };
        resolver.require(name)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("providers", &self.providers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Per-call resolution state.
#[derive(Debug)]
pub struct Resolver<'r> {
    registry: &'r Registry,

    /// Packages currently being built, outermost first
    stack: Vec<String>,
}

impl<'r> Resolver<'r> {
    /// The registry this resolver draws from.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Name of the package currently being built.
    pub fn current(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }

    /// Build a fresh descriptor for `name`.
    pub fn require(&mut self, name: &str) -> Result<Arc<Package>, PackageError> {
        if let Some(pos) = self.stack.iter().position(|n| n == name) {
            let mut cycle = self.stack[pos..].to_vec();
            cycle.push(name.to_string());
            return Err(PackageError::DependencyCycle { cycle });
        }

        let registry = self.registry;
        let Some(provider) = registry.providers.get(name) else {
            return Err(PackageError::UnresolvableDependency {
                package: name.to_string(),
                required_by: self.current().unwrap_or("<root>").to_string(),
                available: registry.names(),
            });
        };

        tracing::debug!(
            "resolving `{}` for `{}`",
            name,
            self.current().unwrap_or("<root>")
        );

        self.stack.push(name.to_string());
        let result = provider.provide(self);
        self.stack.pop();

        result.map(Arc::new)
    }
}
