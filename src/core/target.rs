//! Build target definitions - what gets built.
//!
//! A BuildTarget is either the main library of a package or its unit-test
//! executable. Dependencies are shared references to other targets, so a
//! target can only depend on targets that already exist.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::path::RepoPath;

/// The kind of target being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    /// C++ static library
    Library,

    /// Unit-test executable
    Test,
}

impl TargetKind {
    /// Check if this is a library.
    pub fn is_library(&self) -> bool {
        matches!(self, TargetKind::Library)
    }

    /// Directory (under the target path) holding the translation units.
    pub fn source_dir(&self) -> &'static str {
        match self {
            TargetKind::Library => "source/main/cpp",
            TargetKind::Test => "source/test/cpp",
        }
    }

    /// Directory (under the target path) holding headers.
    pub fn include_dir(&self) -> &'static str {
        match self {
            TargetKind::Library => "source/main/include",
            TargetKind::Test => "source/test/include",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetKind::Library => write!(f, "lib"),
            TargetKind::Test => write!(f, "test"),
        }
    }
}

/// A build target with its link dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    name: String,

    path: RepoPath,

    kind: TargetKind,

    /// Targets this one links against, in registration order
    #[serde(serialize_with = "serialize_dep_names")]
    dependencies: Vec<Arc<BuildTarget>>,
}

impl BuildTarget {
    /// Create a new target with the given name, path and kind.
    pub fn new(name: impl Into<String>, path: RepoPath, kind: TargetKind) -> Self {
        BuildTarget {
            name: name.into(),
            path,
            kind,
            dependencies: Vec::new(),
        }
    }

    /// Create a new library target.
    pub fn library(name: impl Into<String>, path: RepoPath) -> Self {
        Self::new(name, path, TargetKind::Library)
    }

    /// Create a new unit-test target.
    pub fn test(name: impl Into<String>, path: RepoPath) -> Self {
        Self::new(name, path, TargetKind::Test)
    }

    /// Add a dependency.
    pub fn with_dependency(mut self, dep: Arc<BuildTarget>) -> Self {
        self.dependencies.push(dep);
        self
    }

    /// Add several dependencies, keeping their order.
    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = Arc<BuildTarget>>) -> Self {
        self.dependencies.extend(deps);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &RepoPath {
        &self.path
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Direct dependencies in registration order.
    pub fn dependencies(&self) -> &[Arc<BuildTarget>] {
        &self.dependencies
    }

    /// Names of the direct dependencies in registration order.
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.name()).collect()
    }

    /// Check whether `name` is reachable through the dependency edges.
    pub fn depends_on(&self, name: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&BuildTarget> = self.dependencies.iter().map(|d| d.as_ref()).collect();
        while let Some(target) = stack.pop() {
            if target.name == name {
                return true;
            }
            if !visited.insert(target.name.as_str()) {
                continue;
            }
            stack.extend(target.dependencies.iter().map(|d| d.as_ref()));
        }
        false
    }
}

impl std::fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.kind, self.path)
    }
}

fn serialize_dep_names<S>(deps: &[Arc<BuildTarget>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(deps.iter().map(|d| d.name()))
}
