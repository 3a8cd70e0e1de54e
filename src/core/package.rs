//! Package - a named component with its library and unit-test targets.
//!
//! A Package is assembled with a [`PackageBuilder`] and is read-only once
//! finished. Upstream packages are held as shared references.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::core::path::RepoPath;
use crate::core::target::BuildTarget;
use crate::resolver::errors::PackageError;

/// A complete package descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    name: String,

    path: RepoPath,

    /// Upstream packages registered on this one, in registration order
    #[serde(serialize_with = "serialize_package_names")]
    packages: Vec<Arc<Package>>,

    main_lib: Arc<BuildTarget>,

    unittest: Arc<BuildTarget>,
}

impl Package {
    /// Get the package name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the repository path.
    pub fn path(&self) -> &RepoPath {
        &self.path
    }

    /// Upstream packages registered on this package.
    pub fn packages(&self) -> &[Arc<Package>] {
        &self.packages
    }

    /// The library other packages link against.
    pub fn main_lib(&self) -> &Arc<BuildTarget> {
        &self.main_lib
    }

    /// The unit-test executable.
    pub fn unittest(&self) -> &Arc<BuildTarget> {
        &self.unittest
    }

    /// Both targets, library first.
    pub fn targets(&self) -> [&Arc<BuildTarget>; 2] {
        [&self.main_lib, &self.unittest]
    }

    /// Find a registered upstream package by name.
    pub fn package(&self, name: &str) -> Option<&Arc<Package>> {
        self.packages.iter().find(|p| p.name == name)
    }
}

impl std::fmt::Display for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.path)
    }
}

fn serialize_package_names<S>(packages: &[Arc<Package>], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(packages.iter().map(|p| p.name()))
}

/// Check that a package name can be used as a target name and path segment.
pub fn validate_name(name: &str) -> Result<(), PackageError> {
    let reason = if name.is_empty() {
        Some("package name cannot be empty")
    } else if name.contains(['/', '\\']) {
        Some("package name cannot contain path separators")
    } else if name.chars().any(char::is_whitespace) {
        Some("package name cannot contain whitespace")
    } else if name == "." || name == ".." {
        Some("package name cannot be a relative path component")
    } else if !name.chars().all(is_name_char) {
        Some("package name may only contain ASCII letters, digits, `_`, `.`, `+` and `-`")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(PackageError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-')
}

/// Mutable staging area for a package under construction.
#[derive(Debug)]
pub struct PackageBuilder {
    name: String,
    path: RepoPath,
    packages: Vec<Arc<Package>>,
}

impl PackageBuilder {
    /// Start a new package. Fails if the name is not usable.
    pub fn new(name: impl Into<String>, path: RepoPath) -> Result<Self, PackageError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(PackageBuilder {
            name,
            path,
            packages: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &RepoPath {
        &self.path
    }

    /// Register an upstream package. This does not create any target edge.
    pub fn add_package(&mut self, package: Arc<Package>) {
        self.packages.push(package);
    }

    /// Record the targets and freeze the package.
    pub fn finish(self, main_lib: Arc<BuildTarget>, unittest: Arc<BuildTarget>) -> Package {
        Package {
            name: self.name,
            path: self.path,
            packages: self.packages,
            main_lib,
            unittest,
        }
    }
}
