//! Fixtures shared by unit tests.

use std::path::Path;
use std::sync::Arc;

use crate::core::{BuildTarget, Package, PackageBuilder, RepoPath};
use crate::ops::describe::DEFAULT_REPO_ROOT;
use crate::resolver::Registry;

/// Registry with the default upstream packages under the default root.
pub fn default_registry() -> Registry {
    Registry::with_defaults(&RepoPath::parse(DEFAULT_REPO_ROOT))
}

/// A package with no upstreams at `<default root>/<name>`.
pub fn leaf_package(name: &str) -> Package {
    let path = RepoPath::parse(DEFAULT_REPO_ROOT).join(name);
    let lib = Arc::new(BuildTarget::library(name, path.clone()));
    let test = Arc::new(
        BuildTarget::test(format!("{}_test", name), path.clone()).with_dependency(lib.clone()),
    );
    PackageBuilder::new(name, path)
        .expect("fixture names are valid")
        .finish(lib, test)
}

/// Write a file below `dir`, creating parents.
pub fn write_file(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}
