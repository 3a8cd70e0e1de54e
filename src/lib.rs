//! ctext-package - package descriptor and project generator for ctext.
//!
//! This crate builds the package descriptor of the ctext C++ library (or
//! any package configured the same way): its main library, its unit-test
//! executable and the upstream packages both link against. The descriptor
//! can then be written out as JSON or as a CMake project.

pub mod core;
pub mod generator;
pub mod ops;
pub mod resolver;
pub mod util;

/// Fixtures for unit tests.
#[cfg(test)]
pub mod test_support;

pub use core::{
    package::Package, path::RepoPath, target::BuildTarget, target::TargetKind,
};

pub use ops::describe::{get_package, PackageConfig};
pub use resolver::{PackageError, Registry};
pub use util::context::GlobalContext;
