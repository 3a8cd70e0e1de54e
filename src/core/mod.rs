//! Core data structures.
//!
//! This module contains the descriptor model:
//! - Repository paths (RepoPath)
//! - Build targets (library and unit test)
//! - Packages and the builder that assembles them

pub mod package;
pub mod path;
pub mod target;

pub use package::{Package, PackageBuilder};
pub use path::RepoPath;
pub use target::{BuildTarget, TargetKind};
