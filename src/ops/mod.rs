//! High-level operations.
//!
//! This module contains the descriptor builder and the views the driver
//! commands print.

pub mod describe;
pub mod tree;

pub use describe::{build_package, get_package, ConfiguredPackage, PackageConfig};
