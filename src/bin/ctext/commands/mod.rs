//! Command implementations

pub mod completions;
pub mod describe;
pub mod generate;
pub mod tree;

use anyhow::Result;

use crate::cli::PackageArgs;
use ctext_package::core::{Package, RepoPath};
use ctext_package::ops::describe::{get_package, PackageConfig};
use ctext_package::util::{Config, GlobalContext};

/// Apply command-line overrides to the configured package settings.
pub fn apply_overrides(mut config: PackageConfig, args: &PackageArgs) -> PackageConfig {
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    if let Some(root) = &args.repo_root {
        config.repo_root = RepoPath::parse(root);
    }
    if args.no_core {
        config.include_core = false;
    }
    if args.no_base {
        config.base.clear();
    } else if !args.base.is_empty() {
        config.base = args.base.clone();
    }
    config
}

/// Load configuration and build the package descriptor.
pub fn load_package(ctx: &GlobalContext, args: &PackageArgs) -> Result<(Config, Package)> {
    let config = ctx.load_config(args.config.as_deref())?;
    let package_config = apply_overrides(config.package_config(), args);
    let registry = config.registry(&package_config.repo_root);

    tracing::debug!(
        "building `{}` with upstreams [{}]",
        package_config.name,
        package_config.upstream_names().join(", ")
    );

    let package = get_package(&package_config, &registry)?;
    Ok((config, package))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides() {
        let args = PackageArgs {
            name: Some("xtext".to_string()),
            repo_root: Some("a\\b".to_string()),
            no_core: true,
            base: vec!["xbase".to_string()],
            ..PackageArgs::default()
        };
        let config = apply_overrides(PackageConfig::default(), &args);
        assert_eq!(config.name, "xtext");
        assert_eq!(config.repo_root.to_string(), "a/b");
        assert!(!config.include_core);
        assert_eq!(config.base, vec!["xbase"]);
    }

    #[test]
    fn test_no_base_clears() {
        let args = PackageArgs {
            no_base: true,
            ..PackageArgs::default()
        };
        assert!(apply_overrides(PackageConfig::default(), &args).base.is_empty());
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let config = apply_overrides(PackageConfig::default(), &PackageArgs::default());
        assert_eq!(config, PackageConfig::default());
    }
}
