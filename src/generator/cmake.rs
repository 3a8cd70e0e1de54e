//! CMake project output.
//!
//! Every library reachable from the package becomes a static library built
//! from `source/main/cpp`, exporting `source/main/include`. Only the root
//! package's unit-test target is emitted.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;

use crate::core::{BuildTarget, Package, TargetKind};
use crate::generator::plan::TargetGraph;

pub const FILE_NAME: &str = "CMakeLists.txt";

/// Name of the cache variable holding the repository checkout directory.
pub fn root_variable(package: &Package) -> String {
    format!(
        "{}_WORKSPACE_ROOT",
        package.name().to_uppercase().replace('-', "_")
    )
}

/// Render `CMakeLists.txt` for a package.
pub fn render(package: &Package, workspace_dir: &Path) -> Result<String> {
    let plan = TargetGraph::from_package(package);
    let root_var = root_variable(package);
    let workspace = workspace_dir.to_string_lossy().replace('\\', "/");

    let mut out = String::new();
    writeln!(out, "# Generated by ctext-package. Do not edit.")?;
    writeln!(out, "cmake_minimum_required(VERSION 3.16)")?;
    writeln!(out, "project({} LANGUAGES CXX)", package.name())?;
    writeln!(out)?;
    writeln!(
        out,
        "set({} \"{}\" CACHE PATH \"Directory the package repositories are checked out under\")",
        root_var, workspace
    )?;
    writeln!(out, "enable_testing()")?;

    for target in plan.link_order() {
        writeln!(out)?;
        write_target(&mut out, &target, &root_var)?;
    }

    tracing::debug!("rendered {} targets for `{}`", plan.len(), package.name());
    Ok(out)
}

fn write_target(out: &mut String, target: &BuildTarget, root_var: &str) -> Result<()> {
    let name = target.name();
    let dir = format!("${{{}}}/{}", root_var, target.path());
    let kind = target.kind();

    writeln!(out, "# {} ({})", name, target.path())?;
    writeln!(
        out,
        "file(GLOB_RECURSE {}_SOURCES CONFIGURE_DEPENDS \"{}/{}/*.cpp\")",
        name,
        dir,
        kind.source_dir()
    )?;

    let visibility = match kind {
        TargetKind::Library => {
            writeln!(out, "add_library({} STATIC ${{{}_SOURCES}})", name, name)?;
            "PUBLIC"
        }
        TargetKind::Test => {
            writeln!(out, "add_executable({} ${{{}_SOURCES}})", name, name)?;
            "PRIVATE"
        }
    };

    writeln!(
        out,
        "target_include_directories({} {} \"{}/{}\")",
        name,
        visibility,
        dir,
        kind.include_dir()
    )?;

    let deps = target.dependency_names();
    if !deps.is_empty() {
        writeln!(
            out,
            "target_link_libraries({} {} {})",
            name,
            visibility,
            deps.join(" ")
        )?;
    }

    if kind == TargetKind::Test {
        writeln!(out, "add_test(NAME {} COMMAND {})", name, name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::describe::{get_package, PackageConfig};
    use crate::test_support::default_registry;

    fn render_default() -> String {
        let pkg = get_package(&PackageConfig::default(), &default_registry()).unwrap();
        render(&pkg, Path::new("/work/src")).unwrap()
    }

    #[test]
    fn test_header() {
        let out = render_default();
        assert!(out.contains("project(ctext LANGUAGES CXX)"));
        assert!(out.contains("set(CTEXT_WORKSPACE_ROOT \"/work/src\" CACHE PATH"));
        assert!(out.contains("enable_testing()"));
    }

    #[test]
    fn test_library_and_test_targets() {
        let out = render_default();

        assert!(out.contains("add_library(cbase STATIC ${cbase_SOURCES})"));
        assert!(out.contains(
            "file(GLOB_RECURSE ctext_SOURCES CONFIGURE_DEPENDS \
             \"${CTEXT_WORKSPACE_ROOT}/github.com/jurgen-kluft/ctext/source/main/cpp/*.cpp\")"
        ));
        assert!(out.contains("target_link_libraries(ctext PUBLIC cbase ccore)"));
        assert!(out.contains("add_executable(ctext_test ${ctext_test_SOURCES})"));
        assert!(out.contains("target_link_libraries(ctext_test PRIVATE cunittest ccore cbase ctext)"));
        assert!(out.contains("add_test(NAME ctext_test COMMAND ctext_test)"));
        // upstream unit tests are not part of the project
        assert!(!out.contains("cbase_test"));
    }

    #[test]
    fn test_upstreams_declared_before_use() {
        let out = render_default();
        let cbase = out.find("add_library(cbase ").unwrap();
        let ctext = out.find("add_library(ctext ").unwrap();
        let test = out.find("add_executable(ctext_test ").unwrap();
        assert!(cbase < ctext);
        assert!(ctext < test);
    }

    #[test]
    fn test_leaf_library_has_no_link_line() {
        let out = render_default();
        assert!(!out.contains("target_link_libraries(cbase"));
    }

    #[test]
    fn test_root_variable_name() {
        let config = PackageConfig {
            name: "my-text".to_string(),
            ..PackageConfig::default()
        };
        let pkg = get_package(&config, &default_registry()).unwrap();
        assert_eq!(root_variable(&pkg), "MY_TEXT_WORKSPACE_ROOT");
    }
}
