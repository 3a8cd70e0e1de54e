//! Project generation.
//!
//! The driver calls [`init`] once and then [`Generator::generate`] with the
//! finished package descriptor.

pub mod cmake;
pub mod json;
pub mod plan;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

use crate::core::Package;
use crate::util::fs::{ensure_dir, write_if_changed};

pub use plan::TargetGraph;

/// What to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerateFormat {
    /// JSON descriptor
    Json,
    /// CMakeLists.txt
    #[default]
    CMake,
    /// Both
    All,
}

impl GenerateFormat {
    fn emits_json(self) -> bool {
        matches!(self, GenerateFormat::Json | GenerateFormat::All)
    }

    fn emits_cmake(self) -> bool {
        matches!(self, GenerateFormat::CMake | GenerateFormat::All)
    }
}

impl FromStr for GenerateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(GenerateFormat::Json),
            "cmake" => Ok(GenerateFormat::CMake),
            "all" => Ok(GenerateFormat::All),
            other => Err(format!(
                "unknown format `{}` (expected json, cmake or all)",
                other
            )),
        }
    }
}

impl fmt::Display for GenerateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateFormat::Json => write!(f, "json"),
            GenerateFormat::CMake => write!(f, "cmake"),
            GenerateFormat::All => write!(f, "all"),
        }
    }
}

/// Generator settings.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub format: GenerateFormat,

    /// Where generated files go
    pub output_dir: PathBuf,

    /// Where the package repositories are checked out
    pub workspace_dir: PathBuf,
}

/// An initialised generator.
#[derive(Debug)]
pub struct Generator {
    options: GenerateOptions,
}

/// Prepare the output directory.
pub fn init(options: GenerateOptions) -> Result<Generator> {
    ensure_dir(&options.output_dir)?;
    tracing::info!(
        "Generating {} output in {}",
        options.format,
        options.output_dir.display()
    );
    Ok(Generator { options })
}

impl Generator {
    pub fn options(&self) -> &GenerateOptions {
        &self.options
    }

    pub fn output_dir(&self) -> &Path {
        &self.options.output_dir
    }

    /// Write the files for `package`; returns every file path produced,
    /// including files that were already up to date.
    pub fn generate(&self, package: &Package) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        if self.options.format.emits_json() {
            let path = self.options.output_dir.join(json::file_name(package));
            self.emit(&path, &json::render(package)?)?;
            written.push(path);
        }

        if self.options.format.emits_cmake() {
            let path = self.options.output_dir.join(cmake::FILE_NAME);
            self.emit(&path, &cmake::render(package, &self.options.workspace_dir)?)?;
            written.push(path);
        }

        Ok(written)
    }

    fn emit(&self, path: &Path, contents: &str) -> Result<()> {
        if write_if_changed(path, contents)? {
            tracing::info!("Wrote {}", path.display());
        }
        Ok(())
    }
}
