//! JSON descriptor output.

use anyhow::{Context, Result};

use crate::core::Package;

/// File name of the JSON descriptor for a package.
pub fn file_name(package: &Package) -> String {
    format!("{}.package.json", package.name())
}

/// Render the descriptor. Targets and packages are referenced by name.
pub fn render(package: &Package) -> Result<String> {
    let mut json = serde_json::to_string_pretty(package)
        .with_context(|| format!("failed to serialize package `{}`", package.name()))?;
    json.push('\n');
    Ok(json)
}
