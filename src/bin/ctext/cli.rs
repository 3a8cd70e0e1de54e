//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use ctext_package::generator::GenerateFormat;

/// ctext - package descriptor and project generator for the ctext library
#[derive(Parser)]
#[command(name = "ctext")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the package descriptor and print it
    Describe(DescribeArgs),

    /// Build the package descriptor and generate project files
    Generate(GenerateArgs),

    /// Display the target dependency tree
    Tree(TreeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Settings that select and shape the package, on top of the config files.
#[derive(Args, Debug, Default)]
pub struct PackageArgs {
    /// Extra config file, applied over .ctext/config.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package name
    #[arg(long)]
    pub name: Option<String>,

    /// Repository root the packages live under
    #[arg(long, value_name = "PATH")]
    pub repo_root: Option<String>,

    /// Do not link the core package
    #[arg(long)]
    pub no_core: bool,

    /// Base package to link against (repeatable, replaces the configured list)
    #[arg(long = "base", value_name = "NAME", conflicts_with = "no_base")]
    pub base: Vec<String>,

    /// Link against no base packages
    #[arg(long)]
    pub no_base: bool,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Print the descriptor as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub package: PackageArgs,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Output format: json, cmake or all
    #[arg(short, long)]
    pub format: Option<GenerateFormat>,

    /// Output directory (defaults to .ctext/generated)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Directory the package repositories are checked out under
    #[arg(long, value_name = "DIR")]
    pub workspace_dir: Option<PathBuf>,

    #[command(flatten)]
    pub package: PackageArgs,
}

#[derive(Args)]
pub struct TreeArgs {
    /// Maximum depth to display
    #[arg(short, long)]
    pub depth: Option<usize>,

    #[command(flatten)]
    pub package: PackageArgs,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
