//! `ctext generate` command

use anyhow::Result;

use crate::cli::GenerateArgs;
use crate::commands::load_package;
use ctext_package::generator::{self, GenerateOptions};
use ctext_package::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: GenerateArgs) -> Result<()> {
    let (config, package) = load_package(ctx, &args.package)?;

    // CLI > config > defaults
    let format = args.format.or_else(|| config.format()).unwrap_or_default();
    let output_dir = args
        .output
        .or(config.generate.output_dir)
        .unwrap_or_else(|| ctx.default_output_dir());
    let workspace_dir = args
        .workspace_dir
        .or(config.generate.workspace_dir)
        .unwrap_or_else(|| ctx.cwd().to_path_buf());

    let generator = generator::init(GenerateOptions {
        format,
        output_dir: ctx.cwd().join(output_dir),
        workspace_dir: ctx.cwd().join(workspace_dir),
    })?;

    for path in generator.generate(&package)? {
        println!("{}", path.display());
    }

    Ok(())
}
