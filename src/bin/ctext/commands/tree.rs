//! `ctext tree` command

use anyhow::Result;

use crate::cli::TreeArgs;
use crate::commands::load_package;
use ctext_package::ops::tree;
use ctext_package::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: TreeArgs) -> Result<()> {
    let (_, package) = load_package(ctx, &args.package)?;

    print!("{}", tree::render(&package, args.depth));
    Ok(())
}
