//! `ctext describe` command

use anyhow::Result;

use crate::cli::DescribeArgs;
use crate::commands::load_package;
use ctext_package::generator::json;
use ctext_package::util::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: DescribeArgs) -> Result<()> {
    let (_, package) = load_package(ctx, &args.package)?;

    if args.json {
        print!("{}", json::render(&package)?);
        return Ok(());
    }

    println!("package  {}", package.name());
    println!("path     {}", package.path());

    let upstream: Vec<_> = package.packages().iter().map(|p| p.name()).collect();
    println!("upstream {}", upstream.join(", "));
    if ctx.is_verbose() {
        for pkg in package.packages() {
            println!("         {} ({})", pkg.name(), pkg.path());
        }
    }

    for target in package.targets() {
        println!(
            "{:<8} {} -> [{}]",
            target.kind().to_string(),
            target.name(),
            target.dependency_names().join(", ")
        );
    }

    Ok(())
}
