//! ctext CLI - package descriptor driver for the ctext library

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use ctext_package::util::GlobalContext;
use ctext_package::PackageError;

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color && std::io::stderr().is_terminal();

    let ctx = match GlobalContext::new() {
        Ok(ctx) => ctx.with_verbose(cli.verbose).with_color(color),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, &ctx) {
        // Descriptor errors carry their own diagnostic; everything else is
        // printed with its context chain.
        match e.downcast_ref::<PackageError>() {
            Some(err) => eprint!("{}", err.to_diagnostic().format(ctx.color())),
            None => eprintln!("error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, ctx: &GlobalContext) -> Result<()> {
    // Set up logging
    let filter = if ctx.is_verbose() {
        EnvFilter::new("ctext=debug,ctext_package=debug")
    } else {
        EnvFilter::new("ctext=info,ctext_package=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ctx.color())
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Describe(args) => commands::describe::execute(ctx, args),
        Commands::Generate(args) => commands::generate::execute(ctx, args),
        Commands::Tree(args) => commands::tree::execute(ctx, args),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
