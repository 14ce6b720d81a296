use clap::Parser;
use miette::Result;
use veil::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate(args) => veil::cli::simulate::run(args)?,
        Commands::Reveal(args) => veil::cli::reveal::run(args)?,
        Commands::Completions(args) => veil::cli::completions::run(args)?,
    }

    Ok(())
}
