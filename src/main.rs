use clap::Parser;
use miette::Result;
use pinwheel::cli::{Cli, Commands};
use pinwheel::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => pinwheel::cli::render::run(args, &printer)?,
        Commands::Preview(args) => pinwheel::cli::preview::run(args, &printer)?,
        Commands::Presets(args) => pinwheel::cli::presets::run(args)?,
        Commands::Completions(args) => pinwheel::cli::completions::run(args)?,
    }

    Ok(())
}
