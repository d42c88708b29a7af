use clap::Parser;
use miette::Result;
use ringside::cli::{Cli, Commands};
use ringside::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Render(args) => ringside::cli::render::run(args, &printer)?,
        Commands::Plan(args) => ringside::cli::plan::run(args)?,
        Commands::Validate(args) => ringside::cli::validate::run(args, &printer)?,
        Commands::Presets(args) => ringside::cli::presets::run(args)?,
        Commands::Completions(args) => ringside::cli::completions::run(args)?,
    }

    Ok(())
}
