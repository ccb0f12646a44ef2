use clap::Parser;
use miette::Result;
use cardface::cli::{Cli, Commands};
use cardface::output::Printer;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Classify(args) => cardface::cli::classify::run(args, &printer)?,
        Commands::Frame(args) => cardface::cli::frame::run(args, &printer)?,
        Commands::Layout(args) => cardface::cli::layout::run(args, &printer)?,
        Commands::CostImage(args) => cardface::cli::cost_image::run(args, &printer)?,
        Commands::Validate(args) => cardface::cli::validate::run(args, &printer)?,
        Commands::Init(args) => cardface::cli::init::run(args, &printer)?,
        Commands::Completions(args) => cardface::cli::completions::run(args)?,
    }

    Ok(())
}
