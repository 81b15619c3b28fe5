use avatar::cli::{Cli, Commands};
use avatar::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Generate(args) => avatar::cli::generate::run(args, &printer)?,
        Commands::Palette(args) => avatar::cli::palette::run(args, &printer)?,
        Commands::Init(args) => avatar::cli::init::run(args, &printer)?,
        Commands::Completions(args) => avatar::cli::completions::run(args)?,
    }

    Ok(())
}
