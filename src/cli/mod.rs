pub mod completions;
pub mod generate;
pub mod init;
pub mod palette;

use clap::{Parser, Subcommand};

/// avatar - Placeholder avatar generator
#[derive(Parser, Debug)]
#[command(name = "avatar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the requested verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an avatar PNG
    Generate(generate::GenerateArgs),

    /// List the background palette
    Palette(palette::PaletteArgs),

    /// Write a default avatar.yaml
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Style;

    #[test]
    fn test_cli_is_well_formed() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "avatar", "-vv", "generate", "--seed", "JD", "--text", "JD", "--style", "tradingbars",
            "--size", "128",
        ])
        .unwrap();

        assert_eq!(cli.log_filter(), "debug");
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.seed.as_deref(), Some("JD"));
        assert_eq!(args.style, Some(Style::Bars));
        assert_eq!(args.size, Some(128));
    }

    #[test]
    fn test_parse_negative_size() {
        let cli = Cli::try_parse_from(["avatar", "generate", "--size", "-5"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.size, Some(-5));
    }

    #[test]
    fn test_text_conflicts_with_initials() {
        let result = Cli::try_parse_from(["avatar", "generate", "--text", "A", "--initials"]);
        assert!(result.is_err());
    }
}
