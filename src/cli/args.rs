//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::config::{OutputFormat, Settings};

/// Randomize, print and merge two statically composed trees
#[derive(Parser, Debug)]
#[command(name = "treescan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Debug level: -d info, -d -d debug, -d -d -d trace (logs go to stderr)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print author and version information
    #[arg(long)]
    pub info: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,

    /// Config file (default: $XDG_CONFIG_HOME/treescan/treescan.toml)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible values
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Mean of the normal distribution
    #[arg(long)]
    pub mean: Option<f64>,

    /// Standard deviation of the normal distribution
    #[arg(long)]
    pub std_dev: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Command line flags override every other configuration layer.
    pub fn apply_to(&self, mut settings: Settings) -> Settings {
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(mean) = self.mean {
            settings.mean = mean;
        }
        if let Some(std_dev) = self.std_dev {
            settings.std_dev = std_dev;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_flags_when_applied_then_override_settings() {
        let cli = Cli::parse_from(["treescan", "-s", "9", "--std-dev", "2.5", "-f", "tree"]);

        let settings = cli.apply_to(Settings::default());

        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.std_dev, 2.5);
        assert_eq!(settings.mean, 100.0);
        assert_eq!(settings.format, OutputFormat::Tree);
    }

    #[test]
    fn given_repeated_debug_flag_when_parsed_then_counts() {
        let cli = Cli::parse_from(["treescan", "-ddd"]);
        assert_eq!(cli.debug, 3);
        assert!(cli.config.is_none());
    }
}
