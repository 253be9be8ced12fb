//! Command execution

use std::io::{self, Write};

use tracing::{debug, instrument};

use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::config::Settings;
use crate::errors::TreeError;
use crate::random::RandomSource;
use crate::sample;

/// Resolve settings from every layer and run the demonstration on stdout.
#[instrument(level = "debug", skip(cli))]
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = cli.apply_to(Settings::load(cli.config.as_deref())?);
    debug!(?settings, "effective settings");

    if cli.show_config {
        output::info(&settings.to_toml()?);
        return Ok(());
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_settings(&settings, &mut out)
}

/// Run the demonstration with fully resolved settings, writing to `out`.
#[instrument(level = "debug", skip(out))]
pub fn run_with_settings<W: Write + ?Sized>(settings: &Settings, out: &mut W) -> CliResult<()> {
    let mut source = RandomSource::from_seed(settings.seed, settings.mean, settings.std_dev)?;
    sample::run(&mut source, &settings.labels(), settings.format, out)?;
    out.flush().map_err(TreeError::from)?;
    Ok(())
}
