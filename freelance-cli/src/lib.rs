pub mod cli;
pub mod output;

use std::io::Write;

use anyhow::{Context, Result};
use freelance_core::ScenarioRunner;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

/// Runs the scenarios described by `cli` and renders them to `writer`.
pub fn run<W: Write>(
    cli: &Cli,
    writer: W,
) -> Result<()> {
    let config = cli.scenario_config()?;
    debug!(?config, "scenario configuration");

    let scenarios = ScenarioRunner::new(config)
        .run(cli.revenue)
        .context("Failed to compute scenarios")?;

    match cli.format {
        OutputFormat::Text => output::write_text(writer, &scenarios),
        OutputFormat::Json => output::write_json(writer, &scenarios),
    }
    .context("Failed to write results")
}
