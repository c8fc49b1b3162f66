//! The billing pipeline: read, match, render.

use std::io::Write;

use anyhow::{Context, Result};
use fb_core::{LineParser, LogReader};

use crate::cli::Cli;
use crate::config::Config;
use crate::report::{format_report, format_report_json};

/// Runs the pipeline for `cli` and writes the report to `out`.
///
/// Nothing is written to `out` unless the whole log was read successfully.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if let Some(path) = cli.config.as_deref() {
        anyhow::ensure!(
            path.is_file(),
            "config file not found: {}",
            path.display()
        );
    }
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let reader = LogReader::new(LineParser::new(config.kind_matching));
    let report = reader.read_path(&cli.log_file)?;
    let results = fb_core::bill(&report.stream);

    let rendered = if cli.json {
        let mut json = format_report_json(&results, report.stream.landmarks())?;
        json.push('\n');
        json
    } else {
        format_report(&results)
    };

    out.write_all(rendered.as_bytes())
        .context("failed to write report")?;
    out.flush().context("failed to write report")?;
    Ok(())
}
