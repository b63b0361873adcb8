use crate::args::{Cli, OutputFormat};
use crate::sample;
use anyhow::Context;
use owo_colors::OwoColorize;
use std::fs;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let root = sample::service_status();
    let msg = structcast_engine::parse_into_model(&root, &cli.indent, cli.max_depth, &cli.exclude)?;

    let report = match cli.format {
        OutputFormat::Text => msg.render(),
        OutputFormat::Json => serde_json::to_string_pretty(&msg)?,
    };

    println!("{}", report);

    // Create-or-truncate; a failed write aborts the process.
    fs::write(&cli.output, &report)
        .with_context(|| format!("failed to write report to {}", cli.output.display()))?;
    eprintln!(
        "{} {}",
        "Report written to".green(),
        cli.output.display().to_string().bold()
    );

    Ok(())
}
