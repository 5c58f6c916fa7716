use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "vitae", version, about)]
struct Cli {
    /// Path to the source resume document (JSON)
    source: PathBuf,

    /// Destination path; may be the same as the source
    dest: PathBuf,

    /// Compute and print the manifest without persisting anything
    #[arg(long)]
    preview: bool,

    /// Validate only; report violations and write nothing
    #[arg(long, conflicts_with = "preview")]
    check: bool,
}

fn main() -> Result<()> {
    // Keep the handle alive for the whole run so buffered records flush.
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let cli = Cli::parse();

    if cli.check {
        commands::run_check(&cli.source)
    } else {
        commands::run_build(&cli.source, &cli.dest, cli.preview)
    }
}
