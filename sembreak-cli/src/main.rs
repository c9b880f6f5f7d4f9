//! sembreak binary entry point

use anyhow::Result;
use clap::Parser;
use sembreak_cli::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    sembreak_cli::run(&cli)
}
