//! sembreak CLI library
//!
//! This library provides the command-line interface for the sembreak
//! semantic line breaking tool.

pub mod args;
pub mod input;
pub mod output;

use anyhow::Result;
use sembreak_core::{BreakConfig, SemanticBreaker};

use args::Cli;
use input::TextReader;
use output::LineSink;

/// Run the CLI end to end: read input, reflow it, emit one line per
/// output line.
pub fn run(cli: &Cli) -> Result<()> {
    log::info!(
        "reflowing to max width {} from {}",
        cli.max_line_length,
        cli.input
            .as_deref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    );

    let config = BreakConfig::with_max_width(cli.max_line_length as usize)?;
    let breaker = SemanticBreaker::with_config(config);

    let text = TextReader::read(cli.input.as_deref())?;
    let lines = breaker.reflow(&text);
    log::debug!("emitting {} lines", lines.len());

    match cli.output.as_deref() {
        Some(path) => {
            let mut sink = LineSink::file(path)?;
            for line in &lines {
                sink.write_line(line)?;
            }
            sink.finish()
        }
        None => {
            let mut sink = LineSink::stdout();
            for line in &lines {
                sink.write_line(line)?;
            }
            sink.finish()
        }
    }
}
