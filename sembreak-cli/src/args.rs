//! Command-line argument definitions

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Reformat text with semantic line breaking.
///
/// Reads free-form text, splits it into sentences, and re-wraps each
/// sentence at phrase boundaries (commas, conjunctions, parentheses) so
/// that every output line sits close to the target width.
#[derive(Debug, Parser)]
#[command(name = "sembreak", version, about)]
pub struct Cli {
    /// Target maximum line length
    #[arg(
        value_name = "MAX_LINE_LENGTH",
        value_parser = clap::value_parser!(u32).range(1..),
        default_value_t = 80
    )]
    pub max_line_length: u32,

    /// Input file (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_width_80_and_stdio() {
        let cli = Cli::parse_from(["sembreak"]);
        assert_eq!(cli.max_line_length, 80);
        assert!(cli.input.is_none());
        assert!(cli.output.is_none());
    }

    #[test]
    fn positional_width_is_accepted() {
        let cli = Cli::parse_from(["sembreak", "40"]);
        assert_eq!(cli.max_line_length, 40);
    }

    #[test]
    fn non_integer_width_is_rejected() {
        assert!(Cli::try_parse_from(["sembreak", "forty"]).is_err());
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["sembreak", "0"]).is_err());
    }

    #[test]
    fn input_and_output_flags_parse() {
        let cli = Cli::parse_from(["sembreak", "-i", "in.txt", "-o", "out.txt"]);
        assert_eq!(cli.input.unwrap(), PathBuf::from("in.txt"));
        assert_eq!(cli.output.unwrap(), PathBuf::from("out.txt"));
    }

    #[test]
    fn verbosity_counts_occurrences() {
        let cli = Cli::parse_from(["sembreak", "-vvv"]);
        assert_eq!(cli.verbose, 3);
    }
}
