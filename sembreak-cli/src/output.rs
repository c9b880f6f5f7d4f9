//! Line-oriented output sink

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes output lines to a destination, one per call, plain text only.
#[derive(Debug)]
pub struct LineSink<W: Write> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Create a sink over any writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write one output line
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    /// Flush buffered output
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

impl LineSink<io::Stdout> {
    /// Create a sink that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl LineSink<BufWriter<File>> {
    /// Create a sink that writes to a file
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}
