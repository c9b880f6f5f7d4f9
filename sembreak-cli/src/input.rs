//! Input reading utilities

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Text reader with UTF-8 validation
pub struct TextReader;

impl TextReader {
    /// Read a file as UTF-8 text
    pub fn read_file(path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read standard input to end as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;

        Ok(content)
    }

    /// Read from the given file, or stdin when no file is given
    pub fn read(path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => Self::read_file(path),
            None => Self::read_stdin(),
        }
    }
}
