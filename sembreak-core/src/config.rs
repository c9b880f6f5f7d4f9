//! Break configuration

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default target maximum line width.
pub const DEFAULT_MAX_WIDTH: usize = 80;

/// Configuration for the semantic breaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakConfig {
    /// Target maximum line width in characters. Lines are kept as close to
    /// this width as possible without exceeding it where avoidable.
    max_width: usize,
}

impl Default for BreakConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

impl BreakConfig {
    /// Create a builder.
    pub fn builder() -> BreakConfigBuilder {
        BreakConfigBuilder::default()
    }

    /// Create a configuration with the given width, validating it.
    pub fn with_max_width(max_width: usize) -> Result<Self> {
        Self::builder().max_width(max_width).build()
    }

    /// The target maximum line width.
    pub fn max_width(&self) -> usize {
        self.max_width
    }
}

/// Builder for [`BreakConfig`].
#[derive(Debug, Default)]
pub struct BreakConfigBuilder {
    max_width: Option<usize>,
}

impl BreakConfigBuilder {
    /// Set the target maximum line width.
    pub fn max_width(mut self, max_width: usize) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Build the configuration, rejecting a zero width.
    pub fn build(self) -> Result<BreakConfig> {
        let max_width = self.max_width.unwrap_or(DEFAULT_MAX_WIDTH);
        if max_width == 0 {
            return Err(CoreError::InvalidConfig {
                reason: "max_width must be positive".to_string(),
            });
        }
        Ok(BreakConfig { max_width })
    }
}
