use serde::{Deserialize, Serialize};

use super::pipeline::PipelineConfig;

/// Root configuration structure, read from `.lazypipe.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LazypipeConfig {
    /// Settings applied to pipelines created by the tour
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: Option<LoggingConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset, e.g. `"lazypipe=debug"`
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "warn".to_string()
}

impl LazypipeConfig {
    /// Effective log filter, falling back to `warn`.
    pub fn log_filter(&self) -> String {
        self.logging
            .as_ref()
            .map(|l| l.filter.clone())
            .unwrap_or_else(default_filter)
    }
}
