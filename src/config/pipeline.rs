//! Evaluation settings carried by every pipeline.
//!
//! # Configuration Example
//!
//! ```toml
//! [pipeline]
//! max_buffered = 100000
//! trace_elements = false
//! ```

use serde::{Deserialize, Serialize};

/// Settings applied while a pipeline is evaluated.
///
/// A pipeline receives its config through `Pipeline::with_config`; every stage
/// derived from it inherits the same settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Upper bound on elements held by buffering stages (`sorted`, `distinct`).
    ///
    /// `None` (the default) means unbounded: sorting an infinite source never
    /// terminates. With a bound, the stage fails with `BufferLimitExceeded`
    /// instead.
    #[serde(default)]
    pub max_buffered: Option<usize>,

    /// Emit a `trace` event for every element a terminal operation pulls
    /// (default: false)
    #[serde(default = "default_trace_elements")]
    pub trace_elements: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_buffered: None,
            trace_elements: default_trace_elements(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config that caps buffering stages at `limit` elements.
    pub fn bounded(limit: usize) -> Self {
        Self {
            max_buffered: Some(limit),
            ..Default::default()
        }
    }

    pub fn with_trace_elements(mut self, enabled: bool) -> Self {
        self.trace_elements = enabled;
        self
    }
}

fn default_trace_elements() -> bool {
    false
}
