//! One-shot incremental construction of a pipeline.
//!
//! ```rust
//! use lazypipe::Pipeline;
//!
//! let mut builder = Pipeline::builder();
//! builder.add("a").unwrap().add("b").unwrap().add("c").unwrap();
//! let letters = builder.build().unwrap();
//!
//! assert_eq!(letters.to_array().unwrap(), vec!["a", "b", "c"]);
//! assert!(builder.build().unwrap_err().is_illegal_state());
//! ```

use super::Pipeline;
use crate::config::PipelineConfig;
use crate::errors::{Error, Result};

/// Accumulates elements in call order until [`build`](Self::build).
///
/// After `build`, every further `add`, `accept` or `build` fails with
/// `IllegalState`.
#[derive(Debug)]
pub struct PipelineBuilder<T> {
    elements: Vec<T>,
    config: PipelineConfig,
    built: bool,
}

impl<T: 'static> PipelineBuilder<T> {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            config: PipelineConfig::default(),
            built: false,
        }
    }

    /// Append an element, returning the builder for chaining.
    pub fn add(&mut self, value: T) -> Result<&mut Self> {
        self.accept(value)?;
        Ok(self)
    }

    /// Append an element.
    pub fn accept(&mut self, value: T) -> Result<()> {
        self.ensure_open("add")?;
        self.elements.push(value);
        Ok(())
    }

    /// Append every element of `values`, in order.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) -> Result<&mut Self> {
        self.ensure_open("add_all")?;
        self.elements.extend(values);
        Ok(self)
    }

    /// Settings for the pipeline produced by `build`.
    pub fn with_config(&mut self, config: PipelineConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Finalize the builder and return an open pipeline over its elements.
    pub fn build(&mut self) -> Result<Pipeline<T>> {
        self.ensure_open("build")?;
        self.built = true;
        tracing::debug!(elements = self.elements.len(), "Built pipeline");
        let elements = std::mem::take(&mut self.elements);
        Ok(Pipeline::of(elements).with_config(self.config.clone()))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    fn ensure_open(&self, operation: &str) -> Result<()> {
        if self.built {
            return Err(Error::illegal_state(format!(
                "builder has already been built (attempted {operation})"
            )));
        }
        Ok(())
    }
}

impl<T: 'static> Default for PipelineBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
