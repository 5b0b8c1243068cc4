// Export modules for library usage
pub mod cli;
pub mod config;
pub mod errors;
pub mod function;
pub mod optional;
pub mod pipeline;
pub mod samples;
pub mod tour;

// Re-export commonly used types
pub use crate::errors::{Error, Result};
pub use crate::function::{
    BiFunction, BinaryOperator, Comparator, Consumer, Function, Predicate, Supplier, UnaryOperator,
};
pub use crate::optional::Optional;
pub use crate::pipeline::{Pipeline, PipelineBuilder, PipelineIter};

pub use crate::config::{LazypipeConfig, PipelineConfig};
