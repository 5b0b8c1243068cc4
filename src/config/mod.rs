//! Configuration for pipeline evaluation and the tour binary.
//!
//! Configuration lives in an optional `.lazypipe.toml`, found by searching
//! the current directory and its ancestors:
//!
//! ```toml
//! [pipeline]
//! max_buffered = 100000
//! trace_elements = false
//!
//! [logging]
//! filter = "lazypipe=debug"
//! ```
//!
//! Every field has a default, so an empty or missing file is valid.

mod core;
mod loader;
pub mod pipeline;

pub use self::core::{LazypipeConfig, LoggingConfig};
pub use loader::{
    directory_ancestors, find_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};
pub use pipeline::PipelineConfig;
