use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::LazypipeConfig;

#[derive(Parser, Debug)]
#[command(name = "lazypipe")]
#[command(about = "Guided tour of lazy pipelines, optionals and composable functions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which part of the tour to run (defaults to all of it)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to the nearest .lazypipe.toml)
    #[arg(long, global = true, env = "LAZYPIPE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Optional values: presence checks, fallbacks, chained lookups
    Optional,
    /// Function composition, predicates, operators and consumers
    Function,
    /// Lazy single-use pipelines
    Pipeline,
    /// Every section in order
    All,
}

impl Cli {
    pub fn section(&self) -> Commands {
        self.command.unwrap_or(Commands::All)
    }
}

/// Pure function choosing the log directive from `-v` flags and config.
pub fn log_directive(verbose: u8, config: &LazypipeConfig) -> String {
    match verbose {
        0 => config.log_filter(),
        1 => "lazypipe=debug".to_string(),
        _ => "lazypipe=trace".to_string(),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over everything else.
pub fn init_logging(verbose: u8, config: &LazypipeConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbose, config)));

    // Already installed (tests, embedding) is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
