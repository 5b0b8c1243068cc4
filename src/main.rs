use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use lazypipe::cli::{init_logging, Cli, Commands};
use lazypipe::config::{load_config, load_config_from_path, LazypipeConfig};
use lazypipe::tour::{self, Section};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    let config = resolve_config(&cli)?;
    init_logging(cli.verbose, &config);
    tracing::debug!(?config, "Starting tour");

    let sections = match cli.section() {
        Commands::Optional => vec![tour::optional_section()?],
        Commands::Function => vec![tour::function_section()?],
        Commands::Pipeline => vec![tour::pipeline_section(&config.pipeline)?],
        Commands::All => vec![
            tour::optional_section()?,
            tour::function_section()?,
            tour::pipeline_section(&config.pipeline)?,
        ],
    };

    for section in &sections {
        print_section(section);
    }

    Ok(())
}

// An explicit --config must load; otherwise fall back to discovery
fn resolve_config(cli: &Cli) -> Result<LazypipeConfig> {
    match &cli.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(load_config()),
    }
}

fn print_section(section: &Section) {
    println!("{}", format!("== {} ==", section.name).bold().cyan());
    for step in &section.steps {
        println!("  {} {}", step.title.dimmed(), "→".dimmed());
        println!("      {}", step.outcome.green());
    }
    println!();
}
