//! docsort CLI - Sort document listings into per-project tables.

use clap::Parser;
use docsort_cli::commands::{self, process::effective_config};
use docsort_cli::logging::init_logging;
use docsort_cli::{Cli, Command, Config, Formatter};
use tracing::debug;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> docsort_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // An explicit config file must load; the default one may be absent or broken
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_default(),
    };

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    // Batch runs log next to the tables they write
    let pipeline_config = match &cli.command {
        Command::Process(args) => effective_config(args, &config.pipeline),
        _ => config.pipeline.clone(),
    };
    let log_file = match &cli.command {
        Command::Process(_) => Some(config.log_file(&pipeline_config.output_dir)),
        _ => config.settings.log_file.clone(),
    };
    let target = init_logging(&config.settings.log_level, log_file.as_deref());
    debug!("Logging to {:?}", target);

    let taxonomy_path = cli.taxonomy.as_deref().or(config.settings.taxonomy.as_deref());
    let taxonomy = commands::load_taxonomy(taxonomy_path)?;

    // Handle commands
    match cli.command {
        Command::Process(args) => {
            commands::execute_process(args, pipeline_config, taxonomy, &formatter)?;
        }
        Command::Classify(args) => {
            commands::execute_classify(args, taxonomy, &formatter)?;
        }
        Command::Extract(args) => {
            commands::execute_extract(args, &taxonomy, &formatter)?;
        }
        Command::Search(args) => {
            commands::execute_search(args, taxonomy, &formatter)?;
        }
        Command::Taxonomy(args) => {
            commands::execute_taxonomy(args, &taxonomy, &formatter)?;
        }
    }

    Ok(())
}
