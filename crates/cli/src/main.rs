mod args;
mod commands;
pub mod defaults;
mod printing;
mod settings;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use popcat_catalog::Catalog;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use args::{ExportArgs, MapsArgs};
use commands::{debug, export, inspect, list, validate};
use settings::Settings;

/// popcat: a catalog of genomes, genetic maps and demographic models
///
/// Look up the species data and literature demographic histories a
/// coalescent simulation needs, check them, and export them as input
/// for a simulation engine.
#[derive(Parser, Debug)]
#[command(name = "popcat")]
#[command(author, version, about = "Catalog of genomes and demographic models for coalescent simulation", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// JSON settings file (cache directory, default species)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List species, genetic maps and demographic models.
    List,

    /// Show a species genome and its chromosome table.
    Genome {
        /// Species name (default: from settings)
        #[arg(short, long)]
        species: Option<String>,
    },

    /// Show genetic maps and the local file expected for each chromosome.
    Maps(MapsArgs),

    /// Show the parameters of a demographic model.
    Model {
        /// Model identifier (see `popcat list`)
        id: String,
    },

    /// Print the epoch-by-epoch history of a demographic model.
    ///
    /// Population sizes at the start and end of every epoch, growth rates,
    /// and the migration matrix in force.
    Debug {
        /// Model identifier (see `popcat list`)
        id: String,
    },

    /// Validate every registered demographic model.
    Validate,

    /// Export a simulation configuration as JSON.
    ///
    /// The output holds the model's populations, migration matrix and events
    /// together with the requested samples, ready for a coalescent engine.
    Export(ExportArgs),
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so exported JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;
    let catalog = Catalog::with_builtin().context("Failed to build the built-in catalog")?;
    tracing::info!(
        models = catalog.models().count(),
        species = catalog.genomes().count(),
        "catalog ready"
    );

    match cli.command {
        Commands::List => {
            list::list_catalog(&catalog);
        }
        Commands::Genome { species } => {
            let species = species.unwrap_or_else(|| settings.species.clone());
            inspect::show_genome(&catalog, &species)?;
        }
        Commands::Maps(args) => {
            let species = args.species.unwrap_or_else(|| settings.species.clone());
            let cache_dir = args.cache_dir.unwrap_or_else(|| settings.cache_dir.clone());
            inspect::show_maps(&catalog, &species, &cache_dir)?;
        }
        Commands::Model { id } => {
            inspect::show_model(&catalog, &id)?;
        }
        Commands::Debug { id } => {
            debug::show_history(&catalog, &id)?;
        }
        Commands::Validate => {
            validate::validate_models(&catalog)?;
        }
        Commands::Export(args) => {
            export::export_config(&catalog, &settings, &args)?;
        }
    }

    Ok(())
}
