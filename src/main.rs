use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod categories;
mod directory;
mod heatmap;
mod model;
mod region;
mod utils;

use model::{HeatmapEntry, LocationRecord, MenuRecord};
use region::Region;

/// Builds a regional menu price heatmap from scraped store data.
///
/// Without a subcommand this runs the heatmap builder.
#[derive(Debug, Parser)]
#[command(name = "pricemap", args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    heatmap: heatmap::HeatmapArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scrape the state directory into a name -> url mapping
    States {
        #[arg(long, default_value = directory::OUTPUT_PATH)]
        output: PathBuf,
    },
    /// List the top-level menu categories of one store
    Menu {
        /// Store number (default: first store in the locations file)
        #[arg(long)]
        store: Option<String>,
        #[arg(long, default_value = model::LOCATIONS_PATH)]
        locations: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        None => heatmap::main(&cli.heatmap)?,
        Some(Command::States { output }) => directory::main(&output)?,
        Some(Command::Menu { store, locations }) => categories::main(&locations, store)?,
    }

    Ok(())
}
