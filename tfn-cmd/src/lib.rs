//! Command implementations for the trout fishing navigator CLI.
//!
//! Provides the interactive `navigate` session and a one-shot `lookup`
//! for scripted use.

use clap::Subcommand;

pub mod datasets;
pub mod lookup;
pub mod navigate;

#[derive(Subcommand)]
pub enum Command {
    /// Interactively find the nearest trout-stocked waterbody for a zipcode
    Navigate {
        #[command(flatten)]
        paths: datasets::DatasetPaths,
    },

    /// Resolve a single zipcode without the interactive prompt
    Lookup {
        /// Zipcode to resolve
        #[arg(short, long)]
        zip: String,

        /// Emit the result as JSON instead of the formatted report
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        paths: datasets::DatasetPaths,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Navigate { paths } => navigate::run_navigate(&paths),
        Command::Lookup { zip, json, paths } => lookup::run_lookup(&paths, &zip, json),
    }
}
