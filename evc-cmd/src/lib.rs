//! Command implementations for the charging station CLI.
//!
//! Provides subcommands to produce the cleaned station CSV from the
//! federal network agency's charging-point register, and to inspect it
//! the same way the dashboard does.

use clap::Subcommand;

pub mod clean;
pub mod fetch;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Convert a charging-point register export into the cleaned station CSV
    Clean {
        /// Path to the raw `;`-separated register export
        #[arg(short = 'i', long)]
        input: String,

        /// Output path for the cleaned station CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Download a register export and clean it
    Fetch {
        /// URL of the raw register export
        #[arg(short = 'u', long)]
        url: String,

        /// Output path for the cleaned station CSV
        #[arg(short = 'o', long)]
        output: String,
    },

    /// Print station counts per state, largest first
    States {
        /// Path to the cleaned station CSV
        #[arg(short = 's', long)]
        stations_csv: String,
    },

    /// Print the detail panel fields for one station
    Station {
        /// Path to the cleaned station CSV
        #[arg(short = 's', long)]
        stations_csv: String,

        /// Station id
        #[arg(long)]
        id: String,
    },

    /// Write the map figure JSON the dashboard would render
    Figure {
        /// Path to the cleaned station CSV
        #[arg(short = 's', long)]
        stations_csv: String,

        /// Station id to highlight
        #[arg(long)]
        selected: Option<String>,

        /// Output path for the figure JSON
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Clean { input, output } => clean::run_clean(&input, &output),
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
        Command::States { stations_csv } => report::run_states(&stations_csv),
        Command::Station { stations_csv, id } => report::run_station(&stations_csv, &id),
        Command::Figure {
            stations_csv,
            selected,
            output,
        } => report::run_figure(&stations_csv, selected.as_deref(), &output),
    }
}
