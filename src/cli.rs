use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "units-xlsx-to-mysql")]
#[command(version, about = "Import real-estate unit spreadsheets into MySQL")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Import units from the availability spreadsheet
    Import {
        /// Spreadsheet path (defaults to the deployment location)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// TOML file overriding the database settings
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the known project aliases and their compound IDs
    ListProjects,

    /// Print the CREATE TABLE statement for the units table
    Schema,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
