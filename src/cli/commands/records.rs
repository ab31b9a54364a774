use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct RecordsCommands {
    #[command(subcommand)]
    pub command: RecordsSubcommands,
}

#[derive(Subcommand)]
pub enum RecordsSubcommands {
    /// Search records by contact number, one per line
    Search {
        /// Read contact numbers from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Upload a CSV/XLSX spreadsheet with interactive column mapping
    Upload {
        /// Path to the spreadsheet
        file: PathBuf,
    },
}
