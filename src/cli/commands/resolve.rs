use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ResolveCommands {
    #[command(subcommand)]
    pub command: ResolveSubcommands,
}

#[derive(Subcommand)]
pub enum ResolveSubcommands {
    /// Resolve a single PRB ID or link
    Search {
        /// A PRB ID or a URL
        query: String,
    },
    /// Resolve a batch of PRB IDs or links, one per line
    Bulk {
        /// Read entries from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}
