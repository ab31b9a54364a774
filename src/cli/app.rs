use super::commands::auth::AuthCommands;
use super::commands::links::LinksCommands;
use super::commands::records::RecordsCommands;
use super::commands::resolve::ResolveCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "prb-cli")]
#[command(about = "A CLI client for the PRB link resolution service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Session profile management
    Auth(AuthCommands),
    /// Resolve PRB IDs and links, singly or in bulk
    Resolve(ResolveCommands),
    /// Manage registered links interactively
    Links(LinksCommands),
    /// Contact record search and spreadsheet upload
    Records(RecordsCommands),
}
