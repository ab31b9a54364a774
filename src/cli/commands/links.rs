use clap::{Args, Subcommand};

#[derive(Args)]
pub struct LinksCommands {
    #[command(subcommand)]
    pub command: LinksSubcommands,
}

#[derive(Subcommand)]
pub enum LinksSubcommands {
    /// Open the interactive link management console
    Console,
}
