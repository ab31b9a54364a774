use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthCommands {
    #[command(subcommand)]
    pub command: AuthSubcommands,
}

#[derive(Subcommand)]
pub enum AuthSubcommands {
    /// Set up a session profile for a service deployment
    Setup {
        /// Name for this profile (e.g., "production", "test")
        #[arg(short, long)]
        name: Option<String>,
        /// Service base URL
        #[arg(long)]
        host: Option<String>,
        /// Bearer token
        #[arg(long)]
        token: Option<String>,
        /// Import session from environment variables
        #[arg(long)]
        from_env: bool,
        /// Import session from specified .env file
        #[arg(long)]
        from_env_file: Option<String>,
    },
    /// Show current session status
    Status,
    /// Invalidate a session profile
    Logout {
        /// Profile name to invalidate (defaults to current)
        name: Option<String>,
        /// Force removal without confirmation
        #[arg(short, long)]
        force: bool,
    },
}
