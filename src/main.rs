use anyhow::Result;
use clap::Parser;
use log::info;

use prb_cli::api::{ApiClient, Session};
use prb_cli::cli::commands::auth::AuthSubcommands;
use prb_cli::cli::commands::links::LinksSubcommands;
use prb_cli::cli::commands::records::RecordsSubcommands;
use prb_cli::cli::commands::resolve::ResolveSubcommands;
use prb_cli::cli::{Cli, Commands};
use prb_cli::commands::auth::{SetupOptions, logout_command, setup_command, status_command};
use prb_cli::commands::{links, records, resolve};
use prb_cli::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("prb-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    let cli = Cli::parse();
    info!("Starting prb-cli");

    match cli.command {
        Commands::Auth(auth) => match auth.command {
            AuthSubcommands::Setup {
                name,
                host,
                token,
                from_env,
                from_env_file,
            } => {
                setup_command(SetupOptions {
                    name,
                    host,
                    token,
                    from_env,
                    from_env_file,
                })
                .await
            }
            AuthSubcommands::Status => status_command().await,
            AuthSubcommands::Logout { name, force } => logout_command(name, force).await,
        },
        Commands::Resolve(command) => {
            let (client, session) = connect()?;
            match command.command {
                ResolveSubcommands::Search { query } => {
                    resolve::search_command(&client, &session, &query).await
                }
                ResolveSubcommands::Bulk { file } => {
                    resolve::bulk_command(&client, &session, file.as_deref()).await
                }
            }
        }
        Commands::Links(command) => {
            let (client, session) = connect()?;
            match command.command {
                LinksSubcommands::Console => links::console_command(&client, &session).await,
            }
        }
        Commands::Records(command) => {
            let (client, session) = connect()?;
            match command.command {
                RecordsSubcommands::Search { file } => {
                    records::search_command(&client, &session, file.as_deref()).await
                }
                RecordsSubcommands::Upload { file } => {
                    records::upload_command(&client, &session, &file).await
                }
            }
        }
    }
}

/// Issue a bearer session from the stored profile and build the
/// pooled client. Every command dispatch borrows this session; there
/// is no ambient token store.
fn connect() -> Result<(ApiClient, Session)> {
    let config = Config::load()?;
    let profile = config.current_profile().ok_or_else(|| {
        anyhow::anyhow!("No session configured. Run 'prb-cli auth setup' first.")
    })?;

    Ok((ApiClient::new(), Session::issue(profile)))
}
