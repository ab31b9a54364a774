use anyhow::Result;
use log::info;

use crate::config::Config;

pub async fn status_command() -> Result<()> {
    info!("Executing auth status command");

    let config = Config::load()?;

    println!("PRB CLI Session Status");
    println!("======================");

    let sessions = config.list_sessions();
    if sessions.is_empty() {
        println!("No sessions configured.");
        println!("Run 'prb-cli auth setup' to create one.");
        return Ok(());
    }

    println!("Configured sessions:");
    for name in &sessions {
        if config.current_session_name() == Some(*name) {
            println!("  ● {} (current)", name);
        } else {
            println!("  ○ {}", name);
        }
    }

    if let Some(profile) = config.current_profile() {
        println!("\nCurrent session:");
        println!("  Base URL: {}", profile.base_url);
        println!("  Token: {}…", profile.token.chars().take(8).collect::<String>());
    } else {
        println!("\nNo current session selected.");
    }

    Ok(())
}
