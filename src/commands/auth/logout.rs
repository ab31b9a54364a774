use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::ui::prompt_confirmation;

/// Invalidate a stored session profile. Future commands can no longer
/// issue a bearer session from it.
pub async fn logout_command(name: Option<String>, force: bool) -> Result<()> {
    let mut config = Config::load()?;

    let Some(name) = name.or_else(|| config.current_session.clone()) else {
        println!("No sessions configured.");
        return Ok(());
    };

    info!("Invalidating session: {}", name);

    if !config.sessions.contains_key(&name) {
        println!("Session '{}' not found.", name);
        println!("Available sessions:");
        for session_name in config.list_sessions() {
            if config.current_session_name() == Some(session_name) {
                println!("  ● {} (current)", session_name);
            } else {
                println!("  ○ {}", session_name);
            }
        }
        return Ok(());
    }

    let confirm = if force {
        true
    } else {
        prompt_confirmation(&format!("Invalidate session '{}'?", name), false)?
    };

    if !confirm {
        println!("Logout cancelled.");
        return Ok(());
    }

    config.remove_session(&name)?;
    println!("✓ Session '{}' invalidated", name);

    if let Some(current) = config.current_session_name() {
        println!("Current session: {}", current);
    }

    Ok(())
}
