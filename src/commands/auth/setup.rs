use anyhow::Result;
use log::{info, warn};

use crate::config::{Config, SessionProfile};
use crate::ui::{prompt_overwrite_confirmation, prompt_profile_name, prompt_token, text_input};

pub struct SetupOptions {
    pub name: Option<String>,
    pub host: Option<String>,
    pub token: Option<String>,
    pub from_env: bool,
    pub from_env_file: Option<String>,
}

pub async fn setup_command(options: SetupOptions) -> Result<()> {
    info!("Starting auth setup");

    let mut config = Config::load()?;

    // Determine the session source and get values
    let (profile_name, profile) = if options.from_env {
        let profile_name = options.name.unwrap_or_else(|| "from-env".to_string());
        let profile = SessionProfile::from_env()?;
        (profile_name, profile)
    } else if let Some(ref env_file_path) = options.from_env_file {
        let profile_name = options.name.unwrap_or_else(|| "from-env-file".to_string());
        let profile = SessionProfile::from_env_file(env_file_path)?;
        (profile_name, profile)
    } else if let (Some(host), Some(token)) = (&options.host, &options.token) {
        // All parameters provided via command line
        let profile_name = options.name.unwrap_or_else(|| "cli-setup".to_string());
        let profile = SessionProfile {
            base_url: host.clone(),
            token: token.clone(),
        };
        (profile_name, profile)
    } else {
        // Interactive mode - fallback for missing parameters
        info!("Starting interactive setup");

        let profile_name = prompt_profile_name(options.name)?;

        if config.sessions.contains_key(&profile_name) {
            let overwrite = prompt_overwrite_confirmation(&profile_name)?;

            if !overwrite {
                println!("Setup cancelled.");
                return Ok(());
            }
        }

        let base_url = if let Some(host) = options.host {
            host
        } else {
            text_input("Service base URL (e.g., http://localhost:8000)", None)?
        };
        let token = if let Some(token) = options.token {
            token
        } else {
            prompt_token()?
        };

        (profile_name, SessionProfile { base_url, token })
    };

    if config.sessions.contains_key(&profile_name)
        && (options.from_env || options.from_env_file.is_some())
    {
        warn!("Session '{}' already exists, overwriting", profile_name);
    }

    config.add_session(profile_name.clone(), profile)?;
    println!("✓ Session '{}' saved successfully", profile_name);

    if config.current_session.as_ref() == Some(&profile_name) {
        println!("✓ Set as current session");
    }

    Ok(())
}
