use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// A stored session profile for one service deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionProfile {
    pub base_url: String,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub current_session: Option<String>,
    pub sessions: HashMap<String, SessionProfile>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("prb-cli")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".prb-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using default config");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let config: Config = toml::from_str(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        debug!("Loaded config with {} sessions", config.sessions.len());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn add_session(&mut self, name: String, profile: SessionProfile) -> Result<()> {
        info!("Adding session profile: {}", name);
        self.sessions.insert(name.clone(), profile);

        // First profile becomes the current one
        if self.current_session.is_none() {
            self.current_session = Some(name.clone());
            info!("Set {} as current session", name);
        }

        self.save()
    }

    pub fn remove_session(&mut self, name: &str) -> Result<()> {
        info!("Removing session profile: {}", name);
        self.sessions
            .remove(name)
            .with_context(|| format!("Session '{}' not found", name))?;

        if self.current_session.as_deref() == Some(name) {
            self.current_session = self.sessions.keys().next().cloned();
        }

        self.save()
    }

    pub fn list_sessions(&self) -> Vec<&String> {
        let mut names: Vec<&String> = self.sessions.keys().collect();
        names.sort();
        names
    }

    pub fn current_session_name(&self) -> Option<&String> {
        self.current_session.as_ref()
    }

    pub fn current_profile(&self) -> Option<&SessionProfile> {
        let current = self.current_session.as_ref()?;
        self.sessions.get(current)
    }
}
