use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::SessionProfile;

/// An issued bearer session, passed by reference into every dispatch
/// call. Issued from a stored profile at command start and invalidated
/// by `auth logout` (which removes the profile); no ambient global
/// token store exists.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: String,
}

impl Session {
    pub fn issue(profile: &SessionProfile) -> Self {
        Self {
            base_url: profile.base_url.trim_end_matches('/').to_string(),
            token: profile.token.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    /// Absolute URL for a service path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl SessionProfile {
    pub fn from_env() -> Result<SessionProfile> {
        info!("Importing session from environment variables");

        let base_url = std::env::var("PRB_HOST")
            .map_err(|_| anyhow::anyhow!("PRB_HOST environment variable not set"))?;
        let token = std::env::var("PRB_TOKEN")
            .map_err(|_| anyhow::anyhow!("PRB_TOKEN environment variable not set"))?;

        println!("✓ Imported session from environment variables");

        Ok(SessionProfile { base_url, token })
    }

    pub fn from_env_file(path: &str) -> Result<SessionProfile> {
        info!("Importing session from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;

        let base_url = std::env::var("PRB_HOST")
            .map_err(|_| anyhow::anyhow!("PRB_HOST not found in .env file: {}", path))?;
        let token = std::env::var("PRB_TOKEN")
            .map_err(|_| anyhow::anyhow!("PRB_TOKEN not found in .env file: {}", path))?;

        println!("✓ Imported session from .env file: {}", path);

        Ok(SessionProfile { base_url, token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let session = Session::issue(&SessionProfile {
            base_url: "http://localhost:8000/".to_string(),
            token: "t".to_string(),
        });
        assert_eq!(
            session.endpoint("/fetch/by-ids-bulk"),
            "http://localhost:8000/fetch/by-ids-bulk"
        );
    }
}
