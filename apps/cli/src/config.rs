//! Environment-driven configuration for the CLI.

use hencoop_core::{Error, Result};

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend project URL, e.g. `https://xyz.supabase.co`.
    pub base_url: String,
    /// Anonymous project API key.
    pub api_key: String,
    /// Access token of the signed-in identity.
    pub access_token: String,
    /// Public site origin used for referral links.
    pub site_origin: String,
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::MissingConfigKey(key.to_string()))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = required("HENCOOP_BASE_URL")?;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(Error::InvalidConfigValue(format!(
                "HENCOOP_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }
        Ok(Self {
            base_url,
            api_key: required("HENCOOP_API_KEY")?,
            access_token: required("HENCOOP_ACCESS_TOKEN")?,
            site_origin: std::env::var("HENCOOP_SITE_ORIGIN")
                .unwrap_or_else(|_| "https://hencoop.app".to_string()),
        })
    }
}
