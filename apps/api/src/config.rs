use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default, so the service starts with no env at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Organization name injected into email templates and generated job
    /// descriptions. This is the brand skin knob.
    pub org_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            org_name: std::env::var("ORG_NAME").unwrap_or_else(|_| "Talent Flow".to_string()),
        })
    }
}
