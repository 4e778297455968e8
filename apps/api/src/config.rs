use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default suitable for local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub companies_path: PathBuf,
    pub curriculum_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            companies_path: env_or("COMPANIES_PATH", "data/companies.json").into(),
            curriculum_path: env_or("CURRICULUM_PATH", "data/curriculum.json").into(),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
