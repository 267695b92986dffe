use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_CATALOG_PATH: &str = "data/salary-catalog.json";

/// Application configuration loaded from environment variables.
/// Every variable has a default except the optional database and seed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Enables the Postgres profile store when set.
    pub database_url: Option<String>,
    pub catalog_path: PathBuf,
    /// Seed used when the catalog file is missing and has to be generated.
    pub catalog_seed: Option<u64>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            catalog_path: optional_env("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH)),
            catalog_seed: optional_env("CATALOG_SEED")
                .map(|s| s.parse::<u64>())
                .transpose()
                .context("CATALOG_SEED must be an unsigned integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
