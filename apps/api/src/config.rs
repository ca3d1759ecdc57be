use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::layout::PageSize;

/// Application configuration loaded from environment variables.
/// Every variable has a default; invalid values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Replacement catalog JSON. `None` uses the embedded dataset.
    pub catalog_path: Option<PathBuf>,
    pub page_size: PageSize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            page_size: lookup("PAGE_SIZE")
                .unwrap_or_else(|| "letter".to_string())
                .parse::<PageSize>()
                .map_err(anyhow::Error::msg)
                .context("PAGE_SIZE must be 'letter' or 'a4'")?,
        })
    }
}
