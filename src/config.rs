//! Server configuration parsed from environment variables.
//!
//! Variables are read after `dotenvy` has loaded an optional `.env` file, so
//! local development and container deployments share one code path.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CONTENT_DIR: &str = "content/columns";
pub const DEFAULT_PUBLIC_DIR: &str = "public";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub port: u16,
    /// Directory holding one markdown file per column.
    pub content_dir: PathBuf,
    /// Static files served for any path the app does not route (images).
    pub public_dir: PathBuf,
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CONTENT_DIR`: default `content/columns`
    /// - `PUBLIC_DIR`: default `public`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let content_dir = env_path("CONTENT_DIR", DEFAULT_CONTENT_DIR);
        let public_dir = env_path("PUBLIC_DIR", DEFAULT_PUBLIC_DIR);
        Ok(Self { port, content_dir, public_dir })
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map_or_else(|| PathBuf::from(default), PathBuf::from)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
