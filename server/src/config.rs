//! Host configuration parsed from environment variables.
//!
//! Leptos' own settings (site root, pkg dir, reload port) come from the
//! workspace `[[workspace.metadata.leptos]]` block via `get_configuration`;
//! this module only covers what the site itself needs.

use std::path::PathBuf;

use despacho_web::util::site_config::SiteConfig;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },
    #[error("invalid API_BASE: {0:?} must be empty, a path, or an http(s) URL")]
    InvalidApiBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base published to the client, without trailing `/`.
    pub api_base: String,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `API_BASE`: default empty (same origin as the page)
    /// - `STATIC_DIR`: default `static`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let api_base = parse_api_base(lookup("API_BASE").as_deref().unwrap_or_default())?;
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        Ok(Self { port, api_base, static_dir })
    }

    /// Client-facing view of this config, published in the SSR shell.
    pub fn site(&self) -> SiteConfig {
        SiteConfig::new(&self.api_base)
    }
}

fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    let valid = trimmed.is_empty()
        || trimmed.starts_with('/')
        || lower.starts_with("http://")
        || lower.starts_with("https://");
    if !valid || trimmed.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidApiBase(raw.to_owned()));
    }
    Ok(SiteConfig::new(trimmed).api_base().to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
