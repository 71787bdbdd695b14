use dioxus::prelude::*;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://fsa-book-buddy-b6e748d1380d.herokuapp.com/api";
pub const DEFAULT_PAGE_SIZE: usize = 12;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration
/// In debug builds: loads from .env file, then the process environment
/// In release builds: process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the booking REST API (no trailing slash)
    pub api_base_url: String,
    /// Bearer token to start the session with, if any
    pub api_token: Option<String>,
    /// Musicians per search page
    pub page_size: usize,
    /// Quiet interval before a search edit is applied
    pub search_debounce: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_token: None,
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using process environment");
            }
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source (environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_base_url = lookup("BOOKER_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let api_token = lookup("BOOKER_API_TOKEN")
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let page_size = match lookup("BOOKER_PAGE_SIZE") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BOOKER_PAGE_SIZE",
                        value,
                    })
                }
            },
            None => defaults.page_size,
        };

        let search_debounce = match lookup("BOOKER_SEARCH_DEBOUNCE_MS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidValue {
                    name: "BOOKER_SEARCH_DEBOUNCE_MS",
                    value,
                })?,
            None => defaults.search_debounce,
        };

        if api_token.is_none() {
            warn!("No BOOKER_API_TOKEN set, account features need a session token");
        }

        Ok(Self {
            api_base_url,
            api_token,
            page_size,
            search_debounce,
        })
    }
}

/// Hook to access the application config from components
pub fn use_config() -> Config {
    use_context::<Config>()
}
