//! Endpoint configuration.

use std::env;

/// Base endpoint used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://todos.demo.rootpath.io";

/// Environment variable consulted by `FetcherConfig::from_env`.
pub const BASE_URL_ENV: &str = "TODO_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    base_url: String,
}

impl FetcherConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base endpoint from `TODO_BASE_URL`, falling back to
    /// `DEFAULT_BASE_URL` when it is unset or blank.
    pub fn from_env() -> Self {
        Self::from_env_value(env::var(BASE_URL_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
