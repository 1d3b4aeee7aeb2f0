use std::{collections::HashMap, fs, path::Path};

use thiserror::Error;
use url::Url;

pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";
pub const SETTINGS_FILE: &str = "viewer.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid posts url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("posts url '{0}' must use http or https")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub posts_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            posts_url: POSTS_URL.into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn posts_url(&self) -> Result<Url, SettingsError> {
        let url = Url::parse(self.posts_url.trim()).map_err(|source| SettingsError::InvalidUrl {
            url: self.posts_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UnsupportedScheme(self.posts_url.clone())),
        }
    }
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

/// Defaults, then `path` if it parses, then environment overrides.
pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("posts_url") {
                settings.posts_url = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("POSTS_URL") {
        settings.posts_url = v;
    }
    if let Some(v) = env("APP__POSTS_URL") {
        settings.posts_url = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
