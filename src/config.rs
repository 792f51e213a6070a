use log::warn;
use std::env;

use crate::error::DraftError;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Process-wide settings, read once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Provider key. Optional at startup; requests fail while it is missing.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    /// Largest request body the handler will read.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            gemini_api_key: None,
            gemini_model: DEFAULT_MODEL.to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source, so tests don't touch the real environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = parse_or(lookup("PORT"), "PORT", defaults.port);
        let max_body_bytes = parse_or(
            lookup("MAX_BODY_BYTES"),
            "MAX_BODY_BYTES",
            defaults.max_body_bytes,
        );

        Self {
            host: non_empty(lookup("HOST")).unwrap_or(defaults.host),
            port,
            gemini_api_key: non_empty(lookup("GEMINI_API_KEY")),
            gemini_model: non_empty(lookup("GEMINI_MODEL")).unwrap_or(defaults.gemini_model),
            gemini_api_base: non_empty(lookup("GEMINI_API_BASE"))
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.gemini_api_base),
            max_body_bytes,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    pub fn api_key(&self) -> Result<&str, DraftError> {
        self.gemini_api_key
            .as_deref()
            .ok_or(DraftError::MissingApiKey)
    }
}

fn parse_or<T>(raw: Option<String>, name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    match raw {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            warn!("Ignoring invalid {} value {:?}, using {}", name, raw, default);
            default
        }),
        None => default,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
