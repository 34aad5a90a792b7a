use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SOAP_BASE_URL: &str = "http://localhost:8080/ws";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub soap_base_url: String,
    pub search_debounce: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Settings {
            api_base_url: get_api_base_url(),
            soap_base_url: get_soap_base_url(),
            search_debounce: get_search_debounce(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(
        &env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        DEFAULT_API_BASE_URL,
    )
}

pub fn get_soap_base_url() -> String {
    sanitize_base_url(
        &env::var("SOAP_BASE_URL").unwrap_or_else(|_| DEFAULT_SOAP_BASE_URL.to_string()),
        DEFAULT_SOAP_BASE_URL,
    )
}

/// Debounce window for search input; falls back to the default on unparseable values.
pub fn get_search_debounce() -> Duration {
    let ms = env::var("SEARCH_DEBOUNCE_MS")
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);
    Duration::from_millis(ms)
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
