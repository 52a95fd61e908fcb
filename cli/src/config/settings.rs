//! Application configuration settings.

use serde::{Deserialize, Serialize};
use url::Url;

/// Main configuration for wsctl.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WsctlConfig {
    /// Console API client settings.
    pub api: ApiConfig,
    /// Console web app settings (where to send the browser).
    pub console: ConsoleConfig,
}

/// API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Console API base URL, including its path prefix.
    #[serde(with = "url_serde")]
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Bearer token attached to every request.
    pub access_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse("http://localhost:5001/console/api").expect("valid default URL"),
            timeout_secs: 30,
            access_token: None,
        }
    }
}

/// Console web app configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Where the console is served. Only the origin is used.
    #[serde(with = "url_serde")]
    pub url: Url,
    /// Path prefix the console app is mounted under (e.g. `/app`).
    pub base_path: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            url: Url::parse("http://localhost:3000").expect("valid default URL"),
            base_path: String::new(),
        }
    }
}

impl ConsoleConfig {
    /// The bare origin, e.g. `https://console.example.com/`.
    #[must_use]
    pub fn origin_root(&self) -> Url {
        let mut url = self.url.clone();
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    /// The origin plus the app's base path, e.g. `https://console.example.com/app`.
    #[must_use]
    pub fn app_root(&self) -> Url {
        let mut url = self.origin_root();
        let base_path = self.base_path.trim_matches('/');
        if !base_path.is_empty() {
            url.set_path(&format!("/{base_path}"));
        }
        url
    }
}

/// Custom serde module for URL serialization.
mod url_serde {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use url::Url;

    pub fn serialize<S>(url: &Url, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(url.as_str())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Environment variables that can override configuration.
pub mod env {
    pub const CONFIG_FILE: &str = "WSCTL_CONFIG";
    pub const API_URL: &str = "WSCTL_API_URL";
    pub const ACCESS_TOKEN: &str = "WSCTL_ACCESS_TOKEN";
    pub const CONSOLE_URL: &str = "WSCTL_CONSOLE_URL";
    pub const BASE_PATH: &str = "WSCTL_BASE_PATH";
    pub const LOG_LEVEL: &str = "WSCTL_LOG";
}

impl WsctlConfig {
    /// Apply environment variable overrides to the configuration.
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production).
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(env::API_URL) {
            match Url::parse(&url) {
                Ok(parsed) => self.api.base_url = parsed,
                Err(e) => tracing::warn!("ignoring {}={url}: {e}", env::API_URL),
            }
        }

        if let Some(token) = lookup(env::ACCESS_TOKEN) {
            if !token.is_empty() {
                self.api.access_token = Some(token);
            }
        }

        if let Some(url) = lookup(env::CONSOLE_URL) {
            match Url::parse(&url) {
                Ok(parsed) => self.console.url = parsed,
                Err(e) => tracing::warn!("ignoring {}={url}: {e}", env::CONSOLE_URL),
            }
        }

        if let Some(base_path) = lookup(env::BASE_PATH) {
            self.console.base_path = base_path;
        }

        self
    }
}
