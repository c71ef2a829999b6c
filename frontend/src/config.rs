//! Client configuration loaded via OrthoConfig.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Settings controlling how the client reaches the community backend.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMUNITY")]
pub struct ClientSettings {
    /// Root URL of the REST API.
    pub api_base_url: Option<String>,
    /// Per-request timeout in seconds. Unset or zero disables the timeout.
    pub request_timeout_secs: Option<u64>,
    /// Bearer token attached to every request.
    pub auth_token: Option<String>,
    /// Emit JSON log lines instead of the human-readable format.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl ClientSettings {
    /// Return the configured API root, falling back to the local default.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the configured value is not a URL.
    pub fn api_base_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Return the request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    /// Return the bearer token, ignoring blank values.
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
