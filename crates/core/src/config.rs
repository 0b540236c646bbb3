use std::time::Duration;

use url::Url;

use crate::errors::CoreError;

/// Development backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Per-request deadline applied unless explicitly disabled.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the backend REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to (no trailing slash).
    pub base_url: String,

    /// Static frontend API key, sent as `X-API-Key` when present.
    pub api_key: Option<String>,

    /// Deadline for a single request. `None` waits indefinitely.
    pub request_timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_base_url(base_url)
    }

    /// Read configuration from the environment:
    ///
    /// - `NEXUS_API_URL`: base URL (default [`DEFAULT_BASE_URL`])
    /// - `NEXUS_API_KEY`: static API key (unset or empty = none)
    /// - `NEXUS_REQUEST_TIMEOUT_SECS`: deadline in seconds, `0` disables it
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("NEXUS_API_URL") {
            if !url.trim().is_empty() {
                config = config.with_base_url(url);
            }
        }

        config.api_key = std::env::var("NEXUS_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        if let Some(secs) = std::env::var("NEXUS_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.request_timeout = None;
        self
    }

    /// The base URL must be an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = Url::parse(&self.base_url)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(CoreError::Config(format!(
                "Unsupported scheme '{other}' in base URL {}",
                self.base_url
            ))),
        }
    }

    /// Join an endpoint path onto the base URL. Paths are appended verbatim so
    /// a base path like `/api` survives.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}
