use std::time::Duration;

use thiserror::Error;

/// Unified error type for the entire nexus-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Transport ───────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request to {url} timed out after {}ms", .after.as_millis())]
    Timeout { url: String, after: Duration },

    // ── HTTP status ─────────────────────────────────────────────────
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Unauthorized (stored token cleared): {0}")]
    Unauthorized(String),

    // ── Response mapping ────────────────────────────────────────────
    #[error("Mapping error ({entity}): {message}")]
    Mapping { entity: String, message: String },

    // ── Local ───────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// HTTP status carried by this error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CoreError::Http { status, .. } => Some(*status),
            CoreError::Unauthorized(_) => Some(401),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CoreError::Unauthorized(_))
    }

    pub(crate) fn mapping(entity: &str, e: impl std::fmt::Display) -> Self {
        CoreError::Mapping {
            entity: entity.to_string(),
            message: e.to_string(),
        }
    }
}

/// Strip query strings from anything that looks like a URL so API keys and
/// search terms never end up in error messages or logs.
///
/// Each query runs up to the next whitespace or `)`; the text after it is kept.
pub fn redact_query(msg: &str) -> String {
    let mut out = String::with_capacity(msg.len());
    let mut rest = msg;
    while let Some(idx) = rest.find('?') {
        out.push_str(&rest[..idx]);
        out.push_str("?<query redacted>");
        let tail = &rest[idx + 1..];
        let end = tail
            .find(|c: char| c.is_whitespace() || c == ')')
            .unwrap_or(tail.len());
        rest = &tail[end..];
    }
    out.push_str(rest);
    out
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Mapping {
            entity: "json".into(),
            message: e.to_string(),
        }
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors often contain the full request URL.
        CoreError::Network(redact_query(&e.to_string()))
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::Config(format!("Invalid URL: {e}"))
    }
}
