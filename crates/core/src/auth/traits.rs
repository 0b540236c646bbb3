use crate::errors::CoreError;

/// Storage key the bearer token lives under in persistent stores.
pub const AUTH_TOKEN_KEY: &str = "nexus_auth_token";

/// Holder of the bearer token read by the request interceptor.
///
/// Injected into `ApiClient` so tests can swap in an in-memory store, and
/// the 401 handler can clear it without reaching into ambient state.
pub trait CredentialStore: Send + Sync {
    /// Current token, if any. Read failures count as "no token".
    fn get_token(&self) -> Option<String>;

    fn set_token(&self, token: &str) -> Result<(), CoreError>;

    fn clear_token(&self) -> Result<(), CoreError>;

    /// Presence check. An empty string is treated as no token.
    fn is_authenticated(&self) -> bool {
        self.get_token().is_some_and(|t| !t.is_empty())
    }
}
