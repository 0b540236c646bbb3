use std::sync::Arc;

use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::CredentialStore;
use crate::config::ApiConfig;
use crate::errors::{redact_query, CoreError};
use super::reqwest_transport::ReqwestTransport;
use super::traits::{ApiRequest, ApiResponse, HttpTransport};

pub const API_KEY_HEADER: &str = "X-API-Key";

/// The single shared HTTP client. Every backend call goes through here so
/// header injection and 401 handling apply uniformly.
///
/// Cloning is cheap: config, transport and credential store are shared.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ApiConfig>,
    transport: Arc<dyn HttpTransport>,
    credentials: Arc<dyn CredentialStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("api_key", &self.config.api_key.as_ref().map(|_| "<set>"))
            .field("timeout", &self.config.request_timeout)
            .field("transport", &self.transport.name())
            .field("authenticated", &self.credentials.is_authenticated())
            .finish()
    }
}

impl ApiClient {
    /// Client over the default reqwest transport.
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self, CoreError> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()), credentials)
    }

    pub fn with_transport(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            transport,
            credentials,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    // ── Interceptors ────────────────────────────────────────────────

    /// Outgoing: JSON headers, API key when configured, bearer token when stored.
    pub fn intercept_request(&self, request: &mut ApiRequest) {
        request.set_header("Content-Type", "application/json");
        request.set_header("Accept", "application/json");

        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            request.set_header(API_KEY_HEADER, key);
        }
        if let Some(token) = self.credentials.get_token().filter(|t| !t.is_empty()) {
            request.set_header("Authorization", format!("Bearer {token}"));
        }
    }

    /// Incoming: 2xx passes through. 401 clears the stored token and still fails.
    pub fn intercept_response(&self, response: ApiResponse) -> Result<ApiResponse, CoreError> {
        if response.is_success() {
            return Ok(response);
        }

        let message = error_message(&response);
        if response.status == StatusCode::UNAUTHORIZED.as_u16() {
            if let Err(e) = self.credentials.clear_token() {
                warn!("401 received but the stored token could not be cleared: {e}");
            } else {
                warn!("401 received, stored auth token cleared");
            }
            return Err(CoreError::Unauthorized(message));
        }

        Err(CoreError::Http {
            status: response.status,
            message,
        })
    }

    // ── Dispatch ────────────────────────────────────────────────────

    /// Shape, send and judge one request. Exactly one transport call, no retry.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<ApiResponse, CoreError> {
        let mut request = ApiRequest::new(method, self.config.url_for(path));
        request.query = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        request.body = body;
        self.intercept_request(&mut request);

        debug!("{} {}", request.method, request.url);
        let url = redact_query(&request.url);
        let pending = self.transport.send(request);

        let response = match self.config.request_timeout {
            Some(limit) => tokio::time::timeout(limit, pending)
                .await
                .map_err(|_| CoreError::Timeout { url, after: limit })??,
            None => pending.await?,
        };

        self.intercept_response(response)
    }

    pub async fn get(&self, path: &str) -> Result<Value, CoreError> {
        self.get_with_query(path, &[]).await
    }

    pub async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Value, CoreError> {
        let response = self.execute(Method::GET, path, query, None).await?;
        parse_body(&response)
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, CoreError> {
        let body = serde_json::to_value(body)?;
        let response = self.execute(Method::POST, path, &[], Some(body)).await?;
        parse_body(&response)
    }

    /// POST without a request body.
    pub async fn post_empty(&self, path: &str) -> Result<Value, CoreError> {
        let response = self.execute(Method::POST, path, &[], None).await?;
        parse_body(&response)
    }

    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, CoreError> {
        let body = serde_json::to_value(body)?;
        let response = self.execute(Method::PUT, path, &[], Some(body)).await?;
        parse_body(&response)
    }

    pub async fn delete(&self, path: &str) -> Result<ApiResponse, CoreError> {
        self.execute(Method::DELETE, path, &[], None).await
    }
}

/// Successful bodies are JSON. An empty body reads as `null`.
fn parse_body(response: &ApiResponse) -> Result<Value, CoreError> {
    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&response.body).map_err(|e| CoreError::mapping("response body", e))
}

/// Best-effort human message for a failed response: the backend's `detail`
/// field if present, otherwise the body, otherwise the status reason.
fn error_message(response: &ApiResponse) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(&response.body) {
        match map.get("detail").or_else(|| map.get("message")) {
            Some(Value::String(s)) => return s.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }
    let body = response.body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    StatusCode::from_u16(response.status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown status")
        .to_string()
}
