use async_trait::async_trait;
use reqwest::Client;

use crate::errors::{redact_query, CoreError};
use super::traits::{ApiRequest, ApiResponse, HttpTransport};

/// Production transport over a pooled `reqwest::Client`.
///
/// No timeout is set on the inner client: deadlines are owned by `ApiClient`
/// so they apply equally to every transport.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wrap a caller-configured client (proxies, custom TLS roots, ...).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    fn name(&self) -> &str {
        "reqwest"
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, CoreError> {
        let mut builder = self.client.request(request.method.clone(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_connect() {
                CoreError::Network(format!(
                    "Could not connect to {}: {}",
                    request.url,
                    redact_query(&e.to_string())
                ))
            } else {
                CoreError::from(e)
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(ApiResponse { status, body })
    }
}
