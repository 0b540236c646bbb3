pub mod auth;
pub mod config;
pub mod errors;
pub mod filters;
pub mod fixtures;
pub mod forms;
pub mod http;
pub mod logging;
pub mod models;
pub mod services;

use std::sync::Arc;

use tracing::warn;

use auth::CredentialStore;
use config::ApiConfig;
use errors::CoreError;
use http::{ApiClient, HttpTransport};
use models::news::NewsItem;
use models::portfolio::PortfolioAsset;
use services::{NewsService, PortfolioService, ReportService, SourceService};

/// Result of a read that may have fallen back to built-in data.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    /// Fresh from the backend.
    Live(T),
    /// Backend failed; built-in fixtures substituted.
    Fixture(T),
}

impl<T> Fallback<T> {
    pub fn is_live(&self) -> bool {
        matches!(self, Fallback::Live(_))
    }

    pub fn value(&self) -> &T {
        match self {
            Fallback::Live(v) | Fallback::Fixture(v) => v,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Fallback::Live(v) | Fallback::Fixture(v) => v,
        }
    }
}

/// Main entry point for the Nexus core library.
/// Owns the shared `ApiClient` and one handle per resource service.
#[must_use]
#[derive(Debug, Clone)]
pub struct NexusClient {
    client: ApiClient,
    news: NewsService,
    portfolio: PortfolioService,
    reports: ReportService,
    sources: SourceService,
}

impl NexusClient {
    /// Connect over the default reqwest transport.
    pub fn new(config: ApiConfig, credentials: Arc<dyn CredentialStore>) -> Result<Self, CoreError> {
        Ok(Self::build(ApiClient::new(config, credentials)?))
    }

    /// Configuration read from `NEXUS_*` environment variables.
    pub fn from_env(credentials: Arc<dyn CredentialStore>) -> Result<Self, CoreError> {
        Self::new(ApiConfig::from_env(), credentials)
    }

    pub fn with_transport(
        config: ApiConfig,
        transport: Arc<dyn HttpTransport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Result<Self, CoreError> {
        Ok(Self::build(ApiClient::with_transport(config, transport, credentials)?))
    }

    fn build(client: ApiClient) -> Self {
        Self {
            news: NewsService::new(client.clone()),
            portfolio: PortfolioService::new(client.clone()),
            reports: ReportService::new(client.clone()),
            sources: SourceService::new(client.clone()),
            client,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn news(&self) -> &NewsService {
        &self.news
    }

    pub fn portfolio(&self) -> &PortfolioService {
        &self.portfolio
    }

    pub fn reports(&self) -> &ReportService {
        &self.reports
    }

    pub fn sources(&self) -> &SourceService {
        &self.sources
    }

    // ── Authentication ──────────────────────────────────────────────

    pub fn auth(&self) -> &Arc<dyn CredentialStore> {
        self.client.credentials()
    }

    pub fn set_token(&self, token: &str) -> Result<(), CoreError> {
        self.auth().set_token(token)
    }

    pub fn clear_token(&self) -> Result<(), CoreError> {
        self.auth().clear_token()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth().is_authenticated()
    }

    // ── Reads with fixture fallback ─────────────────────────────────

    /// First page of news, or the built-in stories if the backend fails.
    pub async fn news_or_fixtures(&self, limit: u32) -> Fallback<Vec<NewsItem>> {
        match self.news.get_all_news(limit, 0).await {
            Ok(page) => Fallback::Live(page.items),
            Err(e) => {
                warn!("Falling back to built-in news: {e}");
                let mut items = fixtures::mock_news();
                items.truncate(limit as usize);
                Fallback::Fixture(items)
            }
        }
    }

    /// The user's holdings, or the built-in portfolio if the backend fails.
    pub async fn portfolio_or_fixtures(&self, user_id: u64) -> Fallback<Vec<PortfolioAsset>> {
        match self.portfolio.get_user_portfolio(user_id).await {
            Ok(assets) => Fallback::Live(assets),
            Err(e) => {
                warn!("Falling back to built-in portfolio: {e}");
                Fallback::Fixture(fixtures::mock_portfolio())
            }
        }
    }
}
