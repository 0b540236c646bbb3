// ═══════════════════════════════════════════════════════════════════
// Shared test helpers — fake transports and wire fixtures
// ═══════════════════════════════════════════════════════════════════

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use nexus_core::auth::{CredentialStore, MemoryCredentialStore};
use nexus_core::config::ApiConfig;
use nexus_core::errors::CoreError;
use nexus_core::http::{ApiClient, ApiRequest, ApiResponse, HttpTransport};

pub const BASE: &str = "http://backend.test/api";

/// Records every request and answers from a queue of canned responses.
/// An exhausted queue answers with a network error.
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, CoreError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, status: u16, body: Value) -> Self {
        self.respond_raw(status, &body.to_string())
    }

    pub fn respond_raw(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: CoreError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, CoreError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CoreError::Network("no canned response".into())))
    }
}

/// Never answers.
pub struct HangingTransport;

#[async_trait]
impl HttpTransport for HangingTransport {
    fn name(&self) -> &str {
        "hanging"
    }

    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, CoreError> {
        std::future::pending().await
    }
}

pub fn config() -> ApiConfig {
    ApiConfig::new(BASE)
}

pub fn client_with(
    transport: Arc<RecordingTransport>,
    store: Arc<MemoryCredentialStore>,
) -> ApiClient {
    let transport: Arc<dyn HttpTransport> = transport;
    let store: Arc<dyn CredentialStore> = store;
    ApiClient::with_transport(config(), transport, store).unwrap()
}

pub fn client(transport: Arc<RecordingTransport>) -> ApiClient {
    client_with(transport, Arc::new(MemoryCredentialStore::new()))
}

// ── Wire fixtures ───────────────────────────────────────────────────

/// A backend news object with every field, including the optional note.
pub fn wire_news(id: &str) -> Value {
    json!({
        "id": id,
        "category": "Earnings Call",
        "title": "Microsoft beats expectations",
        "summary": "Cloud revenue exceeded expectations.",
        "impact": "positive",
        "impact_score": 3,
        "sentiment": "AI theme: strong positive",
        "date": "2024-09-20",
        "time": "14:15:10",
        "source": "Bloomberg",
        "confidence": 91,
        "affected_companies": ["MSFT", "GOOGL"],
        "asset_tags": ["US", "Technology"],
        "latency": "12ms",
        "detailed_summary": {
            "what_happened": "Strong Q4",
            "market_reaction": "MSFT up 5%",
            "who": "Microsoft",
            "why_it_matters": "AI adoption",
            "magnitude": "High"
        },
        "model_analysis": {
            "key_facts": ["Cloud beat", "Guidance raised"],
            "sources": ["Bloomberg"]
        },
        "house_view_context": {
            "current_stance": "Overweight tech",
            "comparison": "Above consensus",
            "relevance": "Supports view"
        },
        "portfolio_impact": {
            "affected_assets": ["Microsoft (+)"],
            "overall_impact": "Positive",
            "pre_interpretation_note": "Watch capex"
        }
    })
}

/// Same story without `portfolio_impact.pre_interpretation_note`.
pub fn wire_news_without_note(id: &str) -> Value {
    let mut news = wire_news(id);
    news["portfolio_impact"]
        .as_object_mut()
        .unwrap()
        .remove("pre_interpretation_note");
    news
}

pub fn wire_asset(id: u64, symbol: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "name": format!("{symbol} Corp"),
        "symbol": symbol,
        "asset_type": "stock",
        "tags": tags,
    })
}

pub fn wire_source(id: u64, codename: &str) -> Value {
    json!({
        "id": id,
        "codename": codename,
        "name": "Bloomberg",
        "website": "https://bloomberg.com",
    })
}

pub fn wire_report() -> Value {
    json!({
        "report_date": "2025-01-20",
        "week_start": "2025-01-13",
        "week_end": "2025-01-19",
        "report_title": "Weekly Market Brief",
        "executive_summary": "Tech led gains.",
        "market_impact": {
            "positive_count": 5,
            "negative_count": 2,
            "neutral_count": 1,
            "overall_sentiment": "bullish",
            "key_factors": ["AI capex", "Soft CPI"]
        },
        "top_news": [{
            "id": 42,
            "title": "Microsoft beats",
            "url": "https://news.test/42",
            "published_at": "2025-01-15T14:00:00Z",
            "impact_prediction": "positive",
            "categories": ["Earnings Call"]
        }],
        "category_insights": [{
            "category": "Earnings Call",
            "news_count": 3,
            "impact_summary": "Mostly beats"
        }],
        "key_trends": ["AI infrastructure"],
        "outlook": "Constructive"
    })
}
