use tracing::error;

use crate::errors::CoreError;
use crate::http::endpoints::{self, encode_segment};
use crate::http::ApiClient;
use crate::models::news::NewsItem;
use crate::models::page::Page;
use crate::models::wire::{list_from_wire, FromWire};

/// Page size used by the dashboard when the caller has no preference.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of stories in the "latest" strip.
pub const DEFAULT_LATEST_LIMIT: u32 = 5;

/// Read-only access to analysed news stories.
///
/// Each operation issues exactly one request. Failures are logged and
/// returned unchanged; choosing a fallback is the caller's business.
#[derive(Debug, Clone)]
pub struct NewsService {
    client: ApiClient,
}

impl NewsService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All stories, paginated.
    pub async fn get_all_news(&self, limit: u32, offset: u32) -> Result<Page<NewsItem>, CoreError> {
        self.fetch_page(endpoints::news::all(), &[], limit, offset)
            .await
            .inspect_err(|e| error!("Error fetching news: {e}"))
    }

    /// One story. A missing id surfaces as the backend's 404.
    pub async fn get_news_by_id(&self, id: &str) -> Result<NewsItem, CoreError> {
        let result = async {
            let path = endpoints::news::by_id(&encode_segment(id)?);
            let body = self.client.get(&path).await?;
            NewsItem::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching news by id {id}: {e}"))
    }

    pub async fn get_news_by_category(
        &self,
        category: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<NewsItem>, CoreError> {
        let result = async {
            let path = endpoints::news::by_category(&encode_segment(category)?);
            self.fetch_page(&path, &[], limit, offset).await
        }
        .await;
        result.inspect_err(|e| error!("Error fetching news by category {category}: {e}"))
    }

    /// Free-text search; the query travels as an encoded `query` parameter.
    pub async fn search_news(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<NewsItem>, CoreError> {
        self.fetch_page(
            endpoints::news::search(),
            &[("query", query.to_string())],
            limit,
            offset,
        )
        .await
        .inspect_err(|e| error!("Error searching news: {e}"))
    }

    /// The most recent `limit` stories as a flat list.
    pub async fn get_latest_news(&self, limit: u32) -> Result<Vec<NewsItem>, CoreError> {
        let result = async {
            check_limit(limit)?;
            let body = self
                .client
                .get_with_query(endpoints::news::latest(), &[("limit", limit.to_string())])
                .await?;
            list_from_wire::<NewsItem>(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching latest news: {e}"))
    }

    async fn fetch_page(
        &self,
        path: &str,
        extra: &[(&str, String)],
        limit: u32,
        offset: u32,
    ) -> Result<Page<NewsItem>, CoreError> {
        check_limit(limit)?;
        let mut query: Vec<(&str, String)> = extra.to_vec();
        query.push(("limit", limit.to_string()));
        query.push(("offset", offset.to_string()));

        let body = self.client.get_with_query(path, &query).await?;
        Page::from_wire(body)
    }
}

fn check_limit(limit: u32) -> Result<(), CoreError> {
    if limit == 0 {
        return Err(CoreError::Validation("limit must be greater than zero".into()));
    }
    Ok(())
}
