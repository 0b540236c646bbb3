use tracing::error;

use crate::errors::CoreError;
use crate::http::endpoints::{self, encode_segment};
use crate::http::ApiClient;
use crate::models::page::Page;
use crate::models::source::{NewSource, Source, SourceUpdate};
use crate::models::wire::{list_from_wire, FromWire};

/// Default page size for the sources listing.
pub const DEFAULT_SOURCES_LIMIT: u32 = 100;

/// CRUD over news sources.
#[derive(Debug, Clone)]
pub struct SourceService {
    client: ApiClient,
}

impl SourceService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The backend returns a bare array, so `total` is the page length.
    pub async fn get_all_sources(&self, skip: u32, limit: u32) -> Result<Page<Source>, CoreError> {
        let result = async {
            let body = self
                .client
                .get_with_query(
                    endpoints::sources::all(),
                    &[("skip", skip.to_string()), ("limit", limit.to_string())],
                )
                .await?;
            list_from_wire::<Source>(body).map(Page::from_items)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching sources: {e}"))
    }

    pub async fn get_source_by_id(&self, id: u64) -> Result<Source, CoreError> {
        let result = async {
            let body = self.client.get(&endpoints::sources::by_id(id)).await?;
            Source::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching source by id {id}: {e}"))
    }

    pub async fn get_source_by_codename(&self, codename: &str) -> Result<Source, CoreError> {
        let result = async {
            let path = endpoints::sources::by_codename(&encode_segment(codename)?);
            let body = self.client.get(&path).await?;
            Source::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching source by codename {codename}: {e}"))
    }

    pub async fn create_source(&self, source: &NewSource) -> Result<Source, CoreError> {
        let result = async {
            let body = self.client.post(endpoints::sources::create(), source).await?;
            Source::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error creating source {}: {e}", source.codename))
    }

    pub async fn update_source(&self, id: u64, update: &SourceUpdate) -> Result<Source, CoreError> {
        let result = async {
            let body = self.client.put(&endpoints::sources::update(id), update).await?;
            Source::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error updating source {id}: {e}"))
    }

    /// `true` once the backend confirms; failures propagate.
    pub async fn delete_source(&self, id: u64) -> Result<bool, CoreError> {
        self.client
            .delete(&endpoints::sources::delete(id))
            .await
            .map(|_| true)
            .inspect_err(|e| error!("Error deleting source {id}: {e}"))
    }
}
