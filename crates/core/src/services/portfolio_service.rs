use tracing::error;

use crate::errors::CoreError;
use crate::http::endpoints::{self, encode_segment};
use crate::http::ApiClient;
use crate::models::portfolio::{AssetDraft, AssetUpdate, NewAsset, PortfolioAsset};
use crate::models::wire::{list_from_wire, FromWire};

/// Per-user portfolio holdings stored on the backend.
///
/// Sector is derived from tags on every read (see `derive_sector`); nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct PortfolioService {
    client: ApiClient,
}

impl PortfolioService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_user_portfolio(&self, user_id: u64) -> Result<Vec<PortfolioAsset>, CoreError> {
        let result = async {
            let body = self.client.get(&endpoints::portfolio::by_user(user_id)).await?;
            list_from_wire::<PortfolioAsset>(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching portfolio for user {user_id}: {e}"))
    }

    pub async fn get_assets_by_tag(
        &self,
        user_id: u64,
        tag: &str,
    ) -> Result<Vec<PortfolioAsset>, CoreError> {
        let result = async {
            let path = endpoints::portfolio::by_tag(user_id, &encode_segment(tag)?);
            let body = self.client.get(&path).await?;
            list_from_wire::<PortfolioAsset>(body)
        }
        .await;
        result.inspect_err(|e| error!("Error fetching assets with tag {tag}: {e}"))
    }

    /// Create an asset owned by `user_id`.
    ///
    /// The payload always carries `user_id`, `asset_type` (default stock) and
    /// a `tags` array (default empty).
    pub async fn create_asset(
        &self,
        draft: AssetDraft,
        user_id: u64,
    ) -> Result<PortfolioAsset, CoreError> {
        let payload = NewAsset::from_draft(draft, user_id);
        let result = async {
            let body = self.client.post(endpoints::portfolio::create(), &payload).await?;
            PortfolioAsset::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error creating portfolio asset {}: {e}", payload.symbol))
    }

    pub async fn update_asset(
        &self,
        asset_id: &str,
        update: &AssetUpdate,
    ) -> Result<PortfolioAsset, CoreError> {
        let result = async {
            let path = endpoints::portfolio::update(&encode_segment(asset_id)?);
            let body = self.client.put(&path, update).await?;
            PortfolioAsset::from_wire(body)
        }
        .await;
        result.inspect_err(|e| error!("Error updating asset with id {asset_id}: {e}"))
    }

    /// Returns `true` once the backend confirms the delete. A failed delete
    /// (including an unknown id) is an error, never `false`.
    pub async fn delete_asset(&self, asset_id: &str) -> Result<bool, CoreError> {
        let result = async {
            let path = endpoints::portfolio::delete(&encode_segment(asset_id)?);
            self.client.delete(&path).await.map(|_| true)
        }
        .await;
        result.inspect_err(|e| error!("Error deleting asset with id {asset_id}: {e}"))
    }

    /// Seed the backend with a demo portfolio for `user_id` and return it.
    pub async fn create_demo_portfolio(&self, user_id: u64) -> Result<Vec<PortfolioAsset>, CoreError> {
        let result = async {
            let body = self.client.post_empty(&endpoints::portfolio::demo(user_id)).await?;
            list_from_wire::<PortfolioAsset>(body)
        }
        .await;
        result.inspect_err(|e| error!("Error creating demo portfolio for user {user_id}: {e}"))
    }
}
