use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, instrument, warn};

use super::wire::ApiPurchase;
use super::{fetch_image, UserPurchasesDataSource};
use crate::constants::{API_BASE_URL, PURCHASES_PAGE};
use crate::error::{DataSourceError, Result};
use crate::image::Image;
use crate::metrics::{endpoint, DataSourceMetrics};
use crate::models::Purchase;

/// Implements [`UserPurchasesDataSource`] using requests to the id.me API
/// and adapts the response to the [`Purchase`] data model.
pub struct IdUserPurchasesDataSource {
    user_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl IdUserPurchasesDataSource {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_transport(user_id, reqwest::Client::new(), API_BASE_URL)
    }

    /// Build against an explicit transport and base URL. Tests point this at
    /// a local fixture server instead of the live API.
    pub fn with_transport(
        user_id: impl Into<String>,
        client: reqwest::Client,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            base_url: base_url.into(),
            client,
        }
    }

    fn purchases_url(&self) -> Result<Url> {
        Url::parse_with_params(
            &format!("{}/purchases/{}", self.base_url, self.user_id),
            [("page", PURCHASES_PAGE)],
        )
        .map_err(|err| DataSourceError::InvalidArgument(err.to_string()))
    }

    async fn fetch_purchases(&self) -> Result<Vec<Purchase>> {
        let url = self.purchases_url()?;
        let response = self.client.get(url).send().await?;
        let bytes = response.bytes().await?;

        // The body must be an array; individual entries are best-effort.
        let entries: Vec<serde_json::Value> = serde_json::from_slice(&bytes)?;
        let total = entries.len();
        let purchases: Vec<Purchase> = entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value::<ApiPurchase>(entry)
                    .ok()
                    .and_then(ApiPurchase::into_purchase)
            })
            .collect();

        // One malformed entry must not invalidate the whole list, but the
        // drop stays visible in logs and counters.
        let dropped = total - purchases.len();
        if dropped > 0 {
            warn!(dropped, total, "dropped purchase entries that failed decoding");
            DataSourceMetrics::record_purchases_dropped(dropped as u64);
        }

        Ok(purchases)
    }
}

#[async_trait]
impl UserPurchasesDataSource for IdUserPurchasesDataSource {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    #[instrument(skip(self), fields(user_id = %self.user_id))]
    async fn get_user_purchases_information(&self) -> Result<Vec<Purchase>> {
        debug!("fetching purchase history");
        let result = self.fetch_purchases().await;
        match &result {
            Ok(purchases) => {
                info!(count = purchases.len(), "fetched purchase history");
                DataSourceMetrics::record_request_success(endpoint::PURCHASES);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch purchase history");
                DataSourceMetrics::record_request_error(endpoint::PURCHASES);
            }
        }
        result
    }

    #[instrument(skip(self, purchase), fields(user_id = %self.user_id))]
    async fn get_user_purchase_item_photo(&self, purchase: &Purchase) -> Result<Image> {
        fetch_image(&self.client, &purchase.image_url).await
    }
}
