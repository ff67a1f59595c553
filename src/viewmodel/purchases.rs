use std::sync::Arc;

use tracing::warn;

use super::{Cancellables, Published};
use crate::datasource::{IdUserPurchasesDataSource, UserPurchasesDataSource};
use crate::error::Result;
use crate::image::Image;
use crate::models::Purchase;

/// View model providing the bindings required to display a user's purchase
/// history.
pub struct UserPurchasesViewModel {
    data_source: Arc<dyn UserPurchasesDataSource>,
    purchases: Published<Option<Vec<Purchase>>>,
    cancellables: Cancellables,
}

impl UserPurchasesViewModel {
    /// Build against the production data source. Construction immediately
    /// starts one fetch of the purchase history.
    ///
    /// Must be called within a tokio runtime.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_data_source(Arc::new(IdUserPurchasesDataSource::new(user_id)))
    }

    /// Build against any [`UserPurchasesDataSource`] implementation and
    /// immediately start one fetch.
    pub fn with_data_source(data_source: Arc<dyn UserPurchasesDataSource>) -> Self {
        let view_model = Self {
            data_source,
            purchases: Published::new(None),
            cancellables: Cancellables::new(),
        };
        view_model.fetch_purchases();
        view_model
    }

    pub fn user_id(&self) -> &str {
        self.data_source.user_id()
    }

    /// The published purchase history, in server order: `None` until a fetch
    /// succeeds, and again after any failed fetch.
    pub fn purchases(&self) -> &Published<Option<Vec<Purchase>>> {
        &self.purchases
    }

    /// Access the title image for a purchase. Pure proxy to the data source;
    /// the caller keeps the purchase identity for stale-slot checks.
    pub async fn get_purchase_item_image(&self, purchase: &Purchase) -> Result<Image> {
        self.data_source.get_user_purchase_item_photo(purchase).await
    }

    fn fetch_purchases(&self) {
        let data_source = Arc::clone(&self.data_source);
        let purchases = self.purchases.clone();
        let handle = tokio::spawn(async move {
            match data_source.get_user_purchases_information().await {
                Ok(fetched) => purchases.set(Some(fetched)),
                Err(err) => {
                    warn!(error = %err, "failed to load purchase data");
                    purchases.set(None);
                }
            }
        });
        self.cancellables.store(handle.abort_handle());
    }
}
