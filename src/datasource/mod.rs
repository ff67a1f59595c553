//! Data sources: clients issuing requests against the id.me API and adapting
//! responses to the domain models.

pub mod purchases;
pub mod user;
pub mod wire;

pub use purchases::IdUserPurchasesDataSource;
pub use user::IdUserDataSource;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::warn;

use crate::error::{DataSourceError, Result};
use crate::image::Image;
use crate::metrics::{endpoint, DataSourceMetrics};
use crate::models::{Purchase, User};

/// Provider of access to user information.
#[async_trait]
pub trait UserDataSource: Send + Sync {
    /// Identifier of the user this data source is scoped to.
    fn user_id(&self) -> &str;

    /// Request the user's profile from the data source.
    async fn get_user_information(&self) -> Result<User>;

    /// Access the preview image for a particular user.
    async fn get_user_photo(&self, user: &User) -> Result<Image>;
}

/// Provider of access to a user's purchase information.
#[async_trait]
pub trait UserPurchasesDataSource: Send + Sync {
    /// Identifier of the user this data source is scoped to.
    fn user_id(&self) -> &str;

    /// Request the user's purchase history from the data source.
    async fn get_user_purchases_information(&self) -> Result<Vec<Purchase>>;

    /// Access the preview image for a particular purchased item.
    async fn get_user_purchase_item_photo(&self, purchase: &Purchase) -> Result<Image>;
}

/// Fetch an image by URL. The URL is validated before any request goes out;
/// success requires HTTP 200 and a payload that sniffs as a known image.
/// No caching: repeated calls re-fetch.
pub(crate) async fn fetch_image(client: &reqwest::Client, raw_url: &str) -> Result<Image> {
    let result = fetch_image_inner(client, raw_url).await;
    match &result {
        Ok(_) => DataSourceMetrics::record_request_success(endpoint::PHOTO),
        Err(err) => {
            warn!(url = raw_url, error = %err, "image fetch failed");
            DataSourceMetrics::record_request_error(endpoint::PHOTO);
        }
    }
    result
}

async fn fetch_image_inner(client: &reqwest::Client, raw_url: &str) -> Result<Image> {
    let url =
        Url::parse(raw_url).map_err(|err| DataSourceError::InvalidUrl(err.to_string()))?;

    let response = client.get(url).send().await?;
    if response.status() != StatusCode::OK {
        return Err(DataSourceError::RequestFailed(format!(
            "unexpected status {}",
            response.status()
        )));
    }

    let bytes = response.bytes().await?;
    Image::from_bytes(bytes.to_vec()).ok_or_else(|| {
        DataSourceError::DecodingFailed("response body is not a recognizable image".to_string())
    })
}
