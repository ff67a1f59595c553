use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, info, instrument, warn};

use super::wire::ApiUser;
use super::{fetch_image, UserDataSource};
use crate::constants::API_BASE_URL;
use crate::error::{DataSourceError, Result};
use crate::image::Image;
use crate::metrics::{endpoint, DataSourceMetrics};
use crate::models::User;

/// Implements [`UserDataSource`] using requests to the id.me API and adapts
/// the response to the [`User`] data model.
pub struct IdUserDataSource {
    user_id: String,
    base_url: String,
    client: reqwest::Client,
}

impl IdUserDataSource {
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

    fn profile_url(&self) -> Result<Url> {
        // `user_id` is externally supplied; composition is checked rather
        // than assumed.
        Url::parse(&self.base_url)
            .and_then(|base| base.join(&format!("profile/{}", self.user_id)))
            .map_err(|err| DataSourceError::InvalidUrl(err.to_string()))
    }

    async fn fetch_user(&self) -> Result<User> {
        let url = self.profile_url()?;
        let response = self.client.get(url).send().await?;
        let bytes = response.bytes().await?;
        let api_user: ApiUser = serde_json::from_slice(&bytes)?;
        api_user
            .into_user()
            .ok_or_else(|| DataSourceError::DecodingFailed("user is missing required fields".to_string()))
    }
}

#[async_trait]
impl UserDataSource for IdUserDataSource {
    fn user_id(&self) -> &str {
        &self.user_id
    }

    #[instrument(skip(self), fields(user_id = %self.user_id))]
    async fn get_user_information(&self) -> Result<User> {
        debug!("fetching user profile");
        let result = self.fetch_user().await;
        match &result {
            Ok(user) => {
                info!(user_name = %user.user_name, "fetched user profile");
                DataSourceMetrics::record_request_success(endpoint::PROFILE);
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch user profile");
                DataSourceMetrics::record_request_error(endpoint::PROFILE);
            }
        }
        result
    }

    #[instrument(skip(self, user), fields(user_id = %self.user_id))]
    async fn get_user_photo(&self, user: &User) -> Result<Image> {
        let image_url = user
            .image_url
            .as_deref()
            .ok_or_else(|| DataSourceError::InvalidUrl("user has no profile image".to_string()))?;
        fetch_image(&self.client, image_url).await
    }
}
