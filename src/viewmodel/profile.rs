use std::sync::Arc;

use tracing::warn;

use super::{Cancellables, Published};
use crate::datasource::{IdUserDataSource, UserDataSource};
use crate::error::Result;
use crate::image::Image;
use crate::models::User;

/// View model providing the bindings required to display the user profile.
pub struct UserProfileViewModel {
    data_source: Arc<dyn UserDataSource>,
    user: Published<Option<User>>,
    cancellables: Cancellables,
}

impl UserProfileViewModel {
    /// Build against the production data source.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self::with_data_source(Arc::new(IdUserDataSource::new(user_id)))
    }

    /// Build against any [`UserDataSource`] implementation.
    pub fn with_data_source(data_source: Arc<dyn UserDataSource>) -> Self {
        Self {
            data_source,
            user: Published::new(None),
            cancellables: Cancellables::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        self.data_source.user_id()
    }

    /// The published user profile: `None` until a fetch succeeds, and again
    /// after any failed fetch.
    pub fn user(&self) -> &Published<Option<User>> {
        &self.user
    }

    /// Fetch the user profile. The result is published to the `user` state;
    /// failures are logged, never returned.
    ///
    /// Repeated calls race: each spawns an independent fetch and whichever
    /// completes last wins. Each fetch publishes at most once.
    pub fn get_user_information(&self) {
        let data_source = Arc::clone(&self.data_source);
        let user = self.user.clone();
        let handle = tokio::spawn(async move {
            match data_source.get_user_information().await {
                Ok(fetched) => user.set(Some(fetched)),
                Err(err) => {
                    warn!(error = %err, "failed to load user data");
                    user.set(None);
                }
            }
        });
        self.cancellables.store(handle.abort_handle());
    }

    /// Access the profile image for the user. Pure proxy to the data source;
    /// dropping the returned future cancels the fetch.
    pub async fn get_user_photo(&self, user: &User) -> Result<Image> {
        self.data_source.get_user_photo(user).await
    }
}
