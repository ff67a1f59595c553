use thiserror::Error;

/// Specific error types that can be produced when accessing data from the API.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("could not build request URL: {0}")]
    InvalidUrl(String),

    #[error("invalid request component: {0}")]
    InvalidArgument(String),

    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("decoding failed: {0}")]
    DecodingFailed(String),
}

impl From<reqwest::Error> for DataSourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err.to_string())
    }
}

impl From<serde_json::Error> for DataSourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodingFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataSourceError>;
