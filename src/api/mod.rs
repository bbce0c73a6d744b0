use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::ScreenerResult;

pub mod file_source;
pub mod http_source;
pub use file_source::FileResultSource;
pub use http_source::HttpResultSource;

/// Everything that can go wrong while loading the result document
#[derive(Debug, Error)]
pub enum LoadFailure {
    #[error("network error fetching {location}: {source}")]
    Network {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected HTTP status {status} from {location}")]
    Status { location: String, status: u16 },

    #[error("failed to read {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed result document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid result location '{location}': {reason}")]
    InvalidLocation { location: String, reason: String },
}

/// Where the result document comes from
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ResultSource {
    /// Fetch the raw document body. A single attempt, no retry.
    async fn fetch(&self) -> Result<String, LoadFailure>;

    /// Human readable location, used in logs
    fn location(&self) -> String;
}

#[async_trait::async_trait]
impl<T: ResultSource + Send + Sync + ?Sized> ResultSource for Box<T> {
    async fn fetch(&self) -> Result<String, LoadFailure> {
        (**self).fetch().await
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// Parse a fetched body into a result set
pub fn parse_results(body: &str) -> Result<ScreenerResult, LoadFailure> {
    Ok(serde_json::from_str(body)?)
}

/// Fetch and parse in one step
pub async fn load_results<S: ResultSource + ?Sized>(source: &S) -> Result<ScreenerResult, LoadFailure> {
    let body = source.fetch().await?;
    debug!("Fetched {} bytes from {}", body.len(), source.location());
    parse_results(&body)
}

/// Pick a source for `location`.
///
/// Absolute http(s) URLs are fetched directly. Anything else is a path,
/// resolved against `base_url` when one is configured, or read from the
/// local filesystem otherwise.
pub fn open_source(
    location: &str,
    base_url: Option<&str>,
) -> Result<Box<dyn ResultSource + Send + Sync>, LoadFailure> {
    if let Ok(url) = Url::parse(location) {
        return match url.scheme() {
            "http" | "https" => Ok(Box::new(HttpResultSource::new(url)?)),
            "file" => {
                let path = url.to_file_path().map_err(|_| LoadFailure::InvalidLocation {
                    location: location.to_string(),
                    reason: "file URL has no local path".to_string(),
                })?;
                Ok(Box::new(FileResultSource::new(path)))
            }
            other => Err(LoadFailure::InvalidLocation {
                location: location.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            }),
        };
    }

    match base_url {
        Some(base) => Ok(Box::new(HttpResultSource::relative_to(base, location)?)),
        None => Ok(Box::new(FileResultSource::new(location))),
    }
}
