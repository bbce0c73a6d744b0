use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

use super::{LoadFailure, ResultSource};

/// Fetches the result document over HTTP
pub struct HttpResultSource {
    client: Client,
    url: Url,
}

impl HttpResultSource {
    /// Create a source for an absolute URL
    pub fn new(url: Url) -> Result<Self, LoadFailure> {
        let client = Client::builder()
            .user_agent(concat!("screener-ui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LoadFailure::Network {
                location: url.to_string(),
                source: e,
            })?;

        Ok(Self { client, url })
    }

    /// Resolve `path` against the page location `base`, the way a browser
    /// resolves a relative fetch
    pub fn relative_to(base: &str, path: &str) -> Result<Self, LoadFailure> {
        let invalid = |reason: String| LoadFailure::InvalidLocation {
            location: path.to_string(),
            reason,
        };

        let base = Url::parse(base).map_err(|e| invalid(format!("bad base URL '{}': {}", base, e)))?;
        let url = base.join(path).map_err(|e| invalid(e.to_string()))?;
        Self::new(url)
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait::async_trait]
impl ResultSource for HttpResultSource {
    async fn fetch(&self) -> Result<String, LoadFailure> {
        debug!("GET {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| LoadFailure::Network {
                location: self.location(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} responded with {}", self.url, status);
            return Err(LoadFailure::Status {
                location: self.location(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| LoadFailure::Network {
            location: self.location(),
            source: e,
        })
    }

    fn location(&self) -> String {
        self.url.to_string()
    }
}
