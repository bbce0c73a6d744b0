use std::path::PathBuf;

use tracing::debug;

use super::{LoadFailure, ResultSource};

/// Reads the result document from the local filesystem
pub struct FileResultSource {
    path: PathBuf,
}

impl FileResultSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait::async_trait]
impl ResultSource for FileResultSource {
    async fn fetch(&self) -> Result<String, LoadFailure> {
        debug!("Reading {}", self.path.display());
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadFailure::Io {
                location: self.location(),
                source: e,
            })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
