//! Dataset sources: where the raw JSON comes from.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A place the dataset can be loaded from. One call, one attempt.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    /// Human-readable location for logs.
    fn describe(&self) -> String;

    /// Fetch the raw dataset bytes.
    async fn fetch(&self) -> Result<Vec<u8>, FetchError>;
}

/// HTTP GET of a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        let http = |source| FetchError::Http {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(http)?;
        Ok(body.to_vec())
    }
}

/// A dataset saved on local disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, FetchError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.describe(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = FileSource::new("/nonexistent/cyclist-data.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/cyclist-data.json"));
    }

    #[test]
    fn http_source_describes_url() {
        let source = HttpSource::new("https://example.com/data.json");
        assert_eq!(source.describe(), "https://example.com/data.json");
    }
}
