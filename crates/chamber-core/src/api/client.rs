//! Loader for the chamber member data file.
//!
//! The data file is either served next to the page (`data/members.json`)
//! or published at an absolute URL. `MemberLoader` fetches it once,
//! parses it, and hands the document to `MemberCollection` for shape
//! normalization.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use reqwest::{header, Client};
use tracing::debug;

use crate::models::MemberCollection;

use super::LoadError;

/// Where the member data file lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Absolute `http://` or `https://` URL.
    Url(String),
    /// Path on the local filesystem.
    File(PathBuf),
}

impl DataSource {
    pub fn parse(location: &str) -> Self {
        let trimmed = location.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(trimmed.to_string())
        } else {
            DataSource::File(PathBuf::from(trimmed))
        }
    }
}

impl From<&str> for DataSource {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and normalizes member data.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct MemberLoader {
    client: Client,
}

impl MemberLoader {
    /// Create a new loader with its own HTTP client.
    ///
    /// The client has no request timeout: a hung server hangs the load.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("chamber-directory/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }

    /// Load the member collection from `source`.
    ///
    /// Transport failures and non-success statuses return
    /// `LoadError::Fetch`; a body that is not valid JSON returns
    /// `LoadError::Parse`. Valid JSON in an unrecognized shape loads as an
    /// empty collection.
    pub async fn load(&self, source: &DataSource) -> Result<MemberCollection, LoadError> {
        let body = match source {
            DataSource::Url(url) => self.fetch_url(url).await?,
            DataSource::File(path) => Self::read_file(path).await?,
        };

        let collection =
            MemberCollection::from_json_slice(&body).map_err(|e| LoadError::Parse {
                resource: source.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            source = %source,
            shape = %collection.shape(),
            count = collection.len(),
            "Loaded member data"
        );

        Ok(collection)
    }

    async fn fetch_url(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Self::transport_error(url, e))?;

        let response = Self::check_response(url, response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(url, e))?;
        Ok(bytes.to_vec())
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(
        url: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, LoadError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(LoadError::from_status(url, status, &body))
        }
    }

    fn transport_error(url: &str, err: reqwest::Error) -> LoadError {
        LoadError::Fetch {
            resource: url.to_string(),
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }

    async fn read_file(path: &Path) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(path).await.map_err(|e| LoadError::Fetch {
            resource: path.display().to_string(),
            status: None,
            message: e.to_string(),
        })
    }
}
