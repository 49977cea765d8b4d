//! Portfolio document loading
//!
//! One fetch, one parse. A non-success status, a transport failure, or
//! malformed JSON is a [`LoadError`]; there is no retry and no timeout.

use async_trait::async_trait;
use std::path::PathBuf;
use tracing::{debug, info};
use url::Url;

use crate::error::LoadError;
use crate::model::PortfolioData;

/// Somewhere the raw portfolio document can be fetched from
#[async_trait(?Send)]
pub trait DataSource {
    /// Location shown in diagnostics
    fn location(&self) -> &str;

    /// Fetch the raw document text
    async fn fetch_document(&self) -> Result<String, LoadError>;
}

/// Fetch and parse the portfolio document
pub async fn load_data<S: DataSource + ?Sized>(source: &S) -> Result<PortfolioData, LoadError> {
    debug!("Fetching portfolio data from {}", source.location());
    let body = source.fetch_document().await?;
    let data: PortfolioData = serde_json::from_str(&body)?;
    info!(
        "Loaded portfolio data: {} skills, {} projects",
        data.skills.len(),
        data.projects.len()
    );
    Ok(data)
}

/// HTTP source backed by reqwest (browser fetch on wasm)
pub struct HttpSource {
    client: reqwest::Client,
    url: Url,
    location: String,
}

impl HttpSource {
    /// Resolve `data_url` against `base`, usually the page location
    pub fn new(base: &str, data_url: &str) -> Result<Self, LoadError> {
        let invalid = |reason: String| LoadError::InvalidUrl {
            url: data_url.to_string(),
            reason,
        };
        let base = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
        let url = base.join(data_url).map_err(|e| invalid(e.to_string()))?;
        Ok(Self::from_url(url))
    }

    pub fn from_url(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            location: url.to_string(),
            url,
        }
    }
}

#[async_trait(?Send)]
impl DataSource for HttpSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_document(&self) -> Result<String, LoadError> {
        let transport = |e: reqwest::Error| LoadError::Transport {
            url: self.location.clone(),
            reason: e.to_string(),
        };

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.location.clone(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

/// Local file source, used by the CLI
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            location: path.display().to_string(),
            path,
        }
    }
}

#[async_trait(?Send)]
impl DataSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_document(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.location.clone(),
            source,
        })
    }
}

/// Canned response, handy for tests and previews
#[derive(Debug, Clone)]
pub struct StaticSource {
    location: String,
    status: u16,
    body: String,
}

impl StaticSource {
    /// A 200 response carrying `body`
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            location: crate::constants::data::DATA_URL.to_string(),
            status: 200,
            body: body.into(),
        }
    }

    /// An empty response with the given status
    pub fn status(status: u16) -> Self {
        Self {
            location: crate::constants::data::DATA_URL.to_string(),
            status,
            body: String::new(),
        }
    }
}

#[async_trait(?Send)]
impl DataSource for StaticSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch_document(&self) -> Result<String, LoadError> {
        if !(200..300).contains(&self.status) {
            return Err(LoadError::Status {
                url: self.location.clone(),
                status: self.status,
            });
        }
        Ok(self.body.clone())
    }
}
