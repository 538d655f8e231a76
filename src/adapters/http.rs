use crate::domain::ports::{BlockingTransport, QueryParams, Transport};
use crate::utils::error::{FetchError, Result};
use serde_json::Value;
use url::Url;

/// Joins `endpoint` under `api_root` and appends the encoded query pairs.
///
/// The root keeps its own path, so `http://host/v1` with `geo/countries`
/// becomes `http://host/v1/geo/countries`.
pub fn build_url(api_root: &str, endpoint: &str, query: &QueryParams) -> Result<Url> {
    let mut base = Url::parse(api_root).map_err(|e| FetchError::Config {
        message: format!("Invalid API root '{}': {}", api_root, e),
    })?;

    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    let mut url = base
        .join(endpoint.trim_start_matches('/'))
        .map_err(|e| FetchError::Config {
            message: format!("Invalid endpoint '{}': {}", endpoint, e),
        })?;

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(url)
}

fn parse_body(url: &Url, body: &[u8]) -> Result<Value> {
    serde_json::from_slice(body).map_err(|source| FetchError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Async transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api_root: String,
}

impl HttpTransport {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_root)
    }

    pub fn with_client(client: reqwest::Client, api_root: impl Into<String>) -> Self {
        Self {
            client,
            api_root: api_root.into(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, endpoint: &str, query: &QueryParams) -> Result<Value> {
        let url = build_url(&self.api_root, endpoint, query)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        parse_body(&url, &body)
    }
}

/// Blocking transport backed by `reqwest::blocking::Client`.
///
/// The blocking client owns a runtime of its own; build, use and drop it
/// outside of async contexts (e.g. inside `tokio::task::spawn_blocking`).
#[derive(Debug, Clone)]
pub struct BlockingHttpTransport {
    client: reqwest::blocking::Client,
    api_root: String,
}

impl BlockingHttpTransport {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self::with_client(reqwest::blocking::Client::new(), api_root)
    }

    pub fn with_client(client: reqwest::blocking::Client, api_root: impl Into<String>) -> Self {
        Self {
            client,
            api_root: api_root.into(),
        }
    }
}

impl BlockingTransport for BlockingHttpTransport {
    fn get_json(&self, endpoint: &str, query: &QueryParams) -> Result<Value> {
        let url = build_url(&self.api_root, endpoint, query)?;
        tracing::debug!("Making blocking API request to: {}", url);

        let response = self.client.get(url.clone()).send()?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.bytes()?;
        parse_body(&url, &body)
    }
}
