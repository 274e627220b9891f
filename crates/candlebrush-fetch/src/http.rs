// File: crates/candlebrush-fetch/src/http.rs
// Summary: Single GET of the JSON row snapshot. No auth, paging or retries.

use async_trait::async_trait;
use candlebrush_core::RawRow;
use reqwest::Client;
use tracing::{debug, info};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::source::DataSource;

#[derive(Debug, Clone)]
pub struct HttpSource {
    config: FetchConfig,
    http: Client,
}

impl HttpSource {
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FetchError::from_reqwest(&config.url, e))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &FetchConfig { &self.config }
}

#[async_trait]
impl DataSource for HttpSource {
    fn describe(&self) -> String { self.config.url.clone() }

    async fn load(&self) -> Result<Vec<RawRow>, FetchError> {
        let url = &self.config.url;
        debug!(%url, "fetching price snapshot");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.clone(), status: status.as_u16() });
        }

        let body = response.bytes().await.map_err(|e| FetchError::from_reqwest(url, e))?;
        let rows: Vec<RawRow> = serde_json::from_slice(&body)?;
        info!(%url, rows = rows.len(), bytes = body.len(), "fetched price snapshot");
        Ok(rows)
    }
}
