// File: crates/candlebrush-fetch/src/error.rs
// Summary: Fetch failures and the pipeline-level load error.

use std::path::PathBuf;

use candlebrush_core::ChartDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("response is not a JSON array of rows: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported data file {} (expected .json or .csv)", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl FetchError {
    /// Classify a transport error; timeouts get their own variant.
    pub(crate) fn from_reqwest(url: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { url: url.to_string() }
        } else {
            FetchError::Http { url: url.to_string(), source: err }
        }
    }
}

/// Any failure that aborts loading a chart.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load price data")]
    Fetch(#[from] FetchError),

    #[error("price data rejected")]
    Data(#[from] ChartDataError),
}
