// File: crates/candlebrush-fetch/src/lib.rs
// Summary: Data sources for raw price rows and the async fetch-split-build pipeline.

pub mod config;
pub mod error;
pub mod source;
pub mod http;
pub mod file;
pub mod load;

/// Dow-Jones daily snapshot served by the ECharts site.
pub const DEFAULT_DATA_URL: &str = "https://echarts.apache.org/examples/data/asset/data/stock-DJI.json";

pub use config::FetchConfig;
pub use error::{FetchError, LoadError};
pub use source::DataSource;
pub use http::HttpSource;
pub use file::{FileFormat, FileSource};
pub use load::{load_dataset, load_document};
