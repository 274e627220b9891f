// File: crates/candlebrush-fetch/src/source.rs
// Summary: Data source trait definition.

use async_trait::async_trait;
use candlebrush_core::RawRow;

use crate::error::FetchError;

/// Anything that can produce the raw row snapshot.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable origin for logs (URL or path).
    fn describe(&self) -> String;

    async fn load(&self) -> Result<Vec<RawRow>, FetchError>;
}
