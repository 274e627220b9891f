// File: crates/candlebrush-fetch/src/load.rs
// Summary: Fetch, split and build as one async task with a typed result.

use candlebrush_core::{split_data, ChartConfigBuilder, ChartDocument, SplitDataset};
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::source::DataSource;

/// Fetch the snapshot and split it.
pub async fn load_dataset(source: &dyn DataSource) -> Result<SplitDataset, LoadError> {
    let rows = source.load().await.map_err(|e| {
        warn!(source = %source.describe(), error = %e, "fetch failed");
        e
    })?;
    let data = split_data(&rows)?;
    debug!(rows = data.len(), "dataset ready");
    Ok(data)
}

/// Fetch, split, compute every indicator and assemble the document.
/// Any failure aborts the whole pipeline for this dataset.
pub async fn load_document(source: &dyn DataSource, builder: &ChartConfigBuilder) -> Result<ChartDocument, LoadError> {
    let data = load_dataset(source).await?;
    Ok(builder.build(data)?)
}
