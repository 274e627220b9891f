// File: crates/candlebrush-core/src/error.rs
// Summary: Error taxonomy for malformed input rows and invalid moving-average windows.

use thiserror::Error;

pub type Result<T, E = ChartDataError> = std::result::Result<T, E>;

/// Data problems that abort the chart pipeline for a dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartDataError {
    /// A raw row is too short or one of its fields has the wrong type.
    #[error("malformed row {index}: {reason}")]
    MalformedRow { index: usize, reason: String },

    /// Window is zero or exceeds the number of rows.
    #[error("invalid moving-average window {day_count} for {len} rows")]
    InvalidWindowSize { day_count: usize, len: usize },

    #[error("invalid chart settings: {0}")]
    Settings(String),
}

impl ChartDataError {
    pub(crate) fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRow { index, reason: reason.into() }
    }
}
