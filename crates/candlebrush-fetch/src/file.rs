// File: crates/candlebrush-fetch/src/file.rs
// Summary: Local snapshot files: JSON (same shape as the HTTP body) or CSV.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use candlebrush_core::{RawField, RawRow};
use tracing::{debug, info};

use crate::error::FetchError;
use crate::source::DataSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    /// `date,open,close,low,high,volume`; a matching header row is skipped.
    Csv,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        match ext.as_str() {
            "json" => Some(FileFormat::Json),
            "csv" => Some(FileFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    format: FileFormat,
}

impl FileSource {
    /// Format inferred from the extension.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, FetchError> {
        let path = path.into();
        let format = FileFormat::from_path(&path).ok_or_else(|| FetchError::UnsupportedFormat(path.clone()))?;
        Ok(Self { path, format })
    }

    pub fn with_format(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self { path: path.into(), format }
    }

    pub fn path(&self) -> &Path { &self.path }

    pub fn format(&self) -> FileFormat { self.format }
}

#[async_trait]
impl DataSource for FileSource {
    fn describe(&self) -> String { self.path.display().to_string() }

    async fn load(&self) -> Result<Vec<RawRow>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io { path: self.path.clone(), source })?;
        let rows = match self.format {
            FileFormat::Json => serde_json::from_slice(&bytes)?,
            FileFormat::Csv => parse_csv(&bytes)?,
        };
        info!(path = %self.path.display(), rows = rows.len(), "loaded price snapshot");
        Ok(rows)
    }
}

/// Parse CSV rows. The first column stays text; other cells become numbers
/// when they parse to a finite value, otherwise text so the split reports them.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<RawRow>, FetchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        if i == 0 && is_header(&rec) {
            debug!(header = ?rec, "skipping CSV header");
            continue;
        }
        let fields = rec
            .iter()
            .enumerate()
            .map(|(col, cell)| match (col, cell.parse::<f64>()) {
                (0, _) => RawField::Text(cell.to_string()),
                (_, Ok(n)) if n.is_finite() => RawField::Number(n),
                _ => RawField::Text(cell.to_string()),
            })
            .collect();
        out.push(RawRow(fields));
    }
    Ok(out)
}

const CSV_HEADER: [&str; 6] = ["date", "open", "close", "low", "high", "volume"];

/// Only an exact column-name row counts as a header; anything else is data.
fn is_header(rec: &csv::StringRecord) -> bool {
    rec.len() >= CSV_HEADER.len()
        && CSV_HEADER
            .iter()
            .zip(rec.iter())
            .all(|(name, cell)| cell.eq_ignore_ascii_case(name))
}
