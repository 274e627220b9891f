// File: crates/candlebrush-core/src/series.rs
// Summary: Raw price rows and the split into index-aligned dates, OHLC values and volume bars.
// Notes:
// - Splitting borrows the raw rows; nothing is removed from the input.
// - Volume direction keeps the source convention: open > close maps to 1.

use serde::ser::{Serialize, Serializer};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ChartDataError, Result};
use crate::types::RAW_ROW_FIELDS;

/// One field of a raw row as it appears on the wire.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawField {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawField::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawField::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for RawField {
    fn from(n: f64) -> Self { RawField::Number(n) }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self { RawField::Text(s.to_string()) }
}

impl From<String> for RawField {
    fn from(s: String) -> Self { RawField::Text(s) }
}

/// `[date, open, close, low, high, volume]`, possibly with trailing extras.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RawRow(pub Vec<RawField>);

impl RawRow {
    /// Well-formed row from typed parts.
    pub fn new(date: impl Into<String>, open: f64, close: f64, low: f64, high: f64, volume: f64) -> Self {
        Self(vec![
            RawField::Text(date.into()),
            RawField::Number(open),
            RawField::Number(close),
            RawField::Number(low),
            RawField::Number(high),
            RawField::Number(volume),
        ])
    }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Validate the row at position `index` and return its date and numeric tuple.
    pub fn parse(&self, index: usize) -> Result<(String, Ohlcv)> {
        let fields = &self.0;
        if fields.len() < RAW_ROW_FIELDS {
            return Err(ChartDataError::malformed(
                index,
                format!("expected at least {RAW_ROW_FIELDS} fields, found {}", fields.len()),
            ));
        }
        let date = fields[0]
            .as_text()
            .ok_or_else(|| ChartDataError::malformed(index, "date is not a string"))?
            .to_string();

        let number = |pos: usize, name: &str| -> Result<f64> {
            match fields[pos].as_number() {
                Some(v) if v.is_finite() => Ok(v),
                Some(v) => Err(ChartDataError::malformed(index, format!("{name} is not finite ({v})"))),
                None => Err(ChartDataError::malformed(index, format!("{name} is not a number"))),
            }
        };
        let ohlcv = Ohlcv {
            open: number(1, "open")?,
            close: number(2, "close")?,
            low: number(3, "low")?,
            high: number(4, "high")?,
            volume: number(5, "volume")?,
        };
        if fields.len() > RAW_ROW_FIELDS {
            warn!(index, extra = fields.len() - RAW_ROW_FIELDS, "ignoring trailing fields");
        }
        Ok((date, ohlcv))
    }
}

/// Numeric part of a row. Serializes as `[open, close, low, high, volume]`,
/// the order the candlestick series reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ohlcv {
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub volume: f64,
}

impl Ohlcv {
    pub fn direction(&self) -> Direction {
        if self.open > self.close { Direction::Down } else { Direction::Up }
    }
}

impl Serialize for Ohlcv {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        (self.open, self.close, self.low, self.high, self.volume).serialize(s)
    }
}

/// Day direction encoded as a sign. `Down` (open above close) is 1, everything
/// else, including flat days, is -1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    pub const fn sign(self) -> i8 {
        match self {
            Direction::Down => 1,
            Direction::Up => -1,
        }
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        s.serialize_i8(self.sign())
    }
}

/// Volume bar `[index, volume, direction]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeBar {
    pub index: usize,
    pub volume: f64,
    pub direction: Direction,
}

impl Serialize for VolumeBar {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        (self.index, self.volume, self.direction).serialize(s)
    }
}

/// Three parallel sequences, index-aligned.
/// Contract: equal lengths, and `volumes[i].index == i`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitDataset {
    category_data: Vec<String>,
    values: Vec<Ohlcv>,
    volumes: Vec<VolumeBar>,
}

impl SplitDataset {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            category_data: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
            volumes: Vec::with_capacity(n),
        }
    }

    /// Append one day, keeping the three sequences aligned.
    pub fn push(&mut self, date: impl Into<String>, value: Ohlcv) {
        let index = self.values.len();
        self.category_data.push(date.into());
        self.volumes.push(VolumeBar { index, volume: value.volume, direction: value.direction() });
        self.values.push(value);
    }

    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    pub fn category_data(&self) -> &[String] { &self.category_data }

    pub fn values(&self) -> &[Ohlcv] { &self.values }

    pub fn volumes(&self) -> &[VolumeBar] { &self.volumes }

    /// Close prices in row order.
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().map(|v| v.close)
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<Ohlcv>, Vec<VolumeBar>) {
        (self.category_data, self.values, self.volumes)
    }
}

/// Split raw rows into a [`SplitDataset`]. The first malformed row aborts the split.
pub fn split_data(rows: &[RawRow]) -> Result<SplitDataset> {
    let mut out = SplitDataset::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let (date, value) = row.parse(index)?;
        out.push(date, value);
    }
    debug!(rows = out.len(), "split raw rows");
    Ok(out)
}
