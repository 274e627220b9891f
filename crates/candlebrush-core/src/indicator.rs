// File: crates/candlebrush-core/src/indicator.rs
// Summary: Indicator trait and the trailing simple moving average over close prices.

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::error::{ChartDataError, Result};
use crate::series::SplitDataset;
use crate::types::{MA_DECIMALS, NO_DATA};

/// One point of a derived line. `Missing` serializes as the `"-"` marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaPoint {
    Missing,
    Value(f64),
}

impl MaPoint {
    pub fn value(&self) -> Option<f64> {
        match self {
            MaPoint::Missing => None,
            MaPoint::Value(v) => Some(*v),
        }
    }
}

impl Serialize for MaPoint {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MaPoint::Missing => s.serialize_str(NO_DATA),
            MaPoint::Value(v) => s.serialize_f64(*v),
        }
    }
}

/// Moving average over one window; same length as the dataset it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAverageSeries {
    pub day_count: usize,
    pub points: Vec<MaPoint>,
}

impl MovingAverageSeries {
    /// Legend label, e.g. `MA5`.
    pub fn name(&self) -> String { ma_label(self.day_count) }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

fn ma_label(day_count: usize) -> String { format!("MA{day_count}") }

/// Round half away from zero to the configured number of decimals.
pub fn round_decimals(v: f64) -> f64 {
    let scale = 10f64.powi(MA_DECIMALS);
    (v * scale).round() / scale
}

/// Trailing simple moving average of the close price.
///
/// Indices below `day_count` carry [`MaPoint::Missing`]. Index `i` averages the
/// closes at `i, i-1, .., i-day_count+1`, summed in that order.
/// Errors when `day_count` is zero or larger than the dataset.
pub fn calculate_ma(day_count: usize, data: &SplitDataset) -> Result<MovingAverageSeries> {
    let len = data.len();
    if day_count == 0 || day_count > len {
        return Err(ChartDataError::InvalidWindowSize { day_count, len });
    }
    let values = data.values();
    let mut points = Vec::with_capacity(len);
    for i in 0..len {
        if i < day_count {
            points.push(MaPoint::Missing);
            continue;
        }
        let mut sum = 0.0f64;
        for j in 0..day_count {
            sum += values[i - j].close;
        }
        points.push(MaPoint::Value(round_decimals(sum / day_count as f64)));
    }
    debug!(day_count, len, "computed moving average");
    Ok(MovingAverageSeries { day_count, points })
}

/// Indicator transforms a split dataset into a derived line series.
pub trait Indicator: Send + Sync {
    fn id(&self) -> &'static str;
    /// Series/legend label.
    fn label(&self) -> String;
    fn compute(&self, data: &SplitDataset) -> Result<Vec<MaPoint>>;
}

/// Moving-average indicator over a fixed window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovingAverage {
    pub day_count: usize,
}

impl MovingAverage {
    pub const fn new(day_count: usize) -> Self { Self { day_count } }
}

impl Indicator for MovingAverage {
    fn id(&self) -> &'static str { "ma" }

    fn label(&self) -> String { ma_label(self.day_count) }

    fn compute(&self, data: &SplitDataset) -> Result<Vec<MaPoint>> {
        calculate_ma(self.day_count, data).map(|s| s.points)
    }
}
