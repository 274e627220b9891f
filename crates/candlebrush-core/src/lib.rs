// File: crates/candlebrush-core/src/lib.rs
// Summary: Core library entry point; exports the data split, moving averages and chart option builder.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod view;
pub mod theme;
pub mod indicator;
pub mod error;

pub use chart::{ChartConfigBuilder, ChartDocument, ChartOption, ChartSettings};
pub use series::{split_data, Direction, Ohlcv, RawField, RawRow, SplitDataset, VolumeBar};
pub use indicator::{calculate_ma, Indicator, MaPoint, MovingAverage, MovingAverageSeries};
pub use view::{BrushAction, BrushRange, ZoomWindow};
pub use theme::Theme;
pub use error::{ChartDataError, Result};
