// File: crates/candlebrush-core/src/types.rs
// Summary: Shared constants (series names, default windows, layout percentages, sentinel).

/// Marker emitted where a moving average has insufficient history.
pub const NO_DATA: &str = "-";

/// Legend/series name of the candlestick series.
pub const DEFAULT_SERIES_NAME: &str = "Dow-Jones index";
/// Series name of the volume bars.
pub const DEFAULT_VOLUME_NAME: &str = "Volume";

/// Moving-average windows shown in the legend, in days.
pub const DEFAULT_MA_WINDOWS: [usize; 4] = [5, 10, 20, 30];

/// Minimum number of fields in a raw row: date, open, close, low, high, volume.
pub const RAW_ROW_FIELDS: usize = 6;

/// Decimal places kept in moving-average values.
pub const MA_DECIMALS: i32 = 3;

/// Initial zoom window, percent of the category axis.
pub const DEFAULT_ZOOM_START: f64 = 98.0;
pub const DEFAULT_ZOOM_END: f64 = 100.0;

/// Initial brush selection on the first x axis.
pub const DEFAULT_BRUSH_FROM: &str = "2016-06-02";
pub const DEFAULT_BRUSH_TO: &str = "2016-06-20";

/// Value dimension of a volume tuple carrying the direction sign.
pub const VOLUME_DIRECTION_DIMENSION: usize = 2;

/// Horizontal insets shared by both grids.
pub const GRID_LEFT: &str = "10%";
pub const GRID_RIGHT: &str = "8%";
