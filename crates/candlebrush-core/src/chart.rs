// File: crates/candlebrush-core/src/chart.rs
// Summary: Chart settings and the builder assembling the split data and indicator lines
//          into the declarative option document consumed by the external renderer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{XAxisOption, YAxisOption};
use crate::error::{ChartDataError, Result};
use crate::grid::{self, GridOption, VOLUME_GRID};
use crate::indicator::{Indicator, MaPoint, MovingAverage};
use crate::series::{Ohlcv, SplitDataset, VolumeBar};
use crate::theme::{self, Theme};
use crate::types::{DEFAULT_MA_WINDOWS, DEFAULT_SERIES_NAME, DEFAULT_VOLUME_NAME, VOLUME_DIRECTION_DIMENSION};
use crate::view::{Brush, BrushAction, BrushRange, DataZoom, Toolbox, ZoomWindow};

/// User-facing chart knobs. Missing JSON keys fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub series_name: String,
    pub volume_name: String,
    pub ma_windows: Vec<usize>,
    /// Theme preset name, see [`theme::presets`].
    pub theme: String,
    pub zoom: ZoomWindow,
    pub brush: Option<BrushRange>,
    pub animation: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            series_name: DEFAULT_SERIES_NAME.to_string(),
            volume_name: DEFAULT_VOLUME_NAME.to_string(),
            ma_windows: DEFAULT_MA_WINDOWS.to_vec(),
            theme: Theme::echarts().name.to_string(),
            zoom: ZoomWindow::default(),
            brush: Some(BrushRange::default()),
            animation: false,
        }
    }
}

impl ChartSettings {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(s).map_err(|e| ChartDataError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Zoom window in range and theme naming a known preset.
    pub fn validate(&self) -> Result<()> {
        self.zoom.validate()?;
        if theme::lookup(&self.theme).is_none() {
            let known: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
            return Err(ChartDataError::Settings(format!(
                "unknown theme '{}', expected one of {}",
                self.theme,
                known.join(", ")
            )));
        }
        Ok(())
    }

    pub fn with_windows(mut self, windows: impl Into<Vec<usize>>) -> Self {
        self.ma_windows = windows.into();
        self
    }

    pub fn with_theme(mut self, name: impl Into<String>) -> Self {
        self.theme = name.into();
        self
    }

    pub fn with_brush(mut self, brush: Option<BrushRange>) -> Self {
        self.brush = brush;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub bottom: u32,
    pub left: &'static str,
    pub data: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub trigger: &'static str,
    pub axis_pointer: PointerType,
    pub border_width: u32,
    pub border_color: &'static str,
    pub padding: u32,
    pub text_style: TextStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PointerType {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    pub color: &'static str,
}

/// Cross-axis pointer linking.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisPointerLink {
    pub link: Vec<LinkTarget>,
    pub label: PointerLabel,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTarget {
    pub x_axis_index: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerLabel {
    pub background_color: &'static str,
}

/// Colours volume bars by the direction dimension of each tuple.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMap {
    pub show: bool,
    pub series_index: usize,
    pub dimension: usize,
    pub pieces: Vec<Piece>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Piece {
    pub value: i8,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeriesOption {
    Candlestick(CandlestickSeries),
    Line(LineSeries),
    Bar(BarSeries),
}

impl SeriesOption {
    pub fn name(&self) -> &str {
        match self {
            SeriesOption::Candlestick(s) => &s.name,
            SeriesOption::Line(s) => &s.name,
            SeriesOption::Bar(s) => &s.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandlestickSeries {
    pub name: String,
    pub data: Vec<Ohlcv>,
    pub item_style: CandleStyle,
}

/// `color` fills rising candles, `color0` falling ones.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CandleStyle {
    pub color: &'static str,
    pub color0: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSeries {
    pub name: String,
    pub data: Vec<MaPoint>,
    pub smooth: bool,
    pub line_style: LineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LineStyle {
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSeries {
    pub name: String,
    pub x_axis_index: usize,
    pub y_axis_index: usize,
    pub data: Vec<VolumeBar>,
}

/// The ECharts `option` document.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOption {
    pub animation: bool,
    pub legend: Legend,
    pub tooltip: Tooltip,
    pub axis_pointer: AxisPointerLink,
    pub toolbox: Toolbox,
    pub brush: Brush,
    pub visual_map: VisualMap,
    pub grid: Vec<GridOption>,
    pub x_axis: Vec<XAxisOption>,
    pub y_axis: Vec<YAxisOption>,
    pub data_zoom: Vec<DataZoom>,
    pub series: Vec<SeriesOption>,
}

/// Option plus the brush action dispatched once the option is applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDocument {
    pub option: ChartOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_brush: Option<BrushAction>,
}

impl ChartDocument {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds a [`ChartDocument`] from a split dataset.
pub struct ChartConfigBuilder {
    settings: ChartSettings,
    theme: Theme,
    indicators: Vec<Box<dyn Indicator>>,
}

impl ChartConfigBuilder {
    /// One moving-average indicator per configured window, theme resolved by name.
    pub fn new(settings: ChartSettings) -> Self {
        let theme = theme::find(&settings.theme);
        let indicators = settings
            .ma_windows
            .iter()
            .map(|&d| Box::new(MovingAverage::new(d)) as Box<dyn Indicator>)
            .collect();
        Self { settings, theme, indicators }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append an extra line indicator after the configured moving averages.
    pub fn with_indicator(mut self, indicator: impl Indicator + 'static) -> Self {
        self.indicators.push(Box::new(indicator));
        self
    }

    pub fn settings(&self) -> &ChartSettings { &self.settings }

    pub fn theme(&self) -> &Theme { &self.theme }

    pub fn build(&self, data: SplitDataset) -> Result<ChartDocument> {
        self.settings.zoom.validate()?;

        let mut lines = Vec::with_capacity(self.indicators.len());
        for ind in &self.indicators {
            lines.push((ind.label(), ind.compute(&data)?));
        }

        let theme = &self.theme;
        // Candlestick first, then lines, then volume.
        let volume_series_index = 1 + lines.len();
        let (dates, values, volumes) = data.into_parts();

        let mut legend = Vec::with_capacity(1 + lines.len());
        legend.push(self.settings.series_name.clone());
        legend.extend(lines.iter().map(|(label, _)| label.clone()));

        let mut series = Vec::with_capacity(2 + lines.len());
        series.push(SeriesOption::Candlestick(CandlestickSeries {
            name: self.settings.series_name.clone(),
            data: values,
            item_style: CandleStyle { color: theme.candle_up, color0: theme.candle_down },
        }));
        for (name, points) in lines {
            series.push(SeriesOption::Line(LineSeries {
                name,
                data: points,
                smooth: true,
                line_style: LineStyle { opacity: theme.ma_opacity },
            }));
        }
        series.push(SeriesOption::Bar(BarSeries {
            name: self.settings.volume_name.clone(),
            x_axis_index: VOLUME_GRID,
            y_axis_index: VOLUME_GRID,
            data: volumes,
        }));

        let option = ChartOption {
            animation: self.settings.animation,
            legend: Legend { bottom: 10, left: "center", data: legend },
            tooltip: Tooltip {
                trigger: "axis",
                axis_pointer: PointerType { kind: "cross" },
                border_width: 1,
                border_color: theme.tooltip_border,
                padding: 10,
                text_style: TextStyle { color: theme.tooltip_text },
            },
            axis_pointer: AxisPointerLink {
                link: vec![LinkTarget { x_axis_index: "all" }],
                label: PointerLabel { background_color: theme.axis_pointer_label },
            },
            toolbox: Toolbox::default(),
            brush: Brush::linked(theme.out_of_brush_alpha),
            visual_map: VisualMap {
                show: false,
                series_index: volume_series_index,
                dimension: VOLUME_DIRECTION_DIMENSION,
                pieces: vec![
                    Piece { value: 1, color: theme.candle_down },
                    Piece { value: -1, color: theme.candle_up },
                ],
            },
            grid: grid::layout(),
            x_axis: vec![XAxisOption::price(dates.clone()), XAxisOption::volume(dates, VOLUME_GRID)],
            y_axis: vec![YAxisOption::price(theme.split_area), YAxisOption::volume(VOLUME_GRID)],
            data_zoom: self.settings.zoom.data_zoom(&[0, VOLUME_GRID]),
            series,
        };

        debug!(series = option.series.len(), theme = theme.name, "built chart option");
        Ok(ChartDocument {
            option,
            initial_brush: self.settings.brush.as_ref().map(BrushRange::action),
        })
    }
}
