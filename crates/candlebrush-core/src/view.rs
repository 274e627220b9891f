// File: crates/candlebrush-core/src/view.rs
// Initial view state: visible zoom window, brush tooling and the initial brush selection.

use serde::{Deserialize, Serialize};

use crate::error::{ChartDataError, Result};
use crate::types::{DEFAULT_BRUSH_FROM, DEFAULT_BRUSH_TO, DEFAULT_ZOOM_END, DEFAULT_ZOOM_START};

/// Visible window as percentages of the category axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoomWindow {
    pub start: f64,
    pub end: f64,
}

impl ZoomWindow {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    pub fn validate(&self) -> Result<()> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.start) || !in_range(self.end) || self.start > self.end {
            return Err(ChartDataError::Settings(format!(
                "zoom window {}..{} must satisfy 0 <= start <= end <= 100",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Both zoom components share the window across all x axes.
    pub fn data_zoom(&self, x_axes: &[usize]) -> Vec<DataZoom> {
        vec![
            DataZoom {
                kind: "inside",
                show: None,
                x_axis_index: x_axes.to_vec(),
                top: None,
                start: self.start,
                end: self.end,
            },
            DataZoom {
                kind: "slider",
                show: Some(true),
                x_axis_index: x_axes.to_vec(),
                top: Some("85%"),
                start: self.start,
                end: self.end,
            },
        ]
    }
}

impl Default for ZoomWindow {
    fn default() -> Self { Self { start: DEFAULT_ZOOM_START, end: DEFAULT_ZOOM_END } }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataZoom {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    pub x_axis_index: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
    pub start: f64,
    pub end: f64,
}

/// Date range selected by the initial brush (category values, inclusive).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushRange {
    pub from: String,
    pub to: String,
}

impl BrushRange {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }

    /// `dispatchAction` payload selecting this range on the price axis.
    pub fn action(&self) -> BrushAction {
        BrushAction {
            kind: "brush",
            areas: vec![BrushArea {
                brush_type: "lineX",
                coord_range: [self.from.clone(), self.to.clone()],
                x_axis_index: 0,
            }],
        }
    }
}

impl Default for BrushRange {
    fn default() -> Self { Self::new(DEFAULT_BRUSH_FROM, DEFAULT_BRUSH_TO) }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrushAction {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub areas: Vec<BrushArea>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrushArea {
    pub brush_type: &'static str,
    pub coord_range: [String; 2],
    pub x_axis_index: usize,
}

/// Brush component linking every x axis.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brush {
    pub x_axis_index: &'static str,
    pub brush_link: &'static str,
    pub out_of_brush: OutOfBrush,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutOfBrush {
    pub color_alpha: f64,
}

impl Brush {
    pub fn linked(out_of_brush_alpha: f64) -> Self {
        Self {
            x_axis_index: "all",
            brush_link: "all",
            out_of_brush: OutOfBrush { color_alpha: out_of_brush_alpha },
        }
    }
}

/// Toolbox with box zoom (x only) and the horizontal brush.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Toolbox {
    pub feature: ToolboxFeature,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxFeature {
    pub data_zoom: ToolboxDataZoom,
    pub brush: ToolboxBrush,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolboxDataZoom {
    pub y_axis_index: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ToolboxBrush {
    #[serde(rename = "type")]
    pub kinds: Vec<&'static str>,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self {
            feature: ToolboxFeature {
                data_zoom: ToolboxDataZoom { y_axis_index: false },
                brush: ToolboxBrush { kinds: vec!["lineX", "clear"] },
            },
        }
    }
}
