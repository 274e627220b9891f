// File: crates/candlebrush-core/src/axis.rs
// Summary: Category x axes and scaled y axes for the price and volume grids.

use serde::Serialize;

/// `{ show: bool }` toggle used by several axis parts.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Toggle {
    pub show: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { show: true };
    pub const OFF: Toggle = Toggle { show: false };
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLine {
    pub on_zero: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AxisPointerZ {
    pub z: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XAxisOption {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<usize>,
    pub data: Vec<String>,
    pub boundary_gap: bool,
    pub axis_line: AxisLine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    pub split_line: Toggle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<Toggle>,
    pub min: &'static str,
    pub max: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_pointer: Option<AxisPointerZ>,
}

impl XAxisOption {
    /// Category axis over the dates of the price grid.
    pub fn price(dates: Vec<String>) -> Self {
        Self {
            kind: "category",
            grid_index: None,
            data: dates,
            boundary_gap: false,
            axis_line: AxisLine { on_zero: false },
            axis_tick: None,
            split_line: Toggle::OFF,
            axis_label: None,
            min: "dataMin",
            max: "dataMax",
            axis_pointer: Some(AxisPointerZ { z: 100 }),
        }
    }

    /// Category axis under the volume bars; labels and ticks hidden.
    pub fn volume(dates: Vec<String>, grid_index: usize) -> Self {
        Self {
            grid_index: Some(grid_index),
            axis_tick: Some(Toggle::OFF),
            axis_label: Some(Toggle::OFF),
            axis_pointer: None,
            ..Self::price(dates)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YAxisOption {
    pub scale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_area: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_label: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_line: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_tick: Option<Toggle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_line: Option<Toggle>,
}

impl YAxisOption {
    pub fn price(split_area: bool) -> Self {
        Self {
            scale: true,
            grid_index: None,
            split_number: None,
            split_area: Some(Toggle { show: split_area }),
            axis_label: None,
            axis_line: None,
            axis_tick: None,
            split_line: None,
        }
    }

    /// Bare value axis for volume: two splits, nothing drawn.
    pub fn volume(grid_index: usize) -> Self {
        Self {
            scale: true,
            grid_index: Some(grid_index),
            split_number: Some(2),
            split_area: None,
            axis_label: Some(Toggle::OFF),
            axis_line: Some(Toggle::OFF),
            axis_tick: Some(Toggle::OFF),
            split_line: Some(Toggle::OFF),
        }
    }
}
