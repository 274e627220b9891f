// File: crates/candlebrush-core/src/grid.rs
// Summary: Two-grid layout: price on top, volume below.

use serde::Serialize;

use crate::types::{GRID_LEFT, GRID_RIGHT};

/// Grid placement in CSS-like percentages of the container.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridOption {
    pub left: &'static str,
    pub right: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
    pub height: &'static str,
}

/// Index of the volume grid and its axes.
pub const VOLUME_GRID: usize = 1;

pub fn price_grid() -> GridOption {
    GridOption { left: GRID_LEFT, right: GRID_RIGHT, top: None, height: "50%" }
}

pub fn volume_grid() -> GridOption {
    GridOption { left: GRID_LEFT, right: GRID_RIGHT, top: Some("63%"), height: "16%" }
}

/// Price grid followed by the volume grid.
pub fn layout() -> Vec<GridOption> {
    vec![price_grid(), volume_grid()]
}
