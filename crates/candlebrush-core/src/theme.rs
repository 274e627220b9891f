// File: crates/candlebrush-core/src/theme.rs
// Summary: Colour presets for candles, volume pieces, tooltip and axis pointer.

/// Colours are CSS strings handed to the renderer unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub candle_up: &'static str,
    pub candle_down: &'static str,
    pub tooltip_border: &'static str,
    pub tooltip_text: &'static str,
    pub axis_pointer_label: &'static str,
    /// Alternate shading behind the price grid.
    pub split_area: bool,
    pub ma_opacity: f64,
    pub out_of_brush_alpha: f64,
}

impl Theme {
    pub fn echarts() -> Self {
        Self {
            name: "echarts",
            candle_up: "#00da3c",
            candle_down: "#ec0000",
            tooltip_border: "#ccc",
            tooltip_text: "#000",
            axis_pointer_label: "#777",
            split_area: true,
            ma_opacity: 0.5,
            out_of_brush_alpha: 0.1,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            candle_up: "#28c878",
            candle_down: "#dc5050",
            tooltip_border: "#555",
            tooltip_text: "#ebebf5",
            axis_pointer_label: "#444",
            split_area: false,
            ma_opacity: 0.7,
            out_of_brush_alpha: 0.15,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            candle_up: "#14a05a",
            candle_down: "#c83c3c",
            tooltip_border: "#ddd",
            tooltip_text: "#14141e",
            axis_pointer_label: "#888",
            split_area: true,
            ma_opacity: 0.5,
            out_of_brush_alpha: 0.1,
        }
    }

    /// Red-up/green-down, as quoted on mainland exchanges.
    pub fn red_up() -> Self {
        Self {
            name: "red-up",
            candle_up: "#ec0000",
            candle_down: "#00da3c",
            ..Self::echarts()
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            candle_up: "#00ff00",
            candle_down: "#ff0000",
            tooltip_border: "#fff",
            tooltip_text: "#000",
            axis_pointer_label: "#000",
            split_area: false,
            ma_opacity: 1.0,
            out_of_brush_alpha: 0.05,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::echarts() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::echarts(),
        Theme::dark(),
        Theme::light(),
        Theme::red_up(),
        Theme::high_contrast(),
    ]
}

/// Preset named `name` (case-insensitive), if any.
pub fn lookup(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Find a theme by its `name`, falling back to `echarts`.
pub fn find(name: &str) -> Theme {
    lookup(name).unwrap_or_else(Theme::echarts)
}
