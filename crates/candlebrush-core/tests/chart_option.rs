// File: crates/candlebrush-core/tests/chart_option.rs
// Purpose: Validate the option document shape handed to the renderer.

use candlebrush_core::theme;
use candlebrush_core::{split_data, ChartConfigBuilder, ChartDataError, ChartSettings, MovingAverage, RawRow, Theme};
use serde_json::{json, Value};

fn dataset() -> candlebrush_core::SplitDataset {
    split_data(&[
        RawRow::new("2016-06-01", 10.0, 12.0, 9.0, 13.0, 100.0),
        RawRow::new("2016-06-02", 12.0, 11.0, 10.0, 13.0, 200.0),
        RawRow::new("2016-06-03", 11.0, 14.0, 10.5, 15.0, 300.0),
        RawRow::new("2016-06-06", 14.0, 14.0, 13.0, 15.0, 400.0),
    ])
    .expect("split")
}

fn option_json(settings: ChartSettings) -> Value {
    let doc = ChartConfigBuilder::new(settings).build(dataset()).expect("build");
    serde_json::to_value(&doc).expect("json")
}

#[test]
fn top_level_options() {
    let v = option_json(ChartSettings::default().with_windows(vec![2, 3]));
    let o = &v["option"];
    assert_eq!(o["animation"], json!(false));
    assert_eq!(o["legend"], json!({ "bottom": 10, "left": "center", "data": ["Dow-Jones index", "MA2", "MA3"] }));
    assert_eq!(o["tooltip"]["trigger"], "axis");
    assert_eq!(o["tooltip"]["axisPointer"], json!({ "type": "cross" }));
    assert_eq!(o["tooltip"]["borderColor"], "#ccc");
    assert_eq!(o["tooltip"]["textStyle"]["color"], "#000");
    assert_eq!(o["axisPointer"]["link"], json!([{ "xAxisIndex": "all" }]));
    assert_eq!(o["toolbox"]["feature"]["brush"]["type"], json!(["lineX", "clear"]));
    assert_eq!(o["brush"]["outOfBrush"]["colorAlpha"], json!(0.1));
}

#[test]
fn series_carry_computed_data_unchanged() {
    let v = option_json(ChartSettings::default().with_windows(vec![2, 3]));
    let series = v["option"]["series"].as_array().expect("series");
    assert_eq!(series.len(), 4);

    assert_eq!(series[0]["type"], "candlestick");
    assert_eq!(series[0]["data"][1], json!([12.0, 11.0, 10.0, 13.0, 200.0]));
    assert_eq!(series[0]["itemStyle"], json!({ "color": "#00da3c", "color0": "#ec0000" }));

    assert_eq!(series[1]["type"], "line");
    assert_eq!(series[1]["name"], "MA2");
    assert_eq!(series[1]["data"], json!(["-", "-", 12.5, 14.0]));
    assert_eq!(series[1]["smooth"], json!(true));
    assert_eq!(series[2]["data"], json!(["-", "-", "-", 13.0]));

    assert_eq!(series[3]["type"], "bar");
    assert_eq!(series[3]["xAxisIndex"], json!(1));
    assert_eq!(series[3]["data"], json!([[0, 100.0, -1], [1, 200.0, 1], [2, 300.0, -1], [3, 400.0, -1]]));
}

#[test]
fn visual_map_targets_volume_series() {
    let v = option_json(ChartSettings::default().with_windows(vec![2, 3]));
    let vm = &v["option"]["visualMap"];
    assert_eq!(vm["seriesIndex"], json!(3));
    assert_eq!(vm["dimension"], json!(2));
    assert_eq!(vm["pieces"], json!([{ "value": 1, "color": "#ec0000" }, { "value": -1, "color": "#00da3c" }]));

    let v = option_json(ChartSettings::default().with_windows(vec![]));
    assert_eq!(v["option"]["visualMap"]["seriesIndex"], json!(1));
    assert_eq!(v["option"]["series"][1]["type"], "bar");
}

#[test]
fn two_grids_share_the_dates() {
    let v = option_json(ChartSettings::default().with_windows(vec![2]));
    let o = &v["option"];
    assert_eq!(o["grid"].as_array().map(Vec::len), Some(2));
    assert_eq!(o["grid"][1]["top"], "63%");
    assert!(o["grid"][0].get("top").is_none());

    let dates = json!(["2016-06-01", "2016-06-02", "2016-06-03", "2016-06-06"]);
    assert_eq!(o["xAxis"][0]["data"], dates);
    assert_eq!(o["xAxis"][1]["data"], dates);
    assert_eq!(o["xAxis"][1]["gridIndex"], json!(1));
    assert_eq!(o["xAxis"][1]["axisLabel"], json!({ "show": false }));
    assert_eq!(o["xAxis"][0]["axisPointer"], json!({ "z": 100 }));
    assert_eq!(o["yAxis"][1]["splitNumber"], json!(2));

    assert_eq!(o["dataZoom"][0], json!({ "type": "inside", "xAxisIndex": [0, 1], "start": 98.0, "end": 100.0 }));
    assert_eq!(o["dataZoom"][1]["type"], "slider");
    assert_eq!(o["dataZoom"][1]["top"], "85%");
}

#[test]
fn initial_brush_is_optional() {
    let v = option_json(ChartSettings::default().with_windows(vec![2]));
    assert_eq!(
        v["initialBrush"],
        json!({ "type": "brush", "areas": [{ "brushType": "lineX", "coordRange": ["2016-06-02", "2016-06-20"], "xAxisIndex": 0 }] })
    );

    let v = option_json(ChartSettings::default().with_windows(vec![2]).with_brush(None));
    assert!(v.get("initialBrush").is_none());
}

#[test]
fn oversized_window_aborts_build() {
    let err = ChartConfigBuilder::new(ChartSettings::default()).build(dataset()).expect_err("MA5 over 4 rows");
    assert_eq!(err, ChartDataError::InvalidWindowSize { day_count: 5, len: 4 });
}

#[test]
fn extra_indicator_and_theme() {
    let builder = ChartConfigBuilder::new(ChartSettings::default().with_windows(vec![2]).with_theme("red-up"))
        .with_indicator(MovingAverage::new(4));
    assert_eq!(builder.theme().name, "red-up");
    let doc = builder.build(dataset()).expect("build");
    let names: Vec<&str> = doc.option.series.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["Dow-Jones index", "MA2", "MA4", "Volume"]);
    assert_eq!(doc.option.visual_map.series_index, 3);
    assert_eq!(doc.option.visual_map.pieces[0].color, "#00da3c");

    let doc = ChartConfigBuilder::new(ChartSettings::default().with_windows(vec![2]))
        .with_theme(Theme::dark())
        .build(dataset())
        .expect("build");
    assert_eq!(doc.option.tooltip.border_color, Theme::dark().tooltip_border);
}

#[test]
fn theme_lookup_falls_back() {
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("no-such-theme"), Theme::echarts());
    assert_eq!(theme::presets().len(), 5);
}

#[test]
fn settings_from_partial_json() {
    let s = ChartSettings::from_json_str(r#"{ "ma_windows": [2, 3], "theme": "light", "brush": null }"#).expect("settings");
    assert_eq!(s.ma_windows, vec![2, 3]);
    assert_eq!(s.theme, "light");
    assert_eq!(s.brush, None);
    assert_eq!(s.series_name, "Dow-Jones index");

    assert!(matches!(ChartSettings::from_json_str(r#"{ "windows": [2] }"#), Err(ChartDataError::Settings(_))));
    assert!(matches!(
        ChartSettings::from_json_str(r#"{ "zoom": { "start": 90, "end": 50 } }"#),
        Err(ChartDataError::Settings(_))
    ));
}

#[test]
fn unknown_theme_in_settings_is_rejected() {
    assert!(theme::lookup("no-such-theme").is_none());
    assert_eq!(theme::lookup("High-Contrast").map(|t| t.name), Some("high-contrast"));

    match ChartSettings::from_json_str(r#"{ "theme": "solarized" }"#) {
        Err(ChartDataError::Settings(msg)) => assert!(msg.contains("unknown theme 'solarized'"), "{msg}"),
        other => panic!("expected settings error, got {other:?}"),
    }
    assert!(ChartSettings::default().with_theme("nope").validate().is_err());
    assert!(ChartSettings::default().with_theme("DARK").validate().is_ok());
}
