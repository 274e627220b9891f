// File: crates/candlebrush-demo/src/page.rs
// Summary: Standalone HTML page that hands the option document to ECharts.

use candlebrush_core::ChartDocument;

/// ECharts build loaded by the page.
pub const ECHARTS_CDN: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";

/// Tooltip placement callback: pinned 10px from the top, 30px from the edge
/// opposite the pointer.
pub const TOOLTIP_POSITION_JS: &str = r#"function (pos, params, el, elRect, size) {
    const obj = { top: 10 };
    obj[['left', 'right'][+(pos[0] < size.viewSize[0] / 2)]] = 30;
    return obj;
  }"#;

/// Render the page. The document JSON is embedded verbatim; `</` is escaped so
/// category labels cannot close the script tag.
pub fn render(doc: &ChartDocument, title: &str) -> serde_json::Result<String> {
    let option = serde_json::to_string(&doc.option)?.replace("</", "<\\/");
    let brush = match &doc.initial_brush {
        Some(action) => format!("chart.dispatchAction({});", serde_json::to_string(action)?.replace("</", "<\\/")),
        None => String::new(),
    };
    let title = escape_html(title);

    Ok(format!(r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="{ECHARTS_CDN}"></script>
  <style>
    html, body {{ margin: 0; height: 100%; }}
    #main {{ width: 100%; height: 100%; }}
  </style>
</head>
<body>
  <div id="main"></div>
  <script>
    const chart = echarts.init(document.getElementById('main'));
    const option = {option};
    option.tooltip.position = {TOOLTIP_POSITION_JS};
    chart.setOption(option);
    {brush}
    window.addEventListener('resize', () => chart.resize());
  </script>
</body>
</html>
"##))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
