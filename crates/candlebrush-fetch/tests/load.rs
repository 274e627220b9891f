// File: crates/candlebrush-fetch/tests/load.rs
// Purpose: Pipeline from a data source to the option document, including failure paths.

use async_trait::async_trait;
use candlebrush_core::{ChartConfigBuilder, ChartDataError, ChartSettings, MaPoint, RawRow};
use candlebrush_fetch::{load_dataset, load_document, DataSource, FetchError, LoadError};

struct Fixed(Vec<RawRow>);

#[async_trait]
impl DataSource for Fixed {
    fn describe(&self) -> String { "fixed".into() }

    async fn load(&self) -> Result<Vec<RawRow>, FetchError> { Ok(self.0.clone()) }
}

struct Unreachable;

#[async_trait]
impl DataSource for Unreachable {
    fn describe(&self) -> String { "http://unreachable.invalid/".into() }

    async fn load(&self) -> Result<Vec<RawRow>, FetchError> {
        Err(FetchError::Timeout { url: self.describe() })
    }
}

fn rows() -> Vec<RawRow> {
    vec![
        RawRow::new("2016-06-01", 10.0, 12.0, 9.0, 13.0, 100.0),
        RawRow::new("2016-06-02", 12.0, 11.0, 10.0, 13.0, 200.0),
        RawRow::new("2016-06-03", 11.0, 14.0, 10.5, 15.0, 300.0),
        RawRow::new("2016-06-06", 14.0, 14.0, 13.0, 15.0, 400.0),
    ]
}

#[tokio::test]
async fn builds_document_from_source() {
    let builder = ChartConfigBuilder::new(ChartSettings::default().with_windows(vec![2, 3]));
    let doc = load_document(&Fixed(rows()), &builder).await.expect("load");
    assert_eq!(doc.option.legend.data, vec!["Dow-Jones index", "MA2", "MA3"]);
    match &doc.option.series[1] {
        candlebrush_core::chart::SeriesOption::Line(line) => {
            assert_eq!(line.data[2], MaPoint::Value(12.5));
        }
        other => panic!("expected line series, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_failure_is_surfaced() {
    let builder = ChartConfigBuilder::new(ChartSettings::default());
    let err = load_document(&Unreachable, &builder).await.expect_err("must fail");
    assert!(matches!(err, LoadError::Fetch(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn malformed_row_aborts_before_build() {
    let mut bad = rows();
    bad.push(RawRow(bad[0].0[..3].to_vec()));
    let err = load_dataset(&Fixed(bad)).await.expect_err("must fail");
    assert!(matches!(err, LoadError::Data(ChartDataError::MalformedRow { index: 4, .. })));
}

#[tokio::test]
async fn bad_window_aborts_pipeline() {
    let builder = ChartConfigBuilder::new(ChartSettings::default());
    let err = load_document(&Fixed(rows()), &builder).await.expect_err("MA5 over 4 rows");
    assert!(matches!(err, LoadError::Data(ChartDataError::InvalidWindowSize { day_count: 5, len: 4 })));
}
