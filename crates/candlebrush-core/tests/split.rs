// File: crates/candlebrush-core/tests/split.rs
// Purpose: Validate splitting raw rows into dates, OHLC tuples and volume bars.

use candlebrush_core::{split_data, ChartDataError, Direction, RawField, RawRow};

fn rows() -> Vec<RawRow> {
    vec![
        RawRow::new("2016-06-01", 10.0, 12.0, 9.0, 13.0, 100.0),
        RawRow::new("2016-06-02", 12.0, 11.0, 10.0, 13.0, 200.0),
        RawRow::new("2016-06-03", 11.0, 14.0, 10.5, 15.0, 300.0),
        RawRow::new("2016-06-06", 14.0, 14.0, 13.0, 15.0, 400.0),
    ]
}

#[test]
fn split_keeps_sequences_aligned() {
    let input = rows();
    let data = split_data(&input).expect("split");

    assert_eq!(data.len(), input.len());
    assert_eq!(data.category_data().len(), input.len());
    assert_eq!(data.values().len(), input.len());
    assert_eq!(data.volumes().len(), input.len());
    for (i, v) in data.volumes().iter().enumerate() {
        assert_eq!(v.index, i);
    }
    assert_eq!(data.category_data()[2], "2016-06-03");
    assert_eq!(data.values()[1].close, 11.0);
    assert_eq!(data.volumes()[3].volume, 400.0);
}

#[test]
fn direction_is_one_when_open_above_close() {
    let data = split_data(&rows()).expect("split");
    let signs: Vec<i8> = data.volumes().iter().map(|v| v.direction.sign()).collect();
    // up, down, up, flat
    assert_eq!(signs, vec![-1, 1, -1, -1]);

    for (value, bar) in data.values().iter().zip(data.volumes()) {
        let expect = if value.open > value.close { Direction::Down } else { Direction::Up };
        assert_eq!(bar.direction, expect);
    }
}

#[test]
fn split_leaves_input_untouched() {
    let input = rows();
    let before = input.clone();
    let _ = split_data(&input).expect("split");
    assert_eq!(input, before);
    assert_eq!(input[0].len(), 6);
}

#[test]
fn empty_input_gives_empty_dataset() {
    let data = split_data(&[]).expect("split");
    assert!(data.is_empty());
    assert!(data.volumes().is_empty());
}

#[test]
fn decodes_wire_rows() {
    let json = r#"[
        ["2004-01-02", 10452.74, 10409.85, 10367.41, 10554.96, 168890000],
        ["2004-01-05", 10411.85, 10544.07, 10411.85, 10575.92, 221290000, "extra"]
    ]"#;
    let raw: Vec<RawRow> = serde_json::from_str(json).expect("decode");
    assert_eq!(raw[0].0[0], RawField::Text("2004-01-02".into()));
    assert_eq!(raw[0].0[5], RawField::Number(168890000.0));

    let data = split_data(&raw).expect("split");
    assert_eq!(data.len(), 2);
    let v = data.values()[0];
    assert_eq!((v.open, v.close, v.low, v.high, v.volume), (10452.74, 10409.85, 10367.41, 10554.96, 168890000.0));
    assert_eq!(data.volumes()[0].direction.sign(), 1);
    assert_eq!(data.volumes()[1].direction.sign(), -1);
}

#[test]
fn short_row_is_rejected() {
    let raw: Vec<RawRow> = serde_json::from_str(r#"[["2004-01-02", 1, 2, 3, 4, 5], ["2004-01-05", 1, 2, 3]]"#)
        .expect("decode");
    match split_data(&raw) {
        Err(ChartDataError::MalformedRow { index, reason }) => {
            assert_eq!(index, 1);
            assert!(reason.contains("found 4"), "reason: {reason}");
        }
        other => panic!("expected malformed row, got {other:?}"),
    }
}

#[test]
fn ill_typed_fields_are_rejected() {
    let cases = [
        (r#"[[20040102, 1, 2, 3, 4, 5]]"#, "date"),
        (r#"[["2004-01-02", "1", 2, 3, 4, 5]]"#, "open"),
        (r#"[["2004-01-02", 1, 2, 3, 4, null]]"#, "volume"),
        (r#"[["2004-01-02", 1, 2, [3], 4, 5]]"#, "low"),
    ];
    for (json, field) in cases {
        let raw: Vec<RawRow> = serde_json::from_str(json).expect("decode");
        let err = split_data(&raw).expect_err(json);
        assert!(
            matches!(&err, ChartDataError::MalformedRow { index: 0, reason } if reason.starts_with(field)),
            "{json}: {err}"
        );
    }
}

#[test]
fn non_finite_values_are_rejected() {
    let good = RawRow::new("2004-01-02", 1.0, 2.0, 0.5, 2.5, 10.0);
    let cases = [
        (RawRow::new("2004-01-05", 1.0, f64::NAN, 0.5, 2.5, 10.0), "close"),
        (RawRow::new("2004-01-05", f64::INFINITY, 2.0, 0.5, 2.5, 10.0), "open"),
        (RawRow::new("2004-01-05", 1.0, 2.0, 0.5, 2.5, f64::NEG_INFINITY), "volume"),
    ];
    for (bad, field) in cases {
        let err = split_data(&[good.clone(), bad]).expect_err(field);
        assert!(
            matches!(&err, ChartDataError::MalformedRow { index: 1, reason } if reason.starts_with(field)),
            "{field}: {err}"
        );
    }
}
