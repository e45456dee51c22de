//! End-to-end tests for applying Top/Bottom transformations to time series.

use tempora::{Bottom, SelectionMode, TimeSeries, Top, TransformKind, Transformation, select};

fn cpu_series() -> TimeSeries {
    [
        (1_609_459_200_000, 42.5),
        (1_609_459_260_000, 97.0),
        (1_609_459_320_000, 12.0),
        (1_609_459_380_000, 97.0),
        (1_609_459_440_000, 63.5),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_top_replaces_series_content() {
    let mut series = cpu_series();

    Top::new(3).apply(&mut series).unwrap();

    assert_eq!(series.len(), 3);
    assert_eq!(
        series.timestamps(),
        &[1_609_459_260_000, 1_609_459_380_000, 1_609_459_440_000]
    );
    assert_eq!(series.values(), &[97.0, 97.0, 63.5]);
}

#[test]
fn test_bottom_replaces_series_content() {
    let mut series = cpu_series();

    Bottom::new(2).apply(&mut series).unwrap();

    assert_eq!(series.timestamps(), &[1_609_459_200_000, 1_609_459_320_000]);
    assert_eq!(series.values(), &[42.5, 12.0]);
}

#[test]
fn test_tie_at_cutoff_keeps_earliest() {
    let mut series = cpu_series();

    // Both 97.0 points tie for the single slot; the earlier one wins.
    Top::new(1).apply(&mut series).unwrap();

    assert_eq!(series.timestamps(), &[1_609_459_260_000]);
    assert_eq!(series.values(), &[97.0]);
}

#[test]
fn test_transformations_through_trait_objects() {
    // Pipeline frameworks hold transformations behind the trait.
    let pipeline: Vec<Box<dyn Transformation>> = vec![Box::new(Top::new(4)), Box::new(Bottom::new(2))];

    let mut series = cpu_series();
    for transformation in &pipeline {
        transformation.apply(&mut series).unwrap();
    }

    // Top 4 drops 12.0; bottom 2 of the remainder keeps 42.5 and 63.5.
    assert_eq!(series.timestamps(), &[1_609_459_200_000, 1_609_459_440_000]);
    assert_eq!(series.values(), &[42.5, 63.5]);

    let kinds: Vec<TransformKind> = pipeline.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, vec![TransformKind::Top, TransformKind::Bottom]);

    let arguments: Vec<Vec<String>> = pipeline.iter().map(|t| t.arguments()).collect();
    assert_eq!(arguments[0], vec!["value=4".to_string()]);
    assert_eq!(arguments[1], vec!["value=2".to_string()]);
}

#[test]
fn test_descriptor_reuse_across_threads() {
    let top = Top::new(2);

    let handles: Vec<_> = (0..4)
        .map(|offset| {
            std::thread::spawn(move || {
                let mut series: TimeSeries = (0..100i32)
                    .map(|i| (i64::from(offset) * 1000 + i64::from(i), f64::from(i)))
                    .collect();
                top.apply(&mut series).unwrap();
                series.values().to_vec()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![98.0, 99.0]);
    }
}

#[test]
fn test_selector_rejects_mismatched_arrays() {
    let err = select(SelectionMode::Largest, 2, &[1, 2, 3], &[1.0, 2.0]).unwrap_err();
    assert!(err.to_string().contains("equal length"));
}

#[test]
fn test_failed_bulk_append_leaves_series_untouched() {
    let mut series = cpu_series();
    let before = series.clone();

    assert!(series.add_all(&[1, 2], &[1.0]).is_err());
    assert_eq!(series, before);
}
