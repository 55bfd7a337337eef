use std::path::PathBuf;

use censusplot::{ChartConfig, ChartError, ColorScheme, Selection, TransitionPolicy, XField, YField};

#[test]
fn defaults_match_reference_layout() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.data_path, PathBuf::from("assets/data/data.csv"));
    assert_eq!(cfg.initial, Selection::default());
    assert_eq!(cfg.layout.width, 1024.0);
    assert_eq!(cfg.layout.height, 768.0);
    assert_eq!(cfg.layout.margin.left, 100.0);
    assert_eq!(cfg.transition.duration_secs, 3.0);
    assert_eq!(cfg.transition.policy, TransitionPolicy::Restart);
}

#[test]
fn partial_yaml_keeps_other_defaults() {
    let cfg = ChartConfig::from_yaml_str(
        "initial: { x: income, y: obesity }\n\
         transition: { policy: ignore_while_running }\n\
         layout: { margin: { left: 120 } }\n\
         color_scheme: dark\n",
    )
    .unwrap();
    assert_eq!(cfg.initial, Selection::new(XField::Income, YField::Obesity));
    assert_eq!(cfg.transition.policy, TransitionPolicy::IgnoreWhileRunning);
    assert_eq!(cfg.transition.duration_secs, 3.0);
    assert_eq!(cfg.layout.margin.left, 120.0);
    assert_eq!(cfg.layout.margin.right, 40.0);
    assert_eq!(cfg.color_scheme, ColorScheme::Dark);
}

#[test]
fn empty_document_is_default() {
    assert_eq!(ChartConfig::from_yaml_str("").unwrap(), ChartConfig::default());
}

#[test]
fn field_on_wrong_axis_is_rejected() {
    let err = ChartConfig::from_yaml_str("initial: { x: obesity, y: smokes }\n").unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn initial_with_one_axis_keeps_default_other_axis() {
    let cfg = ChartConfig::from_yaml_str("initial: { x: income }\n").unwrap();
    assert_eq!(cfg.initial, Selection::new(XField::Income, YField::Healthcare));
    let cfg = ChartConfig::from_yaml_str("initial: { y: smokes }\n").unwrap();
    assert_eq!(cfg.initial, Selection::new(XField::Poverty, YField::Smokes));
}

#[test]
fn yaml_round_trip() {
    let mut cfg = ChartConfig::default();
    cfg.title = "Obesity vs age".to_string();
    cfg.initial = Selection::new(XField::Age, YField::Obesity);
    let yaml = cfg.to_yaml_string().unwrap();
    assert_eq!(ChartConfig::from_yaml_str(&yaml).unwrap(), cfg);
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.yaml");
    std::fs::write(&path, "title: Test\n").unwrap();
    assert_eq!(ChartConfig::load(&path).unwrap().title, "Test");
}
