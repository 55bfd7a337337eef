use std::io::Write;

use censusplot::{ChartError, Dataset, Field};

const HEADER: &str = "state,abbr,poverty,age,income,healthcare,smokes,obesity";

#[test]
fn single_record_parses_every_measure() {
    let csv = format!("{HEADER}\nX,XX,10,30,50000,5,20,25\n");
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(ds.len(), 1);
    let r = &ds.records()[0];
    assert_eq!(r.state, "X");
    assert_eq!(r.abbr, "XX");
    let values: Vec<f64> = Field::ALL.iter().map(|f| r.value(*f)).collect();
    assert_eq!(values, vec![10.0, 30.0, 50000.0, 5.0, 20.0, 25.0]);
}

#[test]
fn whitespace_around_values_is_trimmed() {
    let csv = format!("{HEADER}\n X , XX , 10 , 30 , 50000 , 5 , 20 , 25 \n");
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(ds.records()[0].state, "X");
    assert_eq!(ds.records()[0].income, 50000.0);
}

#[test]
fn order_is_preserved() {
    let csv = format!("{HEADER}\nB,BB,1,1,1,1,1,1\nA,AA,2,2,2,2,2,2\nC,CC,3,3,3,3,3,3\n");
    let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
    let abbrs: Vec<&str> = ds.records().iter().map(|r| r.abbr.as_str()).collect();
    assert_eq!(abbrs, ["BB", "AA", "CC"]);
    assert_eq!(ds.extent(Field::Age), (1.0, 3.0));
}

#[test]
fn missing_column_is_an_error() {
    let csv = "state,abbr,poverty\nX,XX,10\n";
    assert!(matches!(
        Dataset::from_reader(csv.as_bytes()),
        Err(ChartError::Csv(_))
    ));
}

#[test]
fn load_from_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "{HEADER}").unwrap();
    writeln!(f, "Alabama,AL,19.3,38.6,42830,13.9,21.1,33.5").unwrap();
    writeln!(f, "Alaska,AK,11.2,33.3,71583,15,19.9,29.7").unwrap();
    f.flush().unwrap();

    let ds = Dataset::load(f.path()).unwrap();
    assert_eq!(ds.len(), 2);
    assert_eq!(ds.extent(Field::Income), (42830.0, 71583.0));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.csv");
    match Dataset::load(&path) {
        Err(ChartError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn bundled_sample_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/data/data.csv");
    let ds = Dataset::load(path).unwrap();
    assert!(ds.len() >= 10);
    assert!(ds.records().iter().all(|r| r.abbr.len() == 2));
}
