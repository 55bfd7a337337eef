//! Dataset rows and CSV loading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::field::Field;
use crate::error::{ChartError, Result};

/// One row of the census dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub age: f64,
    pub income: f64,
    pub healthcare: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl Record {
    pub fn value(&self, field: Field) -> f64 {
        match field {
            Field::Poverty => self.poverty,
            Field::Age => self.age,
            Field::Income => self.income,
            Field::Healthcare => self.healthcare,
            Field::Smokes => self.smokes,
            Field::Obesity => self.obesity,
        }
    }
}

/// Ordered, non-empty sequence of records.
///
/// Marks are matched to records by position, so the order is fixed once the
/// dataset is built.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate and wrap already-parsed records.
    pub fn new(records: Vec<Record>) -> Result<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        for (i, r) in records.iter().enumerate() {
            if let Some(field) = Field::ALL.into_iter().find(|f| !r.value(*f).is_finite()) {
                return Err(ChartError::NonFinite {
                    record: i + 1,
                    state: r.state.clone(),
                    field,
                });
            }
        }
        Ok(Self { records })
    }

    /// Parse CSV with a header row. Columns are matched by name; columns the
    /// chart does not use (ids, margins of error) are ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();
        for row in rdr.deserialize::<Record>() {
            records.push(row?);
        }
        Self::new(records)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ChartError::io(path, e))?;
        let ds = Self::from_reader(file)?;
        tracing::info!(path = %path.display(), records = ds.len(), "loaded dataset");
        Ok(ds)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// `(min, max)` of a field over all records.
    pub fn extent(&self, field: Field) -> (f64, f64) {
        self.records
            .iter()
            .map(|r| r.value(field))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "id,state,abbr,poverty,age,income,healthcare,obesity,smokes\n";

    #[test]
    fn extra_columns_and_column_order_do_not_matter() {
        let csv = format!("{HEADER}1,Alabama,AL,19.3,38.6,42830,13.9,33.5,21.1\n");
        let ds = Dataset::from_reader(csv.as_bytes()).unwrap();
        let r = &ds.records()[0];
        assert_eq!(r.abbr, "AL");
        assert_eq!(r.obesity, 33.5);
        assert_eq!(r.smokes, 21.1);
    }

    #[test]
    fn header_only_is_empty_dataset() {
        let err = Dataset::from_reader(HEADER.as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::EmptyDataset));
    }

    #[test]
    fn non_numeric_measure_is_a_csv_error() {
        let csv = format!("{HEADER}1,Alabama,AL,n/a,38.6,42830,13.9,33.5,21.1\n");
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, ChartError::Csv(_)));
    }

    #[test]
    fn nan_measure_is_rejected() {
        let csv = format!("{HEADER}1,Alabama,AL,19.3,NaN,42830,13.9,33.5,21.1\n");
        let err = Dataset::from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            ChartError::NonFinite { record: 1, field: Field::Age, .. }
        ));
        assert_eq!(err.to_string(), "record 1 (Alabama): age is not a finite number");
    }
}
