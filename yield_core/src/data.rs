use std::{fs, path::Path};

use crate::{Covariates, MlError, Result};

/// Name of the column holding the observed yield.
pub const LABEL_COLUMN: &str = "yield";

/// One historical observation: the covariates and the yield that was measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub covariates: Covariates,
    pub label: f64,
}

impl Record {
    pub fn new(covariates: Covariates, label: f64) -> Self {
        Self { covariates, label }
    }
}

/// An ordered, read-only collection of labeled records.
///
/// A `Dataset` is only used to score a model. It is never mutated after it
/// is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    /// Returns `MlError::Io` if the file cannot be read, or any error from
    /// [`Dataset::from_csv_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| MlError::io(path, e))?;
        let dataset = Self::from_csv_str(&content)?;

        log::info!(
            "loaded {} record(s) from '{}'",
            dataset.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Parses a CSV document whose header names the `rainfall`, `temperature`,
    /// `humidity`, `ph` and `yield` columns.
    ///
    /// Columns are matched by name, so their order in the file is irrelevant
    /// and extra columns are ignored. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns `MlError::InvalidInput` if the header is missing a required
    /// column, or if any row is missing a cell or holds a value that is not a
    /// finite number.
    pub fn from_csv_str(content: &str) -> Result<Self> {
        let mut lines = content
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (_, header) = lines
            .next()
            .ok_or_else(|| MlError::InvalidInput("dataset has no header".into()))?;

        let columns = Columns::from_header(header)?;

        let records = lines
            .map(|(lineno, line)| columns.parse_row(lineno, line))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { records })
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fetches a record by index.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Returns the observed yields, in record order.
    pub fn labels(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.label).collect()
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Positions of the required columns within a CSV row.
struct Columns {
    features: [usize; Covariates::LEN],
    label: usize,
    width: usize,
}

impl Columns {
    fn from_header(header: &str) -> Result<Self> {
        let names: Vec<&str> = header.split(',').map(|n| n.trim()).collect();

        let position = |column: &str| {
            names
                .iter()
                .position(|n| n.eq_ignore_ascii_case(column))
                .ok_or_else(|| MlError::InvalidInput(format!("missing column: {column}")))
        };

        let mut features = [0; Covariates::LEN];
        for (slot, name) in features.iter_mut().zip(Covariates::FEATURES) {
            *slot = position(name)?;
        }

        Ok(Self {
            features,
            label: position(LABEL_COLUMN)?,
            width: names.len(),
        })
    }

    fn parse_row(&self, lineno: usize, line: &str) -> Result<Record> {
        let cells: Vec<&str> = line.split(',').map(|c| c.trim()).collect();

        if cells.len() < self.width {
            return Err(MlError::InvalidInput(format!(
                "line {lineno}: expected {} values, got {}",
                self.width,
                cells.len()
            )));
        }

        let value = |idx: usize, column: &str| -> Result<f64> {
            let cell = cells[idx];
            if cell.is_empty() {
                return Err(MlError::InvalidInput(format!(
                    "line {lineno}: missing value for {column}"
                )));
            }

            cell.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    MlError::InvalidInput(format!(
                        "line {lineno}: cannot parse '{cell}' as a number for {column}"
                    ))
                })
        };

        let [rainfall, temperature, humidity, ph] = self.features;
        let [rainfall_name, temperature_name, humidity_name, ph_name] = Covariates::FEATURES;

        Ok(Record {
            covariates: Covariates {
                rainfall: value(rainfall, rainfall_name)?,
                temperature: value(temperature, temperature_name)?,
                humidity: value(humidity, humidity_name)?,
                ph: value(ph, ph_name)?,
            },
            label: value(self.label, LABEL_COLUMN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
rainfall,temperature,humidity,ph,yield
1000,22,75,6.0,4.1
1200,24.5,80,5.8,4.6
";

    #[test]
    fn parses_named_columns() {
        let dataset = Dataset::from_csv_str(CSV).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.get(1).unwrap(),
            &Record::new(Covariates::new(1200.0, 24.5, 80.0, 5.8), 4.6)
        );
        assert_eq!(dataset.labels(), vec![4.1, 4.6]);
    }

    #[test]
    fn column_order_does_not_matter() {
        let shuffled = "\
yield,ph,humidity,region,rainfall,temperature
4.1,6.0,75,north,1000,22
";
        let dataset = Dataset::from_csv_str(shuffled).unwrap();

        assert_eq!(
            dataset.get(0).unwrap(),
            &Record::new(Covariates::new(1000.0, 22.0, 75.0, 6.0), 4.1)
        );
    }

    #[test]
    fn skips_blank_lines() {
        let csv = "rainfall,temperature,humidity,ph,yield\n\n1000,22,75,6.0,4.1\n   \n";
        assert_eq!(Dataset::from_csv_str(csv).unwrap().len(), 1);
    }

    #[test]
    fn header_only_is_an_empty_dataset() {
        let dataset = Dataset::from_csv_str("rainfall,temperature,humidity,ph,yield\n").unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn rejects_missing_column() {
        let csv = "rainfall,temperature,ph,yield\n1000,22,6.0,4.1\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();

        assert!(matches!(err, MlError::InvalidInput(ref msg) if msg.contains("humidity")));
    }

    #[test]
    fn rejects_missing_cell() {
        let csv = "rainfall,temperature,humidity,ph,yield\n1000,22,,6.0,4.1\n";
        let err = Dataset::from_csv_str(csv).unwrap_err();

        assert!(matches!(err, MlError::InvalidInput(ref msg) if msg.contains("line 2")));
    }

    #[test]
    fn rejects_short_row() {
        let csv = "rainfall,temperature,humidity,ph,yield\n1000,22,75,6.0\n";
        assert!(matches!(
            Dataset::from_csv_str(csv),
            Err(MlError::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_non_numeric_and_non_finite_values() {
        for bad in ["abc", "NaN", "inf"] {
            let csv = format!("rainfall,temperature,humidity,ph,yield\n1000,22,75,{bad},4.1\n");
            assert!(matches!(
                Dataset::from_csv_str(&csv),
                Err(MlError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(
            Dataset::from_csv_str("  \n"),
            Err(MlError::InvalidInput(_))
        ));
    }
}
