//! Delimited-text loader feeding [`Regression`](crate::Regression).
//!
//! Reads numeric rows and projects caller-chosen columns into response and
//! predictor tables. Selected columns keep the order they were requested in
//! and no intercept column is added.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{LinregError, LinregResult};

/// Response and predictor rows read from one source, row-aligned.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub features: Vec<Vec<f64>>,
    pub targets: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn n_samples(&self) -> usize {
        self.features.len()
    }

    pub fn n_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }
}

#[derive(Clone, Debug)]
pub struct CsvLoader {
    delimiter: u8,
    has_headers: bool,
}

impl CsvLoader {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }

    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Whether the first record is a header to skip. Defaults to `true`.
    pub fn has_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    pub fn load<P: AsRef<Path>>(
        &self,
        path: P,
        y_columns: &[usize],
        x_columns: &[usize],
    ) -> LinregResult<Dataset> {
        let file = File::open(path.as_ref())?;
        log::trace!("loading regression data from {}", path.as_ref().display());
        self.load_reader(file, y_columns, x_columns)
    }

    /// Reads records from `reader`. Quoted fields may contain the delimiter;
    /// blank lines are skipped and fields are trimmed.
    pub fn load_reader<R: Read>(
        &self,
        reader: R,
        y_columns: &[usize],
        x_columns: &[usize],
    ) -> LinregResult<Dataset> {
        if y_columns.is_empty() || x_columns.is_empty() {
            return Err(LinregError::InvalidArgument(
                "at least one response and one predictor column are required".to_string(),
            ));
        }

        let mut rdr = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut features = Vec::new();
        let mut targets = Vec::new();

        for record in rdr.records() {
            let record = record?;
            let line = record.position().map_or(0, |p| p.line() as usize);
            targets.push(project(&record, y_columns, line)?);
            features.push(project(&record, x_columns, line)?);
        }

        if features.is_empty() {
            return Err(LinregError::InvalidArgument(
                "source contains no data rows".to_string(),
            ));
        }

        log::trace!(
            "loaded {} rows ({} response, {} predictor columns)",
            features.len(),
            y_columns.len(),
            x_columns.len()
        );
        Ok(Dataset { features, targets })
    }
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn project(record: &StringRecord, columns: &[usize], line: usize) -> LinregResult<Vec<f64>> {
    columns
        .iter()
        .map(|&column| {
            let value = record.get(column).ok_or_else(|| {
                LinregError::InvalidArgument(format!(
                    "column {} out of range on line {} ({} fields)",
                    column,
                    line,
                    record.len()
                ))
            })?;
            value.parse::<f64>().map_err(|_| LinregError::Parse {
                line,
                column,
                value: value.to_string(),
            })
        })
        .collect()
}
