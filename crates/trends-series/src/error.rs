// File: crates/trends-series/src/error.rs
// Summary: Error type shared by row reading and series building.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    /// A data row carried a value that cannot be normalized.
    /// `row` is the zero-based data row index (header excluded).
    #[error("row {row}: invalid {field} value {value:?}")]
    DataFormat {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("row {row}: missing column `{column}`")]
    MissingColumn { row: usize, column: &'static str },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

impl SeriesError {
    pub(crate) fn data_format(row: usize, field: &'static str, value: &str) -> Self {
        Self::DataFormat { row, field, value: value.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, SeriesError>;
