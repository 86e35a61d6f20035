// File: crates/trends-series/src/row.rs
// Summary: Raw CSV rows as column-name -> string mappings, read with the `csv` crate.

use std::collections::HashMap;
use std::io;

use crate::error::Result;
use crate::schema::{NUM, VOLUME};

/// One data row keyed by (trimmed) header name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { fields: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Value column: `volume`, or `num` for files using the count header.
    pub fn value(&self) -> Option<&str> {
        self.get(VOLUME).or_else(|| self.get(NUM))
    }
}

/// Parsed CSV: header row plus data rows.
#[derive(Clone, Debug, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

/// Read a headered CSV. Records with a field count different from the
/// header are rejected by the reader.
pub fn read_rows<R: io::Read>(reader: R) -> Result<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();

    let mut rows = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let fields = headers
            .iter()
            .zip(rec.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(RawRow { fields });
    }
    Ok(RawTable { headers, rows })
}

pub fn parse_rows(text: &str) -> Result<RawTable> {
    read_rows(text.as_bytes())
}
