use crate::error::{CardError, Result};
use serde::Deserialize;
use std::io::Read;

/// One row of a batch validation input.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct NumberRecord {
    pub number: String,
}

/// Pulls the `number` column out of a batch CSV, one row at a time.
///
/// Cells are trimmed and other columns are ignored, so an exported card list
/// can be fed in as-is. A row without a `number` cell comes back as an error
/// and does not stop the rows after it.
pub struct NumberReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> NumberReader<R> {
    /// Wraps `source`; the first row must be the header.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records(self) -> impl Iterator<Item = Result<NumberRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CardError::from))
    }
}
