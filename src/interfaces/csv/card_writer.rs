use crate::domain::card_data::CardData;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Outcome of validating one number in batch mode.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ValidationRecord {
    pub number: String,
    pub valid: bool,
}

/// Writes generated cards and validation results as CSV.
///
/// Headers come from the serialized field names, so the first row written
/// fixes the column layout.
pub struct CardWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CardWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_cards<'a, I>(&mut self, cards: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a CardData>,
    {
        for card in cards {
            self.writer.serialize(card)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    pub fn write_validation(&mut self, record: &ValidationRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
