use super::open_decompressed;
use crate::error::{ContentError, Result};
use crate::input::SEQUENCE_COLUMN;
use crate::sequence_processor::core::*;
use std::path::Path;

/// Delimited text with a header row; reads come from the `sequence` column.
pub struct TableReader {
    reader: csv::Reader<Box<dyn std::io::Read>>,
    column: usize,
    record: csv::StringRecord,
    batch_size: usize,
}

impl TableReader {
    /// Fails with [`ContentError::MissingColumn`] before any row is read.
    pub fn new(path: &Path, delimiter: u8, batch_size: usize) -> Result<Self> {
        let inner_reader = open_decompressed(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .from_reader(inner_reader);

        let column = reader
            .headers()?
            .iter()
            .position(|name| name.trim() == SEQUENCE_COLUMN)
            .ok_or_else(|| ContentError::MissingColumn {
                column: SEQUENCE_COLUMN.to_string(),
            })?;

        Ok(Self {
            reader,
            column,
            record: csv::StringRecord::new(),
            batch_size: batch_size.max(1),
        })
    }
}

impl SequenceReader for TableReader {
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
        let mut batch = Vec::with_capacity(self.batch_size.min(4096));

        while batch.len() < self.batch_size {
            if !self.reader.read_record(&mut self.record)? {
                break;
            }
            let value = self.record.get(self.column).unwrap_or_default();
            batch.push(Sequence::from_text(value));
        }

        Ok((!batch.is_empty()).then_some(batch))
    }
}
