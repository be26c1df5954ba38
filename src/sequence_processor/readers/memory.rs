use crate::error::Result;
use crate::sequence_processor::core::*;

/// Batches reads that are already in memory. `None` entries are nulls and are
/// dropped, counted as skipped.
pub struct MemoryReader {
    values: std::vec::IntoIter<Option<String>>,
    batch_size: usize,
    skipped: u64,
}

impl MemoryReader {
    pub fn new(values: Vec<Option<String>>, batch_size: usize) -> Self {
        Self {
            values: values.into_iter(),
            batch_size: batch_size.max(1),
            skipped: 0,
        }
    }
}

impl SequenceReader for MemoryReader {
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
        let mut batch = Vec::with_capacity(self.batch_size.min(4096));

        while batch.len() < self.batch_size {
            match self.values.next() {
                Some(Some(text)) => batch.push(Sequence::from_text(&text)),
                Some(None) => self.skipped += 1,
                None => break,
            }
        }

        Ok((!batch.is_empty()).then_some(batch))
    }

    fn skipped(&self) -> u64 {
        self.skipped
    }
}
