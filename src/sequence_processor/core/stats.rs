use serde::Serialize;
use std::ops::AddAssign;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessingStats {
    /// Reads handed to the processor, empty ones included.
    pub processed: u64,
    /// Zero-length reads; they reach the processor but count nowhere.
    pub empty: u64,
    /// Null cells in tabular input, never forwarded.
    pub skipped: u64,
    pub batches: u64,
}

impl ProcessingStats {
    pub(crate) fn record_batch(&mut self, batch: &[super::Sequence]) {
        self.batches += 1;
        self.processed += batch.len() as u64;
        self.empty += batch.iter().filter(|sequence| sequence.is_empty()).count() as u64;
    }
}

impl AddAssign for ProcessingStats {
    fn add_assign(&mut self, other: Self) {
        self.processed += other.processed;
        self.empty += other.empty;
        self.skipped += other.skipped;
        self.batches += other.batches;
    }
}
