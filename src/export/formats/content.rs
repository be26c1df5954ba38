use crate::api::ContentReport;
use serde::{Deserialize, Serialize};

/// Run-level numbers reported next to the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStatistics {
    pub sequences_processed: u64,
    pub empty_sequences: u64,
    pub null_sequences: u64,
    pub batches: u64,
    pub max_length: usize,
}

impl From<&ContentReport> for ContentStatistics {
    fn from(report: &ContentReport) -> Self {
        Self {
            sequences_processed: report.stats.processed,
            empty_sequences: report.stats.empty,
            null_sequences: report.stats.skipped,
            batches: report.stats.batches,
            max_length: report.table.len(),
        }
    }
}
