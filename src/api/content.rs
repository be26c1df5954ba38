use crate::config::ContentOptions;
use crate::content::{materialize_with, BaseContentProcessor, ContentTable};
use crate::error::Result;
use crate::input::SequenceSource;
use crate::sequence_processor::core::{ProcessingStats, SequenceProcessor, SequenceReader};
use indicatif::ProgressBar;
use tracing::info;

/// A finished table together with what was read to build it.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentReport {
    pub table: ContentTable,
    pub stats: ProcessingStats,
}

pub struct ContentAnalyzer {
    options: ContentOptions,
    progress: ProgressBar,
}

impl ContentAnalyzer {
    pub fn new(options: ContentOptions) -> Self {
        Self {
            options,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report reads processed on `progress` while running.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Count every read of `source` and materialize the result.
    ///
    /// Input problems are reported before any read is counted; nothing
    /// partial is returned.
    pub fn analyze(&self, source: impl Into<SequenceSource>) -> Result<ContentReport> {
        let source = source.into();
        info!(
            kind = source.kind(),
            threads = self.options.threads,
            batch_size = self.options.batch_size,
            "computing base content"
        );

        let mut reader = source.open(self.options.batch_size)?;
        let mut processor = BaseContentProcessor::new();
        let stats =
            reader.read_sequences_with_threads(&mut processor, &self.progress, self.options.threads)?;
        processor.finalize()?;

        let table = materialize_with(processor.aggregate(), &self.options.projection());
        info!(
            sequences = stats.processed,
            empty = stats.empty,
            nulls = stats.skipped,
            positions = table.len(),
            "base content complete"
        );

        Ok(ContentReport { table, stats })
    }
}

/// Per-position base composition of every read in `source`.
pub fn base_sequence_content(
    source: impl Into<SequenceSource>,
    options: &ContentOptions,
) -> Result<ContentTable> {
    ContentAnalyzer::new(options.clone())
        .analyze(source)
        .map(|report| report.table)
}
