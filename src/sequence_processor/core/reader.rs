use super::processor::SequenceProcessor;
use super::sequence::Sequence;
use super::stats::ProcessingStats;
use crate::error::Result;
use crate::sequence_processor::threading::{merge_processors, ThreadPool};
use indicatif::ProgressBar;

/// A source of read batches.
///
/// Implementors only decide how reads are decoded and grouped; feeding them
/// to a processor, on one thread or many, is shared.
pub trait SequenceReader {
    /// The next batch, or `None` once the source is exhausted.
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>>;

    /// Entries the reader dropped before batching (null cells).
    fn skipped(&self) -> u64 {
        0
    }

    fn read_sequences_single_thread<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
    ) -> Result<ProcessingStats> {
        let mut stats = ProcessingStats::default();

        while let Some(batch) = self.next_batch()? {
            processor.process_batch(&batch)?;
            stats.record_batch(&batch);
            progress.set_position(stats.processed);
        }

        stats.skipped = self.skipped();
        Ok(stats)
    }

    fn read_sequences_with_threads<P: SequenceProcessor>(
        &mut self,
        processor: &mut P,
        progress: &ProgressBar,
        num_threads: usize,
    ) -> Result<ProcessingStats> {
        if num_threads <= 1 || !processor.supports_parallel() {
            return self.read_sequences_single_thread(processor, progress);
        }

        let pool = ThreadPool::new(processor, num_threads)?;
        let mut sent = 0u64;

        loop {
            let batch = match self.next_batch() {
                Ok(Some(batch)) => batch,
                Ok(None) => break,
                // Workers are joined before the decode error is returned.
                Err(e) => return pool.finish().and(Err(e)),
            };
            sent += batch.len() as u64;
            if let Err(e) = pool.send(batch) {
                // Prefer the worker's own failure over the closed channel.
                return pool.finish().and(Err(e));
            }
            progress.set_position(sent);
        }

        let (mut stats, processors) = pool.finish()?;
        stats.skipped = self.skipped();

        merge_processors(processors, processor)?;

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;

    /// Yields `good` single-read batches, then fails.
    struct FailingReader {
        good: usize,
    }

    impl SequenceReader for FailingReader {
        fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
            if self.good == 0 {
                return Err(ContentError::Parse {
                    format: "FASTQ",
                    message: "truncated record".to_string(),
                });
            }
            self.good -= 1;
            Ok(Some(vec![Sequence::from_text("ACGT")]))
        }
    }

    #[derive(Default)]
    struct ReadCounter {
        reads: u64,
    }

    impl SequenceProcessor for ReadCounter {
        fn process_sequence(&mut self, _sequence: &Sequence) -> Result<()> {
            self.reads += 1;
            Ok(())
        }

        fn supports_parallel(&self) -> bool {
            true
        }

        fn fork(&self) -> Self {
            Self::default()
        }

        fn merge_processor(&mut self, other: Self) -> Result<()> {
            self.reads += other.reads;
            Ok(())
        }
    }

    #[test]
    fn decode_error_stops_threaded_run() {
        let mut reader = FailingReader { good: 5 };
        let mut processor = ReadCounter::default();

        let err = reader
            .read_sequences_with_threads(&mut processor, &ProgressBar::hidden(), 3)
            .unwrap_err();

        assert!(matches!(err, ContentError::Parse { format: "FASTQ", .. }));
        assert_eq!(processor.reads, 0);
    }

    #[test]
    fn decode_error_stops_single_thread_run() {
        let mut reader = FailingReader { good: 2 };
        let mut processor = ReadCounter::default();

        let err = reader
            .read_sequences_with_threads(&mut processor, &ProgressBar::hidden(), 1)
            .unwrap_err();

        assert!(matches!(err, ContentError::Parse { .. }));
        assert_eq!(processor.reads, 2);
    }
}
