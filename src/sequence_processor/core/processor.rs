use super::sequence::Sequence;
use crate::error::Result;

pub trait SequenceProcessor: Send + Sized + 'static {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()>;

    fn process_batch(&mut self, batch: &[Sequence]) -> Result<()> {
        for sequence in batch {
            self.process_sequence(sequence)?;
        }
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        Ok(())
    }

    fn supports_parallel(&self) -> bool {
        false
    }

    /// An empty processor with the same settings, for use on a worker thread.
    fn fork(&self) -> Self;

    /// Absorb everything `other` has accumulated.
    fn merge_processor(&mut self, other: Self) -> Result<()>;
}
