use super::aggregate::PartialAggregate;
use crate::error::Result;
use crate::sequence_processor::core::{Sequence, SequenceProcessor};

/// A processor that folds every read it sees into a [`PartialAggregate`].
#[derive(Debug, Clone, Default)]
pub struct BaseContentProcessor {
    aggregate: PartialAggregate,
}

impl BaseContentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&self) -> &PartialAggregate {
        &self.aggregate
    }

    pub fn into_aggregate(self) -> PartialAggregate {
        self.aggregate
    }
}

impl SequenceProcessor for BaseContentProcessor {
    fn process_sequence(&mut self, sequence: &Sequence) -> Result<()> {
        self.aggregate.absorb(&sequence.data);
        Ok(())
    }

    fn process_batch(&mut self, batch: &[Sequence]) -> Result<()> {
        self.aggregate
            .absorb_batch(batch.iter().map(|sequence| &sequence.data));
        Ok(())
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    fn fork(&self) -> Self {
        Self::new()
    }

    fn merge_processor(&mut self, other: Self) -> Result<()> {
        let mine = std::mem::take(&mut self.aggregate);
        self.aggregate = mine.merge(other.aggregate);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::aggregate::count_batch;
    use crate::content::Symbol;
    use crate::sequence_processor::threading::merge_processors;

    fn batch(reads: &[&str]) -> Vec<Sequence> {
        reads.iter().map(|read| Sequence::from_text(read)).collect()
    }

    #[test]
    fn fork_starts_empty() {
        let mut processor = BaseContentProcessor::new();
        processor.process_batch(&batch(&["ACGT"])).unwrap();
        assert!(processor.fork().aggregate().is_empty());
    }

    #[test]
    fn text_reads_count_one_position_per_char() {
        let mut processor = BaseContentProcessor::new();
        processor.process_batch(&batch(&["AéC"])).unwrap();

        let aggregate = processor.aggregate();
        assert_eq!(aggregate.len(), 3);
        let middle = aggregate.record(1).unwrap();
        assert_eq!(middle.count(Symbol::Other), 1);
        assert_eq!(middle.total(), 1);
        assert_eq!(aggregate.record(2).unwrap().count(Symbol::C), 1);
    }

    #[test]
    fn merged_workers_match_single_pass() {
        let reads = ["ACGT", "AAGC", "", "TTNXA", "G", "acgtacgt"];
        let expected = count_batch(reads);

        let mut workers: Vec<BaseContentProcessor> = Vec::new();
        for chunk in reads.chunks(2) {
            let mut worker = BaseContentProcessor::new();
            worker.process_batch(&batch(chunk)).unwrap();
            workers.push(worker);
        }

        let mut main = BaseContentProcessor::new();
        merge_processors(workers, &mut main).unwrap();
        assert_eq!(main.into_aggregate(), expected);
    }
}
