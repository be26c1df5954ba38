use super::open_decompressed;
use crate::error::{ContentError, Result};
use crate::sequence_processor::core::*;
use bio::io::fasta::{self, FastaRead};
use std::io::BufReader;
use std::path::Path;

pub struct FastaReader {
    reader: fasta::Reader<BufReader<Box<dyn std::io::Read>>>,
    record: fasta::Record,
    batch_size: usize,
}

impl FastaReader {
    pub fn new(path: &Path, batch_size: usize) -> Result<Self> {
        let inner_reader = open_decompressed(path)?;
        Ok(Self {
            reader: fasta::Reader::new(inner_reader),
            record: fasta::Record::new(),
            batch_size: batch_size.max(1),
        })
    }
}

impl SequenceReader for FastaReader {
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
        let mut batch = Vec::with_capacity(self.batch_size.min(4096));

        while batch.len() < self.batch_size {
            self.reader
                .read(&mut self.record)
                .map_err(|e| ContentError::Parse {
                    format: "FASTA",
                    message: e.to_string(),
                })?;
            if self.record.is_empty() {
                break;
            }
            batch.push(Sequence::new(self.record.seq().to_vec()).with_id(self.record.id()));
        }

        Ok((!batch.is_empty()).then_some(batch))
    }
}
