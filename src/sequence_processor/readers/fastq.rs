use super::open_decompressed;
use crate::error::{ContentError, Result};
use crate::sequence_processor::core::*;
use bio::io::fastq::{self, FastqRead};
use std::io::BufReader;
use std::path::Path;

pub struct FastqReader {
    reader: fastq::Reader<BufReader<Box<dyn std::io::Read>>>,
    record: fastq::Record,
    batch_size: usize,
}

impl FastqReader {
    pub fn new(path: &Path, batch_size: usize) -> Result<Self> {
        let inner_reader = open_decompressed(path)?;
        let buffered: Box<dyn std::io::Read> =
            Box::new(BufReader::with_capacity(16 * 1024 * 1024, inner_reader));
        Ok(Self {
            reader: fastq::Reader::new(buffered),
            record: fastq::Record::new(),
            batch_size: batch_size.max(1),
        })
    }

    fn create_sequence_from_record(&self) -> Sequence {
        Sequence::new(self.record.seq().to_vec()).with_id(self.record.id())
    }
}

impl SequenceReader for FastqReader {
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
        let mut batch = Vec::with_capacity(self.batch_size.min(4096));

        while batch.len() < self.batch_size {
            self.reader
                .read(&mut self.record)
                .map_err(|e| ContentError::Parse {
                    format: "FASTQ",
                    message: e.to_string(),
                })?;
            if self.record.is_empty() {
                break;
            }
            batch.push(self.create_sequence_from_record());
        }

        Ok((!batch.is_empty()).then_some(batch))
    }
}
