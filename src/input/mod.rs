//! Reduces every accepted input shape to one batch reader over the
//! `sequence` column.
//!
//! All contract checks (missing column, wrong column type, missing file,
//! unknown file kind) run here, before the first read is counted.

mod frame;

pub use frame::{Column, Frame, LazyFrame, Record, Value};

use crate::error::{ContentError, Result};
use crate::sequence_processor::readers::{FileKind, InputReader, MemoryReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the column every tabular input must provide.
pub const SEQUENCE_COLUMN: &str = "sequence";

/// Every input shape the engine accepts.
#[derive(Debug)]
pub enum SequenceSource {
    /// A FASTQ, FASTA, CSV or TSV file, optionally compressed.
    Path(PathBuf),
    /// A deferred table, forced in full before counting starts.
    Lazy(LazyFrame),
    /// An eager column-oriented table.
    Frame(Frame),
    /// An eager row-oriented table.
    Records(Vec<Record>),
}

impl SequenceSource {
    pub fn kind(&self) -> &'static str {
        match self {
            SequenceSource::Path(_) => "path",
            SequenceSource::Lazy(_) => "lazy frame",
            SequenceSource::Frame(_) => "frame",
            SequenceSource::Records(_) => "records",
        }
    }

    /// Validate the input and return a reader producing batches of at most
    /// `batch_size` reads.
    pub fn open(self, batch_size: usize) -> Result<InputReader> {
        debug!(kind = self.kind(), batch_size, "opening input");
        match self {
            SequenceSource::Path(path) => open_path(&path, batch_size),
            SequenceSource::Lazy(plan) => {
                let frame = plan.collect()?;
                debug!(rows = frame.height(), "collected lazy frame");
                Ok(memory_reader(sequences_from_frame(frame)?, batch_size))
            }
            SequenceSource::Frame(frame) => {
                Ok(memory_reader(sequences_from_frame(frame)?, batch_size))
            }
            SequenceSource::Records(records) => {
                Ok(memory_reader(sequences_from_records(records)?, batch_size))
            }
        }
    }
}

impl From<PathBuf> for SequenceSource {
    fn from(path: PathBuf) -> Self {
        SequenceSource::Path(path)
    }
}

impl From<&Path> for SequenceSource {
    fn from(path: &Path) -> Self {
        SequenceSource::Path(path.to_path_buf())
    }
}

impl From<LazyFrame> for SequenceSource {
    fn from(plan: LazyFrame) -> Self {
        SequenceSource::Lazy(plan)
    }
}

impl From<Frame> for SequenceSource {
    fn from(frame: Frame) -> Self {
        SequenceSource::Frame(frame)
    }
}

impl From<Vec<Record>> for SequenceSource {
    fn from(records: Vec<Record>) -> Self {
        SequenceSource::Records(records)
    }
}

fn missing_column() -> ContentError {
    ContentError::MissingColumn {
        column: SEQUENCE_COLUMN.to_string(),
    }
}

fn open_path(path: &Path, batch_size: usize) -> Result<InputReader> {
    if !path.is_file() {
        return Err(ContentError::SourceNotFound(path.to_path_buf()));
    }
    let kind = FileKind::detect(path)?;
    info!(path = %path.display(), %kind, "reading sequences");
    InputReader::open(kind, path, batch_size)
}

fn memory_reader(values: Vec<Option<String>>, batch_size: usize) -> InputReader {
    info!(rows = values.len(), "reading sequences from table");
    InputReader::Memory(MemoryReader::new(values, batch_size))
}

fn sequences_from_frame(frame: Frame) -> Result<Vec<Option<String>>> {
    match frame.into_column(SEQUENCE_COLUMN) {
        Some(Column::Text(values)) => Ok(values),
        Some(other) => Err(ContentError::UnsupportedInputType(format!(
            "`{SEQUENCE_COLUMN}` column holds {} values",
            other.type_name()
        ))),
        None => Err(missing_column()),
    }
}

/// The first row defines the schema; later rows without the key count as null.
fn sequences_from_records(records: Vec<Record>) -> Result<Vec<Option<String>>> {
    match records.first() {
        Some(first) if first.contains_key(SEQUENCE_COLUMN) => {}
        _ => return Err(missing_column()),
    }

    records
        .into_iter()
        .map(|mut record| match record.remove(SEQUENCE_COLUMN) {
            Some(Value::Text(text)) => Ok(Some(text)),
            Some(Value::Null) | None => Ok(None),
            Some(other) => Err(ContentError::UnsupportedInputType(format!(
                "`{SEQUENCE_COLUMN}` cell holds a {} value",
                other.type_name()
            ))),
        })
        .collect()
}
