mod fasta;
mod fastq;
mod memory;
mod table;

pub use fasta::FastaReader;
pub use fastq::FastqReader;
pub use memory::MemoryReader;
pub use table::TableReader;

use crate::error::{ContentError, Result};
use crate::sequence_processor::core::{Sequence, SequenceReader};
use std::fmt;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

const COMPRESSION_SUFFIXES: [&str; 5] = ["gz", "bgz", "bz2", "xz", "zst"];

/// niffler needs this many bytes to sniff a compression header.
const MAGIC_LEN: u64 = 5;

/// Open `path`, decompressing it if it starts with a known compression magic.
///
/// Files shorter than any magic are read as plain text, so an empty file is a
/// stream of zero records rather than an error.
pub(crate) fn open_decompressed(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if fs::metadata(path)?.len() < MAGIC_LEN {
        return Ok(Box::new(file));
    }
    let (inner_reader, _compression) = niffler::get_reader(Box::new(file))?;
    Ok(inner_reader)
}

/// File formats a path input can be decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Fastq,
    Fasta,
    /// Header row plus a `sequence` column, split on the given byte.
    Delimited(u8),
}

fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

impl FileKind {
    /// Detect the format from the file name, looking through one compression
    /// suffix (`reads.fq.gz` is FASTQ).
    pub fn detect(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let mut stem = name.as_str();
        let mut extension = extension_of(stem);
        if let Some(ext) = extension {
            if COMPRESSION_SUFFIXES.contains(&ext) {
                stem = &stem[..stem.len() - ext.len() - 1];
                extension = extension_of(stem);
            }
        }

        match extension {
            Some("fastq" | "fq") => Ok(FileKind::Fastq),
            Some("fasta" | "fa" | "fna" | "fas") => Ok(FileKind::Fasta),
            Some("csv") => Ok(FileKind::Delimited(b',')),
            Some("tsv" | "tab" | "txt") => Ok(FileKind::Delimited(b'\t')),
            Some(other) => Err(ContentError::UnsupportedFileKind(format!(".{other}"))),
            None => Err(ContentError::UnsupportedFileKind(name.clone())),
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Fastq => f.write_str("FASTQ"),
            FileKind::Fasta => f.write_str("FASTA"),
            FileKind::Delimited(b',') => f.write_str("CSV"),
            FileKind::Delimited(_) => f.write_str("TSV"),
        }
    }
}

/// Every batch source behind one type, so callers can pick one at runtime.
pub enum InputReader {
    Fastq(FastqReader),
    Fasta(FastaReader),
    Table(TableReader),
    Memory(MemoryReader),
}

impl InputReader {
    pub fn open(kind: FileKind, path: &Path, batch_size: usize) -> Result<Self> {
        Ok(match kind {
            FileKind::Fastq => InputReader::Fastq(FastqReader::new(path, batch_size)?),
            FileKind::Fasta => InputReader::Fasta(FastaReader::new(path, batch_size)?),
            FileKind::Delimited(delimiter) => {
                InputReader::Table(TableReader::new(path, delimiter, batch_size)?)
            }
        })
    }
}

impl fmt::Debug for InputReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            InputReader::Fastq(_) => "fastq",
            InputReader::Fasta(_) => "fasta",
            InputReader::Table(_) => "table",
            InputReader::Memory(_) => "memory",
        };
        f.debug_tuple("InputReader").field(&kind).finish()
    }
}

impl SequenceReader for InputReader {
    fn next_batch(&mut self) -> Result<Option<Vec<Sequence>>> {
        match self {
            InputReader::Fastq(reader) => reader.next_batch(),
            InputReader::Fasta(reader) => reader.next_batch(),
            InputReader::Table(reader) => reader.next_batch(),
            InputReader::Memory(reader) => reader.next_batch(),
        }
    }

    fn skipped(&self) -> u64 {
        match self {
            InputReader::Fastq(reader) => reader.skipped(),
            InputReader::Fasta(reader) => reader.skipped(),
            InputReader::Table(reader) => reader.skipped(),
            InputReader::Memory(reader) => reader.skipped(),
        }
    }
}
