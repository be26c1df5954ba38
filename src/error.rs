use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, ContentError>;

/// Failures raised while turning an input into a stream of reads.
///
/// Counting and merging never fail; everything here is detected at the input
/// boundary, before or while reads are being decoded.
#[derive(thiserror::Error, Debug)]
pub enum ContentError {
    /// The input has no column holding the reads
    #[error("input has no `{column}` column")]
    MissingColumn { column: String },

    /// The input cannot be reduced to text reads
    #[error("unsupported input type: {0}")]
    UnsupportedInputType(String),

    /// A path input that does not point at an existing file
    #[error("input not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// A path input whose extension no reader handles
    #[error("unsupported file kind: {0}")]
    UnsupportedFileKind(String),

    /// A record in a sequence file could not be decoded
    #[error("malformed {format} record: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Compression(#[from] niffler::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
