pub mod core;
pub mod readers;
pub mod threading;

// Re-export commonly used items
pub use core::{ProcessingStats, Sequence, SequenceProcessor, SequenceReader};
pub use readers::{FileKind, InputReader};
