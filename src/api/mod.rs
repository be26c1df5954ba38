pub mod content;

pub use content::{base_sequence_content, ContentAnalyzer, ContentReport};
