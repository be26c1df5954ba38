pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod input;
pub mod sequence_processor;
mod utils;

// Re-export main API
pub use api::{base_sequence_content, ContentAnalyzer, ContentReport};
pub use config::{Config, ContentOptions};
pub use content::{
    count_batch, materialize, materialize_with, merge, merge_all, ContentTable, PartialAggregate,
    Projection, Symbol,
};
pub use error::{ContentError, Result};
pub use input::{Frame, LazyFrame, Record, SequenceSource, Value};
