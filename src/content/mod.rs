//! Per-position base composition: classification, counting, merging and
//! materialization of the final table.

mod aggregate;
mod processor;
mod symbol;
mod table;

pub use aggregate::{count_batch, merge, merge_all, PartialAggregate, PositionRecord};
pub use processor::BaseContentProcessor;
pub use symbol::Symbol;
pub use table::{materialize, materialize_with, ContentRow, ContentTable, Projection};
