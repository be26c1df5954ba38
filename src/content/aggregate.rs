use super::symbol::Symbol;
use serde::Serialize;
use std::ops::AddAssign;

/// Symbol counters for a single read position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PositionRecord {
    counts: [u64; Symbol::COUNT],
}

impl PositionRecord {
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts[symbol.index()]
    }

    /// Number of reads that reach this position.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn increment(&mut self, symbol: Symbol) {
        self.counts[symbol.index()] += 1;
    }
}

impl AddAssign for PositionRecord {
    fn add_assign(&mut self, other: Self) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts) {
            *mine += theirs;
        }
    }
}

/// Dense per-position counts for every read absorbed so far.
///
/// `records()[p]` holds the symbols seen at index `p` of each read longer
/// than `p`; shorter reads do not contribute there. The record list is as long
/// as the longest read absorbed, so memory tracks read length rather than
/// read count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialAggregate {
    records: Vec<PositionRecord>,
}

impl PartialAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Longest read length observed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    pub fn record(&self, position: usize) -> Option<&PositionRecord> {
        self.records.get(position)
    }

    /// Count one read. Empty reads leave the aggregate untouched.
    pub fn absorb(&mut self, read: &[u8]) {
        if read.len() > self.records.len() {
            self.records.resize(read.len(), PositionRecord::default());
        }
        for (record, &byte) in self.records.iter_mut().zip(read) {
            record.increment(Symbol::classify(byte));
        }
    }

    pub fn absorb_batch<I, R>(&mut self, reads: I)
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        for read in reads {
            self.absorb(read.as_ref());
        }
    }

    /// Combine two aggregates into one covering both sets of reads.
    ///
    /// Positions present in both are summed; positions only the longer one
    /// reaches are carried over unchanged.
    pub fn merge(mut self, mut other: Self) -> Self {
        if other.records.len() > self.records.len() {
            std::mem::swap(&mut self, &mut other);
        }
        for (mine, theirs) in self.records.iter_mut().zip(other.records) {
            *mine += theirs;
        }
        self
    }
}

/// Fold a batch of reads into a fresh aggregate.
pub fn count_batch<I, R>(reads: I) -> PartialAggregate
where
    I: IntoIterator<Item = R>,
    R: AsRef<[u8]>,
{
    let mut aggregate = PartialAggregate::new();
    aggregate.absorb_batch(reads);
    aggregate
}

pub fn merge(a: PartialAggregate, b: PartialAggregate) -> PartialAggregate {
    a.merge(b)
}

/// Balanced pairwise reduction. An empty input yields an empty aggregate.
pub fn merge_all<I>(aggregates: I) -> PartialAggregate
where
    I: IntoIterator<Item = PartialAggregate>,
{
    let mut level: Vec<PartialAggregate> = aggregates.into_iter().collect();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut pending = level.into_iter();
        while let Some(left) = pending.next() {
            match pending.next() {
                Some(right) => next.push(left.merge(right)),
                None => next.push(left),
            }
        }
        level = next;
    }
    level.pop().unwrap_or_default()
}
