use super::Config;
use crate::content::{Projection, Symbol};
use std::collections::BTreeSet;

/// Settings for one base-content run.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentOptions {
    pub threads: usize,
    pub batch_size: usize,
    pub symbols: BTreeSet<Symbol>,
    pub total: bool,
    pub proportions: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            batch_size: 10_000,
            symbols: Symbol::ALL.into_iter().collect(),
            total: false,
            proportions: false,
        }
    }
}

impl ContentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_threads(config.threads)
            .with_batch_size(config.batch_size)
            .with_other(config.include_other)
            .with_total(config.total)
            .with_proportions(config.proportions)
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_symbols<I: IntoIterator<Item = Symbol>>(mut self, symbols: I) -> Self {
        self.symbols = symbols.into_iter().collect();
        self
    }

    pub fn with_other(mut self, include: bool) -> Self {
        if include {
            self.symbols.insert(Symbol::Other);
        } else {
            self.symbols.remove(&Symbol::Other);
        }
        self
    }

    pub fn with_total(mut self, total: bool) -> Self {
        self.total = total;
        self
    }

    pub fn with_proportions(mut self, proportions: bool) -> Self {
        self.proportions = proportions;
        self
    }

    pub fn projection(&self) -> Projection {
        Projection {
            symbols: self.symbols.clone(),
            total: self.total,
            proportions: self.proportions,
        }
    }
}
