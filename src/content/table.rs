use super::aggregate::PartialAggregate;
use super::symbol::Symbol;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Which columns a materialized table carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub symbols: BTreeSet<Symbol>,
    pub total: bool,
    pub proportions: bool,
}

impl Projection {
    pub fn counts<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
            total: false,
            proportions: false,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::counts(Symbol::ALL)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRow {
    pub position: u64,
    /// Aligned with [`ContentTable::symbols`].
    pub counts: Vec<u64>,
    /// Reads covering this position, over all six categories.
    pub total: u64,
}

impl ContentRow {
    pub fn fraction_at(&self, column: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.counts[column] as f64 / self.total as f64
        }
    }
}

/// Position-ordered composition table.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTable {
    symbols: Vec<Symbol>,
    total: bool,
    proportions: bool,
    rows: Vec<ContentRow>,
}

pub fn materialize(aggregate: &PartialAggregate, requested: &BTreeSet<Symbol>) -> ContentTable {
    materialize_with(aggregate, &Projection::counts(requested.iter().copied()))
}

pub fn materialize_with(aggregate: &PartialAggregate, projection: &Projection) -> ContentTable {
    let symbols: Vec<Symbol> = projection.symbols.iter().copied().collect();
    let rows = aggregate
        .records()
        .iter()
        .enumerate()
        .map(|(position, record)| ContentRow {
            position: position as u64,
            counts: symbols.iter().map(|&symbol| record.count(symbol)).collect(),
            total: record.total(),
        })
        .collect();

    ContentTable {
        symbols,
        total: projection.total,
        proportions: projection.proportions,
        rows,
    }
}

impl ContentTable {
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn rows(&self) -> &[ContentRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// `None` when the position is out of range or the symbol was not requested.
    pub fn count(&self, position: usize, symbol: Symbol) -> Option<u64> {
        let column = self.column_of(symbol)?;
        self.rows.get(position).map(|row| row.counts[column])
    }

    pub fn fraction(&self, position: usize, symbol: Symbol) -> Option<f64> {
        let column = self.column_of(symbol)?;
        self.rows.get(position).map(|row| row.fraction_at(column))
    }

    pub fn total(&self, position: usize) -> Option<u64> {
        self.rows.get(position).map(|row| row.total)
    }

    pub fn column_names(&self) -> Vec<&'static str> {
        let mut names = vec!["position"];
        names.extend(self.symbols.iter().map(|s| s.count_column()));
        if self.total {
            names.push("total");
        }
        if self.proportions {
            names.extend(self.symbols.iter().map(|s| s.fraction_column()));
        }
        names
    }

    pub fn write_tsv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", self.column_names().join("\t"))?;
        for row in &self.rows {
            write!(writer, "{}", row.position)?;
            for count in &row.counts {
                write!(writer, "\t{}", count)?;
            }
            if self.total {
                write!(writer, "\t{}", row.total)?;
            }
            if self.proportions {
                for column in 0..row.counts.len() {
                    write!(writer, "\t{:.6}", row.fraction_at(column))?;
                }
            }
            writeln!(writer)?;
        }
        writer.flush()
    }
}

struct RowView<'a> {
    table: &'a ContentTable,
    row: &'a ContentRow,
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("position", &self.row.position)?;
        for (symbol, count) in self.table.symbols.iter().zip(&self.row.counts) {
            map.serialize_entry(symbol.count_column(), count)?;
        }
        if self.table.total {
            map.serialize_entry("total", &self.row.total)?;
        }
        if self.table.proportions {
            for (column, symbol) in self.table.symbols.iter().enumerate() {
                map.serialize_entry(symbol.fraction_column(), &self.row.fraction_at(column))?;
            }
        }
        map.end()
    }
}

/// Serializes as a list of row objects keyed by column name.
impl Serialize for ContentTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows.iter().map(|row| RowView { table: self, row }))
    }
}
