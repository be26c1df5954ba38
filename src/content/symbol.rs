use serde::{Deserialize, Serialize};
use std::fmt;

/// Nucleotide categories tracked per position.
///
/// Declaration order is the column order of every materialized table.
#[derive(
    clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    #[value(name = "a")]
    A,
    #[value(name = "c")]
    C,
    #[value(name = "g")]
    G,
    #[value(name = "t")]
    T,
    #[value(name = "n")]
    N,
    #[value(name = "other")]
    Other,
}

impl Symbol {
    pub const COUNT: usize = 6;

    pub const ALL: [Symbol; Symbol::COUNT] = [
        Symbol::A,
        Symbol::C,
        Symbol::G,
        Symbol::T,
        Symbol::N,
        Symbol::Other,
    ];

    /// Classify a raw byte. Total and case-insensitive: anything that is not
    /// one of `ACGTN` (either case) is [`Symbol::Other`].
    pub const fn classify(byte: u8) -> Symbol {
        match byte {
            b'A' | b'a' => Symbol::A,
            b'C' | b'c' => Symbol::C,
            b'G' | b'g' => Symbol::G,
            b'T' | b't' => Symbol::T,
            b'N' | b'n' => Symbol::N,
            _ => Symbol::Other,
        }
    }

    pub fn classify_char(c: char) -> Symbol {
        if c.is_ascii() {
            Symbol::classify(c as u8)
        } else {
            Symbol::Other
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Symbol::A => "a",
            Symbol::C => "c",
            Symbol::G => "g",
            Symbol::T => "t",
            Symbol::N => "n",
            Symbol::Other => "other",
        }
    }

    pub fn count_column(self) -> &'static str {
        match self {
            Symbol::A => "a_count",
            Symbol::C => "c_count",
            Symbol::G => "g_count",
            Symbol::T => "t_count",
            Symbol::N => "n_count",
            Symbol::Other => "other_count",
        }
    }

    pub fn fraction_column(self) -> &'static str {
        match self {
            Symbol::A => "a_fraction",
            Symbol::C => "c_fraction",
            Symbol::G => "g_fraction",
            Symbol::T => "t_fraction",
            Symbol::N => "n_fraction",
            Symbol::Other => "other_fraction",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
