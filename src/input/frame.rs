use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;

/// A single cell of a row-oriented table.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Text(_) => "utf8",
            Value::Int(_) => "int64",
            Value::Float(_) => "float64",
            Value::Bool(_) => "bool",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// One row of a row-oriented table, keyed by column name.
pub type Record = BTreeMap<String, Value>;

/// A typed, nullable column of an eager column-oriented table.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Text(Vec<Option<String>>),
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
}

impl Column {
    /// A text column without nulls.
    pub fn text<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Column::Text(values.into_iter().map(|v| Some(v.into())).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Text(values) => values.len(),
            Column::Int(values) => values.len(),
            Column::Float(values) => values.len(),
            Column::Bool(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Column::Text(_) => "utf8",
            Column::Int(_) => "int64",
            Column::Float(_) => "float64",
            Column::Bool(_) => "bool",
        }
    }
}

/// Eager column-oriented table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a column, replacing any existing column of the same name.
    pub fn with_column(mut self, name: impl Into<String>, column: Column) -> Self {
        let name = name.into();
        self.columns.retain(|(existing, _)| *existing != name);
        self.columns.push((name, column));
        self
    }

    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |(_, column)| column.len())
    }

    pub(crate) fn into_column(self, name: &str) -> Option<Column> {
        self.columns
            .into_iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, column)| column)
    }
}

type Plan = Box<dyn FnOnce() -> Result<Frame> + Send>;

/// A deferred table. Nothing runs until [`LazyFrame::collect`].
pub struct LazyFrame {
    plan: Plan,
}

impl LazyFrame {
    pub fn new<F>(plan: F) -> Self
    where
        F: FnOnce() -> Result<Frame> + Send + 'static,
    {
        Self {
            plan: Box::new(plan),
        }
    }

    /// Run the plan to completion.
    pub fn collect(self) -> Result<Frame> {
        (self.plan)()
    }
}

impl fmt::Debug for LazyFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyFrame").finish_non_exhaustive()
    }
}
