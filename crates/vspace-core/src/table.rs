//! Table loading.
//!
//! A [`Table`] is an ordered grid of raw cells under named columns. Cells
//! stay as text until [`Table::examples`] splits out the target column:
//! the target is resolved as text, the attributes are parsed with their
//! column's inferred [`ValueKind`].
//!
//! Rows are read flexibly, so a short or long row survives loading and is
//! rejected by [`Table::examples`] with [`VspaceError::SchemaMismatch`]
//! rather than by the parser.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Result, VspaceError};
use crate::label::{Label, LabelPolicy};
use crate::value::{Value, ValueKind};

/// Options for parsing a delimited table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Trim surrounding whitespace from headers and cells. Off by
    /// default: ` Yes` is not the positive literal `Yes`.
    pub trim: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
        }
    }
}

/// A parsed table: named columns, inferred column kinds, raw rows.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    kinds: Vec<ValueKind>,
    rows: Vec<Vec<String>>,
}

/// One labelled row with the target column removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    pub values: Vec<Value>,
    pub label: Label,
}

impl Example {
    pub fn new(values: Vec<Value>, label: Label) -> Self {
        Self { values, label }
    }

    pub fn positive(values: Vec<Value>) -> Self {
        Self::new(values, Label::Positive)
    }

    pub fn negative(values: Vec<Value>) -> Self {
        Self::new(values, Label::Negative)
    }
}

/// Labelled examples plus the names of their attribute positions.
#[derive(Debug, Clone, PartialEq)]
pub struct Examples {
    pub attributes: Vec<String>,
    pub rows: Vec<Example>,
}

impl Examples {
    pub fn positives(&self) -> usize {
        self.rows.iter().filter(|r| r.label.is_positive()).count()
    }

    pub fn negatives(&self) -> usize {
        self.rows.len() - self.positives()
    }
}

/// Parse a delimited table with a header row.
pub fn load_table<R: Read>(reader: R, options: &LoaderOptions) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Table::from_rows(columns, rows)
}

/// Open and parse a delimited table file.
pub fn load_table_from_path(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Table> {
    let file = std::fs::File::open(path.as_ref())?;
    let table = load_table(file, options)?;
    debug!(
        path = %path.as_ref().display(),
        columns = table.columns.len(),
        rows = table.rows.len(),
        "loaded table"
    );
    Ok(table)
}

impl Table {
    /// Build a table from raw cells, inferring each column's kind.
    ///
    /// Rows may differ in width; cells past the header width do not take
    /// part in inference.
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(VspaceError::MissingHeader);
        }

        let mut seen = HashSet::new();
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(VspaceError::DuplicateColumn(name.clone()));
            }
        }

        let kinds = (0..columns.len())
            .map(|i| ValueKind::infer(rows.iter().filter_map(|r| r.get(i).map(String::as_str))))
            .collect();

        Ok(Self {
            columns,
            kinds,
            rows,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// Raw rows in input order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Parsed value of one cell, or `None` if the row is too short or the
    /// cell lies past the header width.
    pub fn value(&self, row: usize, column: usize) -> Option<Value> {
        let raw = self.rows.get(row)?.get(column)?;
        let kind = self.kinds.get(column)?;
        Some(Value::parse(raw, *kind))
    }

    /// Split out `target`, resolve labels, and parse attribute values.
    ///
    /// The target column is checked first, then emptiness, then each
    /// row's width in order. The first failure aborts the whole split.
    pub fn examples(&self, target: &str, policy: &LabelPolicy) -> Result<Examples> {
        let target_idx = self
            .column_index(target)
            .ok_or_else(|| VspaceError::unknown_attribute(target, &self.columns))?;

        if self.rows.is_empty() {
            return Err(VspaceError::EmptyInput);
        }

        let width = self.columns.len();
        let attributes = self
            .columns
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != target_idx)
            .map(|(_, name)| name.clone())
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for (i, raw) in self.rows.iter().enumerate() {
            if raw.len() != width {
                return Err(VspaceError::schema_mismatch(i, width, raw.len()));
            }
            let label = policy.resolve(&raw[target_idx]);
            let values = raw
                .iter()
                .zip(&self.kinds)
                .enumerate()
                .filter(|(j, _)| *j != target_idx)
                .map(|(_, (cell, kind))| Value::parse(cell, *kind))
                .collect();
            rows.push(Example::new(values, label));
        }

        Ok(Examples { attributes, rows })
    }
}
