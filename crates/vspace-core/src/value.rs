//! Attribute values and hypothesis terms.
//!
//! Cells are parsed into a small tagged union so that equality is defined
//! the same way for every column, whatever its kind. A column's kind is
//! inferred once for the whole column (see [`ValueKind::infer`]) so that
//! `1` and `1.0` in the same column compare equal.

use serde::{Serialize, Serializer};
use std::fmt;

/// The symbol printed for an unconstrained hypothesis position.
pub const WILDCARD: &str = "?";

/// A single attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Empty cell.
    Missing,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Parse a raw cell as the given column kind.
    ///
    /// Falls back to `Text` if the cell does not fit the kind, which only
    /// happens when the kind was not inferred from this cell's column.
    pub fn parse(raw: &str, kind: ValueKind) -> Self {
        if raw.is_empty() {
            return Value::Missing;
        }
        let parsed = match kind {
            ValueKind::Int => raw.parse().ok().map(Value::Int),
            ValueKind::Float => parse_float(raw).map(Value::Float),
            ValueKind::Bool => parse_bool(raw).map(Value::Bool),
            ValueKind::Text => None,
        };
        parsed.unwrap_or_else(|| Value::Text(raw.to_string()))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Missing => serializer.serialize_none(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// The kind shared by every non-missing cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Text,
}

impl ValueKind {
    /// Infer a column's kind from its raw cells.
    ///
    /// Empty cells are ignored. Integers win over floats, floats over
    /// booleans; anything else is text. A column with no non-empty cells
    /// is text.
    pub fn infer<'a>(cells: impl IntoIterator<Item = &'a str>) -> Self {
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;
        let mut seen = false;

        for cell in cells.into_iter().filter(|c| !c.is_empty()) {
            seen = true;
            all_int &= cell.parse::<i64>().is_ok();
            all_float &= parse_float(cell).is_some();
            all_bool &= parse_bool(cell).is_some();
            if !(all_int || all_float || all_bool) {
                return ValueKind::Text;
            }
        }

        match (seen, all_int, all_float, all_bool) {
            (false, ..) => ValueKind::Text,
            (true, true, ..) => ValueKind::Int,
            (true, false, true, _) => ValueKind::Float,
            (true, false, false, true) => ValueKind::Bool,
            _ => ValueKind::Text,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// One position of a hypothesis: either any value, or exactly one.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Wildcard,
    Value(Value),
}

impl Term {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Term::Wildcard)
    }

    /// Whether this term holds exactly `value`.
    ///
    /// A wildcard never equals a concrete value, so an attribute that
    /// reads `?` in the data is still a value like any other.
    pub fn holds(&self, value: &Value) -> bool {
        match self {
            Term::Wildcard => false,
            Term::Value(v) => v == value,
        }
    }
}

impl From<Value> for Term {
    fn from(v: Value) -> Self {
        Term::Value(v)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Wildcard => f.write_str(WILDCARD),
            Term::Value(v) => write!(f, "{}", v),
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Wildcard => serializer.serialize_str(WILDCARD),
            Term::Value(v) => v.serialize(serializer),
        }
    }
}

fn parse_float(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|x| x.is_finite())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}
