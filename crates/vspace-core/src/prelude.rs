//! vspace Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use vspace_core::prelude::*;
//! ```

pub use crate::value::{Term, Value, ValueKind, WILDCARD};

pub use crate::label::{Label, LabelPolicy, DEFAULT_POSITIVE};

pub use crate::table::{
    load_table, load_table_from_path,
    Example, Examples, LoaderOptions, Table,
};

pub use crate::boundary::{
    compute, compute_examples, compute_from_table,
    Boundary, BoundarySummary, Hypotheses,
};

// Re-export error types
pub use crate::error::{Result, VspaceError};
