//! # vspace Core
//!
//! Version-space boundaries over labeled attribute tables.
//!
//! Given rows of discrete attribute values, each tagged positive or
//! negative through a target column, this crate derives:
//!
//! - **specific hypothesis**: the values shared by every positive example,
//!   with `?` wherever positives disagree
//! - **general hypotheses**: one row per attribute, each constraining only
//!   its own position, specialized by negative examples
//!
//! The pipeline is `load_table` → `compute_from_table` → render. Only the
//! first two live here; rendering belongs to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use vspace_core::prelude::*;
//!
//! let csv = "Outlook,Temp,Play\nSunny,Hot,Yes\nSunny,Cold,No\n";
//! let table = load_table(csv.as_bytes(), &LoaderOptions::default()).unwrap();
//! let boundary = compute_from_table(&table, "Play", &LabelPolicy::default()).unwrap();
//!
//! assert_eq!(boundary.specific()[1].to_string(), "Hot");
//! assert_eq!(boundary.general()[1][1].to_string(), "Hot");
//! assert!(boundary.general()[0].iter().all(Term::is_wildcard));
//! ```

pub mod boundary;
pub mod error;
pub mod label;
pub mod table;
pub mod value;
pub mod prelude;
