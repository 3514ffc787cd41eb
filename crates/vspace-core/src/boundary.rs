//! The boundary computer.
//!
//! One forward pass over labelled examples produces two structures:
//!
//! - a **specific hypothesis**: seeded from the first example whatever its
//!   label, then generalized position by position on every positive
//!   example that disagrees with it;
//! - a **general hypothesis matrix** of `n × n` terms, where row `j` only
//!   ever constrains position `j`. On a negative example, row `j` takes the
//!   specific value at `j` if that value already tells the example apart,
//!   and is reset to the wildcard otherwise.
//!
//! Later negatives overwrite earlier ones on the same diagonal cell, so
//! the order of the examples matters. General rows are never checked
//! against positive examples and never pruned.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Result, VspaceError};
use crate::label::{Label, LabelPolicy};
use crate::table::{Example, Examples, Table};
use crate::value::Term;

/// The two boundary structures produced by one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hypotheses {
    pub specific: Vec<Term>,
    pub general: Vec<Vec<Term>>,
    pub summary: BoundarySummary,
}

/// Example counts seen by a pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoundarySummary {
    pub positives: usize,
    pub negatives: usize,
}

impl BoundarySummary {
    pub fn total(&self) -> usize {
        self.positives + self.negatives
    }
}

/// Hypotheses with the attribute names of their positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boundary {
    pub attributes: Vec<String>,
    #[serde(flatten)]
    pub hypotheses: Hypotheses,
}

impl Boundary {
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn specific(&self) -> &[Term] {
        &self.hypotheses.specific
    }

    pub fn general(&self) -> &[Vec<Term>] {
        &self.hypotheses.general
    }

    pub fn general_row(&self, j: usize) -> Option<&[Term]> {
        self.hypotheses.general.get(j).map(Vec::as_slice)
    }

    pub fn summary(&self) -> BoundarySummary {
        self.hypotheses.summary
    }
}

/// Run the boundary update over `rows`, each of which must have `n`
/// attribute values.
///
/// Fails with [`VspaceError::EmptyInput`] if there are no rows, and with
/// [`VspaceError::SchemaMismatch`] at the first row whose width is not
/// `n`. Either way nothing is returned from the rows already processed.
pub fn compute(rows: &[Example], n: usize) -> Result<Hypotheses> {
    let seed = rows.first().ok_or(VspaceError::EmptyInput)?;
    if seed.values.len() != n {
        return Err(VspaceError::schema_mismatch(0, n, seed.values.len()));
    }
    if !seed.label.is_positive() {
        warn!("first example is negative; it still seeds the specific hypothesis");
    }

    let mut specific: Vec<Term> = seed.values.iter().cloned().map(Term::Value).collect();
    let mut general = vec![vec![Term::Wildcard; n]; n];
    let mut summary = BoundarySummary::default();

    for (i, row) in rows.iter().enumerate() {
        if row.values.len() != n {
            return Err(VspaceError::schema_mismatch(i, n, row.values.len()));
        }

        match row.label {
            Label::Positive => {
                summary.positives += 1;
                let mut generalized = 0;
                for (term, value) in specific.iter_mut().zip(&row.values) {
                    if !term.is_wildcard() && !term.holds(value) {
                        *term = Term::Wildcard;
                        generalized += 1;
                    }
                }
                debug!(row = i, generalized, "positive example");
            }
            Label::Negative => {
                summary.negatives += 1;
                let mut specialized = 0;
                for (j, value) in row.values.iter().enumerate() {
                    general[j][j] = if specific[j].holds(value) {
                        Term::Wildcard
                    } else {
                        specific[j].clone()
                    };
                    if !general[j][j].is_wildcard() {
                        specialized += 1;
                    }
                }
                debug!(row = i, specialized, "negative example");
            }
        }
    }

    info!(
        attributes = n,
        positives = summary.positives,
        negatives = summary.negatives,
        "boundary computed"
    );

    Ok(Hypotheses {
        specific,
        general,
        summary,
    })
}

/// Run [`compute`] over already-split examples, keeping attribute names.
pub fn compute_examples(examples: &Examples) -> Result<Boundary> {
    let hypotheses = compute(&examples.rows, examples.attributes.len())?;
    Ok(Boundary {
        attributes: examples.attributes.clone(),
        hypotheses,
    })
}

/// Resolve labels from `target` and compute the boundary of `table`.
pub fn compute_from_table(table: &Table, target: &str, policy: &LabelPolicy) -> Result<Boundary> {
    let examples = table.examples(target, policy)?;
    compute_examples(&examples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn vals(cells: &[&str]) -> Vec<Value> {
        cells.iter().map(|c| Value::text(*c)).collect()
    }

    fn terms(cells: &[&str]) -> Vec<Term> {
        cells
            .iter()
            .map(|c| match *c {
                "?" => Term::Wildcard,
                other => Term::Value(Value::text(other)),
            })
            .collect()
    }

    #[test]
    fn sunny_hot_then_sunny_cold() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Hot"])),
            Example::negative(vals(&["Sunny", "Cold"])),
        ];
        let h = compute(&rows, 2).unwrap();
        assert_eq!(h.specific, terms(&["Sunny", "Hot"]));
        assert_eq!(h.general, vec![terms(&["?", "?"]), terms(&["?", "Hot"])]);
        assert_eq!(h.summary.total(), 2);
    }

    #[test]
    fn positive_disagreement_generalizes() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Warm", "Normal"])),
            Example::positive(vals(&["Sunny", "Warm", "High"])),
        ];
        let h = compute(&rows, 3).unwrap();
        assert_eq!(h.specific, terms(&["Sunny", "Warm", "?"]));
        assert!(h.general.iter().flatten().all(Term::is_wildcard));
    }

    #[test]
    fn later_negative_overwrites_diagonal() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Hot"])),
            Example::negative(vals(&["Rain", "Hot"])),
            Example::negative(vals(&["Sunny", "Hot"])),
        ];
        let h = compute(&rows, 2).unwrap();
        // second negative agrees with the specific hypothesis at 0
        assert_eq!(h.general[0][0], Term::Wildcard);
        assert_eq!(h.general[1][1], Term::Wildcard);
    }

    #[test]
    fn wildcard_position_stays_unconstrained() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Hot"])),
            Example::positive(vals(&["Rain", "Hot"])),
            Example::negative(vals(&["Cloudy", "Cold"])),
        ];
        let h = compute(&rows, 2).unwrap();
        assert_eq!(h.specific, terms(&["?", "Hot"]));
        // a wildcard never holds a concrete value, so it is copied down
        assert_eq!(h.general, vec![terms(&["?", "?"]), terms(&["?", "Hot"])]);
    }

    #[test]
    fn negative_first_row_still_seeds() {
        let rows = vec![
            Example::negative(vals(&["Rain", "Cold"])),
            Example::positive(vals(&["Rain", "Hot"])),
        ];
        let h = compute(&rows, 2).unwrap();
        assert_eq!(h.specific, terms(&["Rain", "?"]));
        // the seed row matches itself everywhere
        assert_eq!(h.general, vec![terms(&["?", "?"]), terms(&["?", "?"])]);
    }

    #[test]
    fn empty_input() {
        assert!(matches!(compute(&[], 2), Err(VspaceError::EmptyInput)));
    }

    #[test]
    fn mismatched_row_aborts() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Hot"])),
            Example::negative(vals(&["Sunny", "Cold"])),
            Example::negative(vals(&["Sunny"])),
        ];
        assert!(matches!(
            compute(&rows, 2),
            Err(VspaceError::SchemaMismatch {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn seed_width_checked() {
        let rows = vec![Example::positive(vals(&["Sunny"]))];
        assert!(matches!(
            compute(&rows, 2),
            Err(VspaceError::SchemaMismatch { row: 0, .. })
        ));
    }

    #[test]
    fn zero_attributes() {
        let rows = vec![Example::positive(vec![]), Example::negative(vec![])];
        let h = compute(&rows, 0).unwrap();
        assert!(h.specific.is_empty());
        assert!(h.general.is_empty());
    }

    #[test]
    fn boundary_from_table() {
        let table = Table::from_rows(
            vec!["Outlook".into(), "Temp".into(), "Play".into()],
            vec![
                vec!["Sunny".into(), "Hot".into(), "Yes".into()],
                vec!["Sunny".into(), "Cold".into(), "No".into()],
            ],
        )
        .unwrap();
        let boundary = compute_from_table(&table, "Play", &LabelPolicy::default()).unwrap();
        assert_eq!(boundary.attributes(), &["Outlook", "Temp"]);
        assert_eq!(boundary.specific(), terms(&["Sunny", "Hot"]).as_slice());
        assert_eq!(boundary.general_row(1), Some(terms(&["?", "Hot"]).as_slice()));
        assert_eq!(boundary.general_row(2), None);
        assert_eq!(
            boundary.summary(),
            BoundarySummary {
                positives: 1,
                negatives: 1
            }
        );
    }

    #[test]
    fn boundary_serializes_flat() {
        let rows = vec![
            Example::positive(vals(&["Sunny", "Hot"])),
            Example::negative(vals(&["Sunny", "Cold"])),
        ];
        let boundary = Boundary {
            attributes: vec!["Outlook".into(), "Temp".into()],
            hypotheses: compute(&rows, 2).unwrap(),
        };
        let json = serde_json::to_value(&boundary).unwrap();
        assert_eq!(json["specific"], serde_json::json!(["Sunny", "Hot"]));
        assert_eq!(json["general"][1], serde_json::json!(["?", "Hot"]));
        assert_eq!(json["summary"]["negatives"], 1);
    }
}
