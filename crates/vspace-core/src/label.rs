//! Label resolution: mapping a target cell to positive or negative.

use serde::Serialize;

/// The positive literal used when none is configured.
pub const DEFAULT_POSITIVE: &str = "Yes";

/// Binary example label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn is_positive(&self) -> bool {
        matches!(self, Label::Positive)
    }
}

/// Exact, case-sensitive match against one positive literal.
///
/// Every other cell, including an empty one, resolves to
/// [`Label::Negative`]. There is no "unknown" outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    positive: String,
}

impl LabelPolicy {
    pub fn new(positive: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
        }
    }

    pub fn positive(&self) -> &str {
        &self.positive
    }

    /// Resolve the raw text of a target cell.
    pub fn resolve(&self, raw: &str) -> Label {
        if raw == self.positive {
            Label::Positive
        } else {
            Label::Negative
        }
    }
}

impl Default for LabelPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_POSITIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_positive() {
        let policy = LabelPolicy::default();
        assert_eq!(policy.resolve("Yes"), Label::Positive);
    }

    #[test]
    fn case_and_whitespace_matter() {
        let policy = LabelPolicy::default();
        assert_eq!(policy.resolve("yes"), Label::Negative);
        assert_eq!(policy.resolve("YES"), Label::Negative);
        assert_eq!(policy.resolve("Yes "), Label::Negative);
    }

    #[test]
    fn empty_and_other_values_are_negative() {
        let policy = LabelPolicy::default();
        assert_eq!(policy.resolve(""), Label::Negative);
        assert_eq!(policy.resolve("Maybe"), Label::Negative);
    }

    #[test]
    fn custom_literal() {
        let policy = LabelPolicy::new("1");
        assert!(policy.resolve("1").is_positive());
        assert!(!policy.resolve("1.0").is_positive());
    }
}
