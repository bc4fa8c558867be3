//! Per-column sort rules and the comparison key they produce.

use std::cmp::Ordering;

use markdom::Element;

use super::{ATTR_SORT_CASE_INSENSITIVE, ATTR_SORT_CAST};

/// Per-column sort configuration, derived once from header markup at bind
/// time. Disabled columns never get a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortRule {
    pub cast_to_number: bool,
    pub case_insensitive: bool,
}

impl SortRule {
    pub(crate) fn from_header(header: &Element) -> Self {
        Self {
            cast_to_number: header.attr_is(ATTR_SORT_CAST, "number"),
            case_insensitive: header.attr_is(ATTR_SORT_CASE_INSENSITIVE, "true"),
        }
    }

    /// Build the comparison key for one raw cell value.
    ///
    /// Case folding only applies to string keys; under a numeric cast the
    /// key is either a number or `Unordered`.
    pub fn key_for(&self, raw: &str) -> SortKey {
        if self.cast_to_number {
            return match raw.trim().parse::<f64>() {
                Ok(n) if !n.is_nan() => SortKey::Number(n),
                _ => SortKey::Unordered,
            };
        }

        if self.case_insensitive {
            SortKey::Text(raw.to_lowercase())
        } else {
            SortKey::Text(raw.to_string())
        }
    }
}

/// A row's comparison key for the active column.
///
/// Total order: `Unordered < Number < Text`. A numeric cast that fails to
/// parse (or parses to NaN) yields `Unordered`, so such rows always sort
/// below every real number - a deterministic placement instead of the
/// host-dependent NaN ordering of the comparison operators.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Unordered,
    Number(f64),
    Text(String),
}

// `Number` never holds NaN (key_for filters it out).
impl Eq for SortKey {}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Unordered, Unordered) => Ordering::Equal,
            (Unordered, _) => Ordering::Less,
            (_, Unordered) => Ordering::Greater,
            (Number(a), Number(b)) => a.total_cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
            (Text(a), Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
