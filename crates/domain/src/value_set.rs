use serde::Serialize;
use std::cmp::Ordering;

/// Sorted list of values observed together under one key.
///
/// Ordering is by length first, then element by element. It is the sort key
/// and the equality test used when merging runs, so both must agree; wrap in
/// `Option` to get "missing sorts first" for free.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ValueSet(Vec<String>);

impl ValueSet {
    /// Builds a set from values in any order; the values are sorted.
    pub fn from_unsorted(mut values: Vec<String>) -> Self {
        values.sort();
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[String] {
        &self.0
    }

    pub fn into_values(self) -> Vec<String> {
        self.0
    }
}

impl Ord for ValueSet {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().cmp(other.0.iter()))
    }
}

impl PartialOrd for ValueSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Vec<String>> for ValueSet {
    fn from(values: Vec<String>) -> Self {
        Self::from_unsorted(values)
    }
}
