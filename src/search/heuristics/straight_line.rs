use crate::search::{Heuristic, HeuristicValue};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// Pre-tabulated straight-line distances to a fixed goal, as used for route
/// finding on maps. Admissible as long as every entry lower-bounds the true
/// remaining cost. States missing from the table evaluate to zero.
#[derive(Debug, Clone)]
pub struct StraightLineTable<S: Hash + Eq> {
    distances: HashMap<S, HeuristicValue>,
}

impl<S: Hash + Eq> StraightLineTable<S> {
    pub fn new() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    pub fn insert(&mut self, state: S, distance: f64) {
        self.distances.insert(state, distance.into());
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<S: Hash + Eq> Default for StraightLineTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hash + Eq> FromIterator<(S, f64)> for StraightLineTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (state, distance) in iter {
            table.insert(state, distance);
        }
        table
    }
}

impl<S: Hash + Eq + Debug> Heuristic<S> for StraightLineTable<S> {
    fn evaluate(&self, state: &S) -> HeuristicValue {
        self.distances
            .get(state)
            .copied()
            .unwrap_or(HeuristicValue::from(0.))
    }
}
