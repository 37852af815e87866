use crate::search::heuristics::{GridCoordinate, HeuristicValue};

/// `max(|drow|, |dcol|)`. Admissible on 8-connected grids whose diagonal
/// steps cost at least one, but not tight when they cost more.
pub fn chebyshev_distance(from: GridCoordinate, to: GridCoordinate) -> HeuristicValue {
    ((from.0 - to.0).abs().max((from.1 - to.1).abs()) as f64).into()
}
