use crate::search::heuristics::{GridCoordinate, HeuristicValue};

/// `|drow| + |dcol|`. Consistent on 4-connected grids with unit step cost.
pub fn manhattan_distance(from: GridCoordinate, to: GridCoordinate) -> HeuristicValue {
    (((from.0 - to.0).abs() + (from.1 - to.1).abs()) as f64).into()
}
