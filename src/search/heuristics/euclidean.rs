use crate::search::heuristics::{GridCoordinate, HeuristicValue};

/// `sqrt(drow^2 + dcol^2)`. Consistent for metric planar problems.
pub fn euclidean_distance(from: GridCoordinate, to: GridCoordinate) -> HeuristicValue {
    let d_row = (from.0 - to.0) as f64;
    let d_col = (from.1 - to.1) as f64;
    d_row.hypot(d_col).into()
}
